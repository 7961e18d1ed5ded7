mod grouping;

use grouping::Grouper;

use crate::codec::decode;
use crate::compat::Cow;
use crate::options::Options;
use crate::query::Query;
use crate::value::Scalar;

/// Parse a query string into an ordered mapping.
///
/// A leading `?`, `#` or `&` is ignored, as are empty pairs. Parsing never
/// fails: malformed escapes are kept as written.
///
/// ```
/// use query_string::{Options, Value};
///
/// let query = query_string::parse("?b=2&a=1&a", &Options::new());
/// let keys: Vec<&str> = query.keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// assert_eq!(query.get("a"), Some(&Value::from(vec![Some("1"), None])));
/// ```
pub fn parse(query: &str, options: &Options) -> Query {
    let query = query.trim();
    let query = query.strip_prefix(&['?', '#', '&'][..]).unwrap_or(query);

    let mut grouper = Grouper::new(options);
    for parameter in query.split('&').filter(|p| !p.is_empty()) {
        let parameter = if options.decode && parameter.contains('+') {
            Cow::Owned(parameter.replace('+', " "))
        } else {
            Cow::Borrowed(parameter)
        };

        let (name, value) = match parameter.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (&*parameter, None),
        };
        let name = if options.decode {
            decode(name)
        } else {
            Cow::Borrowed(name)
        };
        grouper.push(&name, value);
    }

    let mut entries = grouper.finish();
    if options.parse_numbers || options.parse_booleans {
        for (_, value) in &mut entries {
            for scalar in value.scalars_mut() {
                coerce(scalar, options);
            }
        }
    }
    options.sort.apply(&mut entries, |(name, _)| name.as_str());

    Query::from_entries(entries)
}

fn coerce(scalar: &mut Scalar, options: &Options) {
    let Scalar::String(text) = scalar else {
        return;
    };
    if options.parse_numbers {
        if let Some(number) = parse_number(text) {
            *scalar = Scalar::Number(number);
            return;
        }
    }
    if options.parse_booleans {
        let flag = match text.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        if let Some(flag) = flag {
            *scalar = Scalar::Bool(flag);
        }
    }
}

/// Parse a complete decimal literal, surrounding ASCII whitespace allowed.
/// `inf`, `NaN`, hex and empty strings are not numbers here.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if !is_decimal_literal(text.as_bytes()) {
        return None;
    }
    text.parse().ok()
}

fn is_decimal_literal(bytes: &[u8]) -> bool {
    let digits = |bytes: &[u8]| bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits(&bytes[pos..]);
    pos += integer;

    let mut fraction = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        fraction = digits(&bytes[pos..]);
        pos += fraction;
    }
    if integer == 0 && fraction == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent = digits(&bytes[pos..]);
        if exponent == 0 {
            return false;
        }
        pos += exponent;
    }

    pos == bytes.len()
}
