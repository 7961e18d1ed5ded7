use crate::codec::encode;
use crate::compat::{String, ToString, Vec, format};
use crate::options::Options;
use crate::query::Query;
use crate::types::ArrayFormat;
use crate::value::{Scalar, Value};

/// Serialize a mapping into a query string without a leading `?`.
///
/// Keys are ordered by `options.sort`. An empty mapping, or one whose
/// entries are all skipped, yields an empty string.
///
/// ```
/// use query_string::{ArrayFormat, Options, Query, Value};
///
/// let mut query = Query::new();
/// query.insert("tags", Value::from(vec!["a b", "c"]));
/// query.insert("page", 2);
///
/// let options = Options::new().array_format(ArrayFormat::Bracket);
/// assert_eq!(
///     query_string::stringify(&query, &options),
///     "page=2&tags[]=a%20b&tags[]=c"
/// );
/// ```
pub fn stringify(query: &Query, options: &Options) -> String {
    let mut entries: Vec<(&str, &Value)> = query
        .iter()
        .filter(|(_, value)| !skips_value(value, options))
        .collect();
    options.sort.apply(&mut entries, |(name, _)| *name);

    let mut pairs = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let name = encode(name, options);
        match value {
            Value::Single(scalar) => pairs.push(scalar_pair(&name, scalar, options)),
            Value::List(items) => push_list(&mut pairs, &name, items, options),
        }
    }

    pairs.retain(|pair| !pair.is_empty());
    pairs.join("&")
}

fn skips_value(value: &Value, options: &Options) -> bool {
    match value {
        Value::Single(scalar) => skips_scalar(scalar, options),
        Value::List(_) => false,
    }
}

fn skips_scalar(scalar: &Scalar, options: &Options) -> bool {
    (options.skip_null && scalar.is_null()) || (options.skip_empty_string && scalar.is_empty_string())
}

/// `name=value`, or a bare `name` for `Null`
fn scalar_pair(name: &str, scalar: &Scalar, options: &Options) -> String {
    match scalar.to_text() {
        None => name.to_string(),
        Some(text) => format!("{name}={}", encode(&text, options)),
    }
}

/// Emit the pairs of one list under the configured array format.
/// `name` is already encoded.
fn push_list(pairs: &mut Vec<String>, name: &str, items: &[Scalar], options: &Options) {
    let kept = items.iter().filter(|item| !skips_scalar(item, options));

    match options.array_format {
        ArrayFormat::None => pairs.extend(kept.map(|item| scalar_pair(name, item, options))),
        ArrayFormat::Bracket => pairs.extend(kept.map(|item| match item.to_text() {
            None => format!("{name}[]"),
            Some(text) => format!("{name}[]={}", encode(&text, options)),
        })),
        ArrayFormat::Index => pairs.extend(kept.enumerate().map(|(index, item)| {
            match item.to_text() {
                None => format!("{name}[{index}]"),
                Some(text) => format!("{name}[{index}]={}", encode(&text, options)),
            }
        })),
        ArrayFormat::ColonListSeparator => pairs.extend(kept.map(|item| {
            let text = item.to_text().unwrap_or_default();
            format!("{name}:list={}", encode(&text, options))
        })),
        ArrayFormat::Comma | ArrayFormat::Separator | ArrayFormat::BracketSeparator => {
            let key_value_separator = if options.array_format == ArrayFormat::BracketSeparator {
                "[]="
            } else {
                "="
            };
            if items.is_empty() && options.array_format == ArrayFormat::BracketSeparator {
                pairs.push(format!("{name}[]"));
                return;
            }

            let values: Vec<String> = kept
                .map(|item| {
                    let text = item.to_text().unwrap_or_default();
                    encode(&text, options).into_owned()
                })
                .collect();
            if !values.is_empty() {
                let mut separator = [0; 4];
                let separator = options.separator().encode_utf8(&mut separator);
                pairs.push(format!(
                    "{name}{key_value_separator}{}",
                    values.join(&*separator)
                ));
            }
        }
    }
}
