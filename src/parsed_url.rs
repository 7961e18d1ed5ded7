use crate::codec::{decode, encode_fragment};
use crate::compat::{String, ToString, format};
use crate::options::Options;
use crate::parser::parse;
use crate::query::Query;
use crate::serializer::stringify;
use crate::types::Sort;
use crate::url_parts::{UrlParts, split_url};

/// A URL with its query parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedUrl {
    /// Everything before the query and fragment
    pub url: String,
    pub query: Query,
    /// Fragment without its `#`; `None` when the URL has no `#`
    pub fragment: Option<String>,
}

/// Split a URL and parse its query.
///
/// The fragment is returned as written unless `parse_fragment_identifier`
/// is set, in which case it is percent-decoded.
///
/// ```
/// use query_string::{Options, Value};
///
/// let parsed = query_string::parse_url("https://a.test/p?x=1#s%20t", &Options::new());
/// assert_eq!(parsed.url, "https://a.test/p");
/// assert_eq!(parsed.query.get("x"), Some(&Value::from("1")));
/// assert_eq!(parsed.fragment.as_deref(), Some("s%20t"));
/// ```
pub fn parse_url(url: &str, options: &Options) -> ParsedUrl {
    let parts = split_url(url);
    let fragment = parts.fragment.strip_prefix('#').map(|fragment| {
        if options.parse_fragment_identifier {
            decode(fragment).into_owned()
        } else {
            fragment.to_string()
        }
    });

    ParsedUrl {
        url: parts.prefix.to_string(),
        query: parse(parts.query_str(), options),
        fragment,
    }
}

/// Build a URL from its parts.
///
/// A query or fragment already present in `parsed.url` is kept: embedded
/// parameters are merged under the ones in `parsed.query`, which win on
/// conflicts, and the embedded fragment is used when `parsed.fragment` is
/// `None`. `encode_fragment_identifier` percent-encodes `parsed.fragment`.
///
/// ```
/// use query_string::{Options, ParsedUrl, Query};
///
/// let parsed = ParsedUrl {
///     url: "https://a.test/p?b=1".into(),
///     query: [("a", "x y")].into_iter().collect::<Query>(),
///     fragment: Some("top".into()),
/// };
/// assert_eq!(
///     query_string::stringify_url(&parsed, &Options::new()),
///     "https://a.test/p?a=x%20y&b=1#top"
/// );
/// ```
pub fn stringify_url(parsed: &ParsedUrl, options: &Options) -> String {
    let parts = split_url(&parsed.url);

    let mut query = parse(parts.query_str(), &options.sort(Sort::Insertion));
    query.extend(parsed.query.iter().map(|(name, value)| (name, value.clone())));

    let fragment = match parsed.fragment.as_deref() {
        Some(fragment) if options.encode_fragment_identifier => {
            format!("#{}", encode_fragment(fragment))
        }
        Some(fragment) => format!("#{fragment}"),
        None => parts.fragment.to_string(),
    };

    debug!(
        url = parsed.url.as_str(),
        parameters = query.len(),
        "stringifying url"
    );

    UrlParts {
        prefix: parts.prefix,
        query: None,
        fragment: &fragment,
    }
    .join(&stringify(&query, options))
}
