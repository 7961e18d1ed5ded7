use crate::compat::String;

/// A URL cut around its query component, borrowing from the input.
///
/// Layout: `"<prefix>?<query><fragment>"` where the fragment keeps its `#`.
/// Joining the three parts back together reproduces the input, except that
/// a `?` with an empty query is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    /// Scheme, authority and path; everything before `?` or `#`
    pub prefix: &'a str,
    /// Raw query without its `?`; `None` when the input has no `?`
    pub query: Option<&'a str>,
    /// Fragment including its `#`, or empty
    pub fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Reassemble with a replacement query (without `?`).
    /// An empty query omits the `?` entirely.
    pub fn join(&self, query: &str) -> String {
        let mut url = String::with_capacity(self.prefix.len() + query.len() + self.fragment.len() + 1);
        url.push_str(self.prefix);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url.push_str(self.fragment);
        url
    }

    /// Raw query, empty when absent
    pub fn query_str(&self) -> &'a str {
        self.query.unwrap_or_default()
    }
}

impl core::fmt::Display for UrlParts<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.join(self.query_str()))
    }
}

/// Split a URL or relative reference in a single pass.
/// The first `#` starts the fragment; the first `?` before it starts the query.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, fragment) = prune_fragment(url);
    match memchr::memchr(b'?', rest.as_bytes()) {
        Some(pos) => UrlParts {
            prefix: &rest[..pos],
            query: Some(&rest[pos + 1..]),
            fragment,
        },
        None => UrlParts {
            prefix: rest,
            query: None,
            fragment,
        },
    }
}

/// Raw query string of a URL, without `?` or fragment.
///
/// ```
/// assert_eq!(query_string::extract("https://a.test/p?x=1&y=2#top"), "x=1&y=2");
/// assert_eq!(query_string::extract("https://a.test/p#x?y"), "");
/// ```
pub fn extract(url: &str) -> &str {
    split_url(url).query_str()
}

/// Returns (`url_without_fragment`, `fragment_with_hash`)
fn prune_fragment(input: &str) -> (&str, &str) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, ""), |pos| input.split_at(pos))
}
