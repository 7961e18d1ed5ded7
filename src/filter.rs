use core::convert::Infallible;

use crate::compat::{BTreeSet, Box, String, ToString, Vec};
use crate::options::Options;
use crate::parser::parse;
use crate::query::Query;
use crate::serializer::stringify;
use crate::url_parts::split_url;
use crate::value::Value;

/// Decides which query parameters a transform matches.
///
/// Names are compared after decoding, so `foo%5Bbar%5D` matches `"foo[bar]"`.
/// A predicate sees each name once, together with its parsed value; names
/// repeated on the wire arrive as a [`Value::List`].
pub enum Filter<'a> {
    Names(BTreeSet<String>),
    Predicate(Box<dyn FnMut(&str, &Value) -> bool + 'a>),
}

impl<'a> Filter<'a> {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn predicate(predicate: impl FnMut(&str, &Value) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn matches(&mut self, name: &str, value: &Value) -> bool {
        match self {
            Self::Names(names) => names.contains(name),
            Self::Predicate(predicate) => predicate(name, value),
        }
    }
}

impl core::fmt::Debug for Filter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Names(names) => f.debug_tuple("Names").field(names).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&[&str]> for Filter<'_> {
    fn from(names: &[&str]) -> Self {
        Self::names(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Filter<'_> {
    fn from(names: [&str; N]) -> Self {
        Self::names(names)
    }
}

impl<const N: usize> From<&[&str; N]> for Filter<'_> {
    fn from(names: &[&str; N]) -> Self {
        Self::names(names.iter().copied())
    }
}

impl From<Vec<&str>> for Filter<'_> {
    fn from(names: Vec<&str>) -> Self {
        Self::names(names)
    }
}

impl From<Vec<String>> for Filter<'_> {
    fn from(names: Vec<String>) -> Self {
        Self::names(names)
    }
}

impl From<&[String]> for Filter<'_> {
    fn from(names: &[String]) -> Self {
        Self::names(names.iter().cloned())
    }
}

/// Remove the matching parameters from a URL's query.
///
/// Everything outside the query is copied byte for byte; the remaining
/// parameters are re-serialized with `options`. A URL without `?` comes back
/// unchanged, and the `?` is dropped when nothing survives.
///
/// ```
/// use query_string::{Filter, Options};
///
/// let options = Options::new();
/// assert_eq!(
///     query_string::exclude("http://example.com/?a=1&b=2&c=3#a", ["c"], &options),
///     "http://example.com/?a=1&b=2#a"
/// );
/// assert_eq!(
///     query_string::exclude(
///         "/path?a=1&b=2",
///         Filter::predicate(|name, _| name == "a"),
///         &options,
///     ),
///     "/path?b=2"
/// );
/// ```
pub fn exclude<'a>(url: &str, filter: impl Into<Filter<'a>>, options: &Options) -> String {
    let mut filter = filter.into();
    into_ok(retain_url(url, options, |name, value| {
        Ok(!filter.matches(name, value))
    }))
}

/// Keep only the matching parameters of a URL's query.
/// The dual of [`exclude`], with the same guarantees.
pub fn pick<'a>(url: &str, filter: impl Into<Filter<'a>>, options: &Options) -> String {
    let mut filter = filter.into();
    into_ok(retain_url(url, options, |name, value| {
        Ok(filter.matches(name, value))
    }))
}

/// [`exclude`] with a fallible predicate.
///
/// # Errors
///
/// Returns the first error of `predicate` unchanged; no URL is produced.
pub fn try_exclude<E>(
    url: &str,
    mut predicate: impl FnMut(&str, &Value) -> Result<bool, E>,
    options: &Options,
) -> Result<String, E> {
    retain_url(url, options, |name, value| predicate(name, value).map(|hit| !hit))
}

/// [`pick`] with a fallible predicate.
///
/// # Errors
///
/// Returns the first error of `predicate` unchanged; no URL is produced.
pub fn try_pick<E>(
    url: &str,
    predicate: impl FnMut(&str, &Value) -> Result<bool, E>,
    options: &Options,
) -> Result<String, E> {
    retain_url(url, options, predicate)
}

/// Split, parse, keep what `keep` accepts in parse order, then rejoin.
fn retain_url<E>(
    url: &str,
    options: &Options,
    mut keep: impl FnMut(&str, &Value) -> Result<bool, E>,
) -> Result<String, E> {
    let parts = split_url(url);
    let Some(raw_query) = parts.query else {
        debug!(url, "no query component, returning input unchanged");
        return Ok(url.to_string());
    };

    let query = parse(raw_query, options);
    let total = query.len();
    let mut kept = Vec::with_capacity(total);
    for (name, value) in query {
        if keep(&name, &value)? {
            kept.push((name, value));
        }
    }

    debug!(kept = kept.len(), dropped = total - kept.len(), "filtered query");
    let query = Query::from_entries(kept);
    Ok(parts.join(&stringify(&query, options)))
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
