use crate::compat::{Cow, String, Vec};
use crate::options::Options;
use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

/// `encodeURIComponent` set: everything except ASCII alphanumerics and
/// `-_.!~*'()`
pub const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strict set (RFC 3986 unreserved only): `URI_COMPONENT_SET` + `!'()*`
pub const STRICT_URI_COMPONENT_SET: &AsciiSet = &URI_COMPONENT_SET
    .add(b'!')
    .add(b'*')
    .add(b'\'')
    .add(b'(')
    .add(b')');

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Percent-encode a name or value for the query component.
/// Borrows when nothing needs escaping or encoding is disabled.
pub fn encode<'a>(component: &'a str, options: &Options) -> Cow<'a, str> {
    if !options.encode {
        return Cow::Borrowed(component);
    }
    let set = if options.strict {
        STRICT_URI_COMPONENT_SET
    } else {
        URI_COMPONENT_SET
    };
    utf8_percent_encode(component, set).into()
}

/// Percent-encode a fragment (without its `#`)
pub fn encode_fragment(fragment: &str) -> Cow<'_, str> {
    utf8_percent_encode(fragment, FRAGMENT_SET).into()
}

/// Decode percent escapes without ever failing.
///
/// A `%` not followed by two hex digits is kept as-is. Escaped bytes that do
/// not form valid UTF-8 keep their original `%XX` spelling while the valid
/// parts around them are decoded.
pub fn decode(component: &str) -> Cow<'_, str> {
    let bytes = component.as_bytes();
    let Some(first) = memchr::memchr(b'%', bytes) else {
        return Cow::Borrowed(component);
    };

    let mut result = String::with_capacity(component.len());
    result.push_str(&component[..first]);

    let mut pos = first;
    while pos < bytes.len() {
        // pos is always at a '%'
        let run_start = pos;
        let mut run = Vec::new();
        while let Some(byte) = escaped_byte_at(bytes, pos) {
            run.push(byte);
            pos += 3;
        }

        if run.is_empty() {
            result.push('%');
            pos += 1;
        } else {
            push_escape_run(&mut result, &component[run_start..pos], &run);
        }

        let next = memchr::memchr(b'%', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
        result.push_str(&component[pos..next]);
        pos = next;
    }

    Cow::Owned(result)
}

/// Decoded byte of a `%XX` escape starting at `pos`
fn escaped_byte_at(bytes: &[u8], pos: usize) -> Option<u8> {
    match bytes.get(pos..pos + 3)? {
        [b'%', hi, lo] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Push a run of consecutive escapes. `raw` is the escaped text, three
/// characters per byte of `decoded`.
fn push_escape_run(result: &mut String, raw: &str, decoded: &[u8]) {
    let mut offset = 0;
    for chunk in decoded.utf8_chunks() {
        result.push_str(chunk.valid());
        offset += chunk.valid().len();

        let invalid = chunk.invalid().len();
        if invalid > 0 {
            result.push_str(&raw[offset * 3..(offset + invalid) * 3]);
            offset += invalid;
        }
    }
}
