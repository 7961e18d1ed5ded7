use crate::error::{Error, Result};
use crate::types::{ArrayFormat, Sort};

/// Configuration shared by every operation.
///
/// Each operation reads the fields relevant to it: `parse` uses the decoding
/// and coercion switches, `stringify` the encoding and skipping switches,
/// and the URL-level operations both. The separator is validated when set,
/// so an `Options` value is always usable.
///
/// ```
/// use query_string::{ArrayFormat, Options};
///
/// let options = Options::new()
///     .array_format(ArrayFormat::Bracket)
///     .parse_numbers(true);
/// let query = query_string::parse("a[]=1&a[]=2", &options);
/// assert_eq!(query.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub(crate) decode: bool,
    pub(crate) encode: bool,
    pub(crate) strict: bool,
    pub(crate) array_format: ArrayFormat,
    pub(crate) array_format_separator: char,
    pub(crate) sort: Sort,
    pub(crate) parse_numbers: bool,
    pub(crate) parse_booleans: bool,
    pub(crate) skip_null: bool,
    pub(crate) skip_empty_string: bool,
    pub(crate) parse_fragment_identifier: bool,
    pub(crate) encode_fragment_identifier: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decode: true,
            encode: true,
            strict: true,
            array_format: ArrayFormat::None,
            array_format_separator: ',',
            sort: Sort::Ascending,
            parse_numbers: false,
            parse_booleans: false,
            skip_null: false,
            skip_empty_string: false,
            parse_fragment_identifier: false,
            encode_fragment_identifier: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percent-decode names and values while parsing. Default `true`.
    #[must_use]
    pub fn decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Percent-encode names and values while stringifying. Default `true`.
    /// When `false` the caller asserts the text is already safe.
    #[must_use]
    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Also encode `!'()*`. Default `true`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Separator for `Separator` and `BracketSeparator` formats. Default `,`.
    ///
    /// # Errors
    ///
    /// `&`, `#`, `%` and `+` are rejected: they already mean pair boundary,
    /// fragment start, escape, and space.
    pub fn array_format_separator(mut self, separator: char) -> Result<Self> {
        if matches!(separator, '&' | '#' | '%' | '+') {
            return Err(Error::InvalidSeparator);
        }
        self.array_format_separator = separator;
        Ok(self)
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Coerce numeric strings to numbers. Default `false`.
    #[must_use]
    pub fn parse_numbers(mut self, parse_numbers: bool) -> Self {
        self.parse_numbers = parse_numbers;
        self
    }

    /// Coerce `"true"`/`"false"` to booleans. Default `false`.
    #[must_use]
    pub fn parse_booleans(mut self, parse_booleans: bool) -> Self {
        self.parse_booleans = parse_booleans;
        self
    }

    #[must_use]
    pub fn skip_null(mut self, skip_null: bool) -> Self {
        self.skip_null = skip_null;
        self
    }

    #[must_use]
    pub fn skip_empty_string(mut self, skip_empty_string: bool) -> Self {
        self.skip_empty_string = skip_empty_string;
        self
    }

    /// Percent-decode the fragment returned by `parse_url`. Default `false`.
    #[must_use]
    pub fn parse_fragment_identifier(mut self, parse_fragment_identifier: bool) -> Self {
        self.parse_fragment_identifier = parse_fragment_identifier;
        self
    }

    /// Percent-encode the fragment written by `stringify_url`. Default `false`.
    #[must_use]
    pub fn encode_fragment_identifier(mut self, encode_fragment_identifier: bool) -> Self {
        self.encode_fragment_identifier = encode_fragment_identifier;
        self
    }

    /// Separator actually used on the wire for the configured format.
    pub(crate) fn separator(&self) -> char {
        match self.array_format {
            ArrayFormat::Comma => ',',
            _ => self.array_format_separator,
        }
    }
}
