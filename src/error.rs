/// Errors raised by invalid configuration.
///
/// Data never fails: malformed percent escapes and odd query strings are
/// handled leniently. Only options that cannot be honored are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown array format name
    InvalidArrayFormat,
    /// Array format separator collides with query syntax
    InvalidSeparator,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidArrayFormat => "Invalid array format",
            Self::InvalidSeparator => "Invalid array format separator",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for option validation
pub type Result<T> = core::result::Result<T, Error>;
