use core::cmp::Ordering;
use core::str::FromStr;

use crate::error::Error;

/// Wire convention for parameters carrying more than one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    /// `a=1&a=2`
    #[default]
    None,
    /// `a[]=1&a[]=2`
    Bracket,
    /// `a[0]=1&a[1]=2`
    Index,
    /// `a=1,2`
    Comma,
    /// `a=1|2` with a configurable separator
    Separator,
    /// `a[]=1|2` with a configurable separator
    BracketSeparator,
    /// `a:list=1&a:list=2`
    ColonListSeparator,
}

impl ArrayFormat {
    /// Name used by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bracket => "bracket",
            Self::Index => "index",
            Self::Comma => "comma",
            Self::Separator => "separator",
            Self::BracketSeparator => "bracket-separator",
            Self::ColonListSeparator => "colon-list-separator",
        }
    }
}

impl FromStr for ArrayFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "bracket" => Ok(Self::Bracket),
            "index" => Ok(Self::Index),
            "comma" => Ok(Self::Comma),
            "separator" => Ok(Self::Separator),
            "bracket-separator" => Ok(Self::BracketSeparator),
            "colon-list-separator" => Ok(Self::ColonListSeparator),
            _ => Err(Error::InvalidArrayFormat),
        }
    }
}

impl core::fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key ordering applied by `parse` and `stringify`
#[derive(Debug, Clone, Copy, Default)]
pub enum Sort {
    /// Byte-wise ascending order of names
    #[default]
    Ascending,
    /// Order of first occurrence
    Insertion,
    /// Custom comparator over names
    By(fn(&str, &str) -> Ordering),
}

impl Sort {
    /// Reorder `items` by name. Stable, so equal names keep their order.
    pub(crate) fn apply<T>(self, items: &mut [T], name: impl Fn(&T) -> &str) {
        match self {
            Self::Ascending => items.sort_by(|a, b| name(a).cmp(name(b))),
            Self::Insertion => {}
            Self::By(compare) => items.sort_by(|a, b| compare(name(a), name(b))),
        }
    }
}
