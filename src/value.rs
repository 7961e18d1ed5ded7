use crate::compat::{String, ToString, Vec};

/// One parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Parameter present without `=`
    Null,
    String(String),
    /// Only produced when number parsing is enabled
    Number(f64),
    /// Only produced when boolean parsing is enabled
    Bool(bool),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub(crate) fn is_empty_string(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }

    /// Wire text before percent-encoding. `None` for `Null`.
    pub(crate) fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
        }
    }
}

/// Render a number the way `String(n)` does for the usual range
fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also covers -0
        return String::from("0");
    }
    if n.is_infinite() {
        return String::from(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    n.to_string()
}

/// Value stored under one name: a single scalar or every scalar in order
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Single(Scalar),
    List(Vec<Scalar>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Single(Scalar::Null))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The string of a single string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(scalar) => scalar.as_str(),
            Self::List(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Single(scalar) => Some(scalar),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::Single(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Append a scalar, turning a single value into a two-element list.
    pub(crate) fn push(&mut self, scalar: Scalar) {
        match self {
            Self::List(items) => items.push(scalar),
            Self::Single(first) => {
                let first = core::mem::replace(first, Scalar::Null);
                *self = Self::List(Vec::from([first, scalar]));
            }
        }
    }

    /// Append several scalars, always leaving a list behind.
    pub(crate) fn extend(&mut self, scalars: Vec<Scalar>) {
        match self {
            Self::List(items) => items.extend(scalars),
            Self::Single(first) => {
                let first = core::mem::replace(first, Scalar::Null);
                let mut items = Vec::with_capacity(scalars.len() + 1);
                items.push(first);
                items.extend(scalars);
                *self = Self::List(items);
            }
        }
    }

    pub(crate) fn scalars_mut(&mut self) -> &mut [Scalar] {
        match self {
            Self::Single(scalar) => core::slice::from_mut(scalar),
            Self::List(items) => items,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_single_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Single(value.into())
                }
            }
        )*
    };
}

impl_single_from!(Scalar, &str, String, f64, i32, bool, Option<&str>, Option<String>);

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
