//! Parse, stringify and filter URL query strings.
//!
//! ```
//! use query_string::{ArrayFormat, Options, Value};
//!
//! let options = Options::new().array_format(ArrayFormat::Bracket);
//! let query = query_string::parse("ids[]=1&ids[]=2&q=rust", &options);
//! assert_eq!(query.get("ids"), Some(&Value::from(vec!["1", "2"])));
//! assert_eq!(query_string::stringify(&query, &options), "ids[]=1&ids[]=2&q=rust");
//!
//! let url = query_string::exclude("https://example.com/?a=1&b=2#top", ["b"], &options);
//! assert_eq!(url, "https://example.com/?a=1#top");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (re-exported below)
mod codec;
mod error;
mod filter;
mod options;
mod parsed_url;
mod parser;
mod query;
mod serializer;
mod types;
mod url_parts;
mod value;

// Public API
pub use codec::{decode, encode, encode_fragment};
pub use error::{Error, Result};
pub use filter::{Filter, exclude, pick, try_exclude, try_pick};
pub use options::Options;
pub use parsed_url::{ParsedUrl, parse_url, stringify_url};
pub use parser::parse;
pub use query::Query;
pub use serializer::stringify;
pub use types::{ArrayFormat, Sort};
pub use url_parts::{UrlParts, extract, split_url};
pub use value::{Scalar, Value};
