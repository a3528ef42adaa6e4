//! # Booru post-search query compiler
//!
//! `booru-query` turns the token stream of a user-typed post search into a
//! typed [`PostFilter`] the query executor can translate into predicates.
//! Tokenization itself happens upstream; this crate starts at [`Token`] and
//! ends at the compiled filter, covering value-shape validation
//! (single/composite/range) and calendar-aware date resolution along the
//! way.
//!
//! Compilation is all-or-nothing: the first unsupported key, disallowed
//! value shape, or malformed date aborts with a [`QueryError`] and the
//! caller never sees a partially built filter.
//!
//! ## Example
//! ```
//! use booru_query::{compile, DateContext, RequirementKind, Token, Value};
//!
//! let tokens = [
//!     Token::plain("landscape"),
//!     Token::plain("sketch").negate(),
//!     Token::named("tag_count", "3.."),
//! ];
//! let filter = compile(&tokens, &DateContext::capture()).unwrap();
//!
//! assert_eq!(filter.requirements.len(), 3);
//! assert_eq!(filter.requirements[0].kind, RequirementKind::Tag);
//! assert!(filter.requirements[1].negated);
//! assert!(matches!(filter.requirements[2].value, Value::Range(_)));
//! ```

mod error;
mod filter;
mod parser;
mod token;
mod value;

pub use date_span::{DateContext, DateFormatError, DateSpan};
pub use error::QueryError;
pub use filter::{Order, OrderColumn, OrderDirection, PostFilter, Requirement, RequirementKind};
pub use parser::{apply_plain_token, apply_token, compile, resolve_order_column};
pub use token::Token;
pub use value::{parse_value, Capability, RangeValue, Value};
