#![forbid(unsafe_code)]

//! Token patterns and the matcher compiler.
//!
//! A [Pattern] describes sequences of tagged [Token]s. Lists of
//! `(Pattern, result)` pairs are compiled into a [TokenMatcher], which reports
//! every result whose pattern matches a given token span.

pub use error::PatternError;
pub use matcher::{MatchMode, TokenMatch, TokenMatcher};
pub use pattern::{Pattern, TagCondition, TokenPattern};
pub use tags::TagSet;
pub use token::Token;

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod tags;
pub mod token;

mod regex_util;
