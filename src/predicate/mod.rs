//! Predicate combinators for composable string validation
//!
//! This module provides the foundational [`Predicate`] trait, logical
//! combinators, and the positional string predicates the code formats in
//! this crate are built from.
//!
//! # Philosophy
//!
//! Instead of one opaque boolean expression per format, a format is
//! assembled from small, reusable checks that each inspect one structural
//! property of the input. The combinators compose them with familiar
//! logical operators, short-circuiting left to right.
//!
//! # Example
//!
//! ```rust
//! use turnstile::predicate::*;
//!
//! fn uppercase(c: char) -> bool {
//!     c.is_ascii_uppercase()
//! }
//!
//! // A two-character uppercase tag like "AB"
//! let tag = len_eq(2).and(chars_in_range(0..2, uppercase));
//! assert!(tag.check("AB"));
//! assert!(!tag.check("Ab"));
//! assert!(!tag.check("ABC"));
//! ```

mod combinators;
mod string;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, AllOf, And, Not, Or};

// Re-export string predicates
pub use string::{
    char_at, chars_in_range, lacks_in, len_eq, CharAt, CharsInRange, LacksIn, LenEq,
};
