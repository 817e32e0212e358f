//! # Turnstile
//!
//! > *"Every code passes the gate, or it doesn't"*
//!
//! A Rust library for fixed-format string validation: POS codes and
//! institutional credential formats.
//!
//! ## Philosophy
//!
//! **Turnstile** keeps validation where it belongs — in pure, total
//! predicates. Every check in this crate is a function from a string to a
//! boolean: no exceptions, no partial failures, no state. Malformed input
//! is simply *invalid*, never an error.
//!
//! The crate covers two independent concerns:
//!
//! - **POS codes**: 6-character codes shaped `LL DDD L` (two uppercase
//!   letters, three digits with no adjacent `"00"` pair, one uppercase
//!   letter), with a demand-driven enumerator over the full code space.
//! - **Credential patterns**: anchored regular-language checks for
//!   password and institutional-email formats.
//!
//! ## Quick Example
//!
//! ```rust
//! use turnstile::{generate_valid_codes, is_valid_pos_code, PosCode};
//!
//! assert!(is_valid_pos_code("AB123C"));
//! assert!(!is_valid_pos_code("XY000Z")); // adjacent-zero pair
//!
//! // Parse once, then carry the guarantee in the type
//! let code = PosCode::parse("AB123C").unwrap();
//! assert_eq!(code.digits(), "123");
//!
//! // Enumeration is lazy: only ten codes are ever built here
//! let first_ten: Vec<PosCode> = generate_valid_codes(Some(10)).collect();
//! assert_eq!(first_ten.len(), 10);
//! assert!(first_ten.iter().all(|c| is_valid_pos_code(c.as_str())));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod code;
pub mod pattern;
pub mod predicate;
pub mod testing;

// Re-exports
pub use code::{
    generate_valid_codes, is_valid_pos_code, CodeEnumerator, ParseCodeError, PosCode,
    TOTAL_VALID_CODES, VALID_DIGIT_TRIPLES,
};
pub use pattern::{is_valid_institutional_email, is_valid_password, INSTITUTIONAL_DOMAIN};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::code::{
        generate_valid_codes, is_valid_pos_code, CodeEnumerator, ParseCodeError, PosCode,
    };
    pub use crate::pattern::{is_valid_institutional_email, is_valid_password};
    pub use crate::predicate::{Predicate, PredicateExt};
}
