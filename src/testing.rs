//! Testing utilities and helpers for Turnstile
//!
//! This module provides assertion macros for validator functions and,
//! behind the `proptest` feature, strategies for generating valid inputs
//! in property-based tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use turnstile::{assert_invalid, assert_valid, is_valid_pos_code};
//!
//! assert_valid!(is_valid_pos_code, "AB123C");
//! assert_invalid!(is_valid_pos_code, "XY000Z");
//! ```

/// Assert that a validator accepts an input.
///
/// Produces a clearer failure message than a bare `assert!` by naming the
/// rejected input.
///
/// # Example
///
/// ```rust
/// use turnstile::{assert_valid, is_valid_password};
///
/// assert_valid!(is_valid_password, "Abc123");
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $input:expr) => {
        assert!(
            ($validator)($input),
            "expected {} to accept {:?}",
            stringify!($validator),
            $input
        )
    };
}

/// Assert that a validator rejects an input.
///
/// # Example
///
/// ```rust
/// use turnstile::{assert_invalid, is_valid_password};
///
/// assert_invalid!(is_valid_password, "abc123");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $input:expr) => {
        assert!(
            !($validator)($input),
            "expected {} to reject {:?}",
            stringify!($validator),
            $input
        )
    };
}

/// Property-based testing strategies (feature-gated).
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::code::PosCode;

    /// Strategy producing uniformly sampled valid [`PosCode`]s.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proptest::prelude::*;
    /// use turnstile::{is_valid_pos_code, testing::strategies::pos_code};
    ///
    /// proptest! {
    ///     #[test]
    ///     fn generated_codes_validate(code in pos_code()) {
    ///         prop_assert!(is_valid_pos_code(code.as_str()));
    ///     }
    /// }
    /// ```
    pub fn pos_code() -> impl Strategy<Value = PosCode> {
        let triple = (0u8..10, 0u8..10, 0u8..10).prop_filter(
            "digit triple with an adjacent-zero pair",
            |&(d1, d2, d3)| !(d1 == 0 && d2 == 0) && !(d2 == 0 && d3 == 0),
        );
        (0u8..26, 0u8..26, triple, 0u8..26)
            .prop_map(|(l1, l2, (d1, d2, d3), l3)| PosCode::from_parts(l1, l2, d1, d2, d3, l3))
    }
}
