//! Positional string predicates
//!
//! This module provides the structural predicates fixed-format codes are
//! assembled from. All positions are byte offsets: the formats in this
//! crate are ASCII-only, so any multi-byte character fails the character
//! class check at its position and the input is simply invalid.

use std::ops::Range;

use super::combinators::Predicate;

/// Predicate that checks string byte length is exactly `len`.
#[derive(Clone, Copy, Debug)]
pub struct LenEq {
    len: usize,
}

impl Predicate<str> for LenEq {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.len() == self.len
    }
}

/// Create a predicate that checks if string length is exactly `len`.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// assert!(len_eq(6).check("AB123C"));
/// assert!(!len_eq(6).check("AB123"));
/// ```
pub fn len_eq(len: usize) -> LenEq {
    LenEq { len }
}

/// Predicate that checks the character at a fixed position against a class.
///
/// Out-of-bounds positions and non-ASCII bytes fail the check.
#[derive(Clone, Copy, Debug)]
pub struct CharAt<F> {
    index: usize,
    class: F,
}

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for CharAt<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value
            .as_bytes()
            .get(self.index)
            .is_some_and(|&b| b.is_ascii() && (self.class)(b as char))
    }
}

/// Create a predicate that checks the character at `index` against `class`.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// let leading_upper = char_at(0, |c: char| c.is_ascii_uppercase());
/// assert!(leading_upper.check("Abc"));
/// assert!(!leading_upper.check("abc"));
/// assert!(!leading_upper.check("")); // out of bounds
/// ```
pub fn char_at<F: Fn(char) -> bool + Send + Sync>(index: usize, class: F) -> CharAt<F> {
    CharAt { index, class }
}

/// Predicate that checks every character in a byte range against a class.
///
/// The check fails when the range extends past the end of the string, and
/// for any non-ASCII byte inside the range.
#[derive(Clone, Debug)]
pub struct CharsInRange<F> {
    range: Range<usize>,
    class: F,
}

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for CharsInRange<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        match value.as_bytes().get(self.range.clone()) {
            Some(window) => window.iter().all(|&b| b.is_ascii() && (self.class)(b as char)),
            None => false,
        }
    }
}

/// Create a predicate that checks all characters in `range` against `class`.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// let digit_block = chars_in_range(2..5, |c: char| c.is_ascii_digit());
/// assert!(digit_block.check("AB123C"));
/// assert!(!digit_block.check("AB12xC"));
/// assert!(!digit_block.check("AB1")); // range out of bounds
/// ```
pub fn chars_in_range<F: Fn(char) -> bool + Send + Sync>(
    range: Range<usize>,
    class: F,
) -> CharsInRange<F> {
    CharsInRange { range, class }
}

/// Predicate that checks a byte range does not contain a forbidden substring.
///
/// The check fails when the range extends past the end of the string, so it
/// only passes for inputs long enough to carry the inspected field.
#[derive(Clone, Debug)]
pub struct LacksIn<S> {
    range: Range<usize>,
    needle: S,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for LacksIn<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let needle = self.needle.as_ref().as_bytes();
        match value.as_bytes().get(self.range.clone()) {
            Some(window) => !window.windows(needle.len()).any(|w| w == needle),
            None => false,
        }
    }
}

/// Create a predicate that checks the bytes in `range` never contain `needle`.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// let no_adjacent_zeros = lacks_in(2..5, "00");
/// assert!(no_adjacent_zeros.check("AB123C"));
/// assert!(!no_adjacent_zeros.check("AB100C"));
/// assert!(!no_adjacent_zeros.check("AB007C"));
/// ```
pub fn lacks_in<S: AsRef<str> + Send + Sync>(range: Range<usize>, needle: S) -> LacksIn<S> {
    LacksIn { range, needle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_eq() {
        assert!(len_eq(5).check("hello"));
        assert!(!len_eq(5).check("hi"));
        assert!(!len_eq(5).check("toolong"));
    }

    #[test]
    fn test_len_eq_accepts_owned_strings() {
        // &String coerces to &str at the call site
        assert!(len_eq(5).check(&String::from("hello")));
        assert!(!len_eq(5).check(&String::new()));
    }

    #[test]
    fn test_char_at() {
        let p = char_at(1, |c: char| c.is_ascii_digit());
        assert!(p.check("A1"));
        assert!(!p.check("AB"));
        assert!(!p.check("A")); // out of bounds
    }

    #[test]
    fn test_char_at_rejects_non_ascii() {
        let anything = char_at(0, |_| true);
        assert!(anything.check("a"));
        assert!(!anything.check("é"));
    }

    #[test]
    fn test_chars_in_range() {
        let p = chars_in_range(2..5, |c: char| c.is_ascii_digit());
        assert!(p.check("AB123C"));
        assert!(p.check("AB123")); // range fits exactly
        assert!(!p.check("AB12xC"));
        assert!(!p.check("AB12"));
    }

    #[test]
    fn test_chars_in_range_empty_range() {
        let p = chars_in_range(2..2, |_| false);
        assert!(p.check("ABC")); // nothing to inspect
        assert!(!p.check("A")); // range start past the end
    }

    #[test]
    fn test_lacks_in() {
        let p = lacks_in(2..5, "00");
        assert!(p.check("AB123C"));
        assert!(p.check("AB090C"));
        assert!(!p.check("AB100C"));
        assert!(!p.check("AB007C"));
        assert!(!p.check("AB000C"));
        assert!(!p.check("AB1")); // too short to carry the field
    }

    #[test]
    fn test_lacks_in_ignores_needle_outside_range() {
        let p = lacks_in(2..5, "00");
        assert!(p.check("001230")); // zeros sit outside the inspected field
    }
}
