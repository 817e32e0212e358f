//! POS code validation and enumeration
//!
//! A POS code is a 6-character ASCII string shaped `LL DDD L`:
//!
//! - positions 0-1: uppercase letters `A-Z`
//! - positions 2-4: decimal digits, with no `"00"` substring anywhere in
//!   the three-digit field (neither at positions (2,3) nor (3,4))
//! - position 5: uppercase letter `A-Z`
//!
//! The module provides three entry points:
//!
//! - [`is_valid_pos_code`], a total boolean predicate over arbitrary input
//! - [`PosCode::parse`], the "parse, don't validate" boundary that names
//!   the first failed structural check
//! - [`generate_valid_codes`] / [`CodeEnumerator`], a demand-driven
//!   enumeration of the full code space in lexicographic order
//!
//! # Example
//!
//! ```rust
//! use turnstile::code::{generate_valid_codes, is_valid_pos_code};
//!
//! assert!(is_valid_pos_code("AB123C"));
//! assert!(!is_valid_pos_code("AA100Z")); // "00" at digit positions (2,3)
//!
//! let first = generate_valid_codes(Some(1)).next().unwrap();
//! assert_eq!(first.as_str(), "AA010A");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::predicate::{all_of, char_at, chars_in_range, lacks_in, len_eq, Predicate, PredicateExt};

/// Number of admissible digit triples: 1000 minus the 19 triples that
/// contain an adjacent-zero pair (`00x`, `x00`, counting `000` once).
pub const VALID_DIGIT_TRIPLES: usize = 981;

/// Total number of valid POS codes: 26 letter pairs squared times the
/// admissible digit triples times 26 trailing letters.
pub const TOTAL_VALID_CODES: usize = 26 * 26 * VALID_DIGIT_TRIPLES * 26;

fn uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check whether `code` is a structurally valid POS code.
///
/// The check is total: any input — wrong length, lowercase letters,
/// non-ASCII characters — yields `false`, never an error. Checks
/// short-circuit in order: length, the three letter positions, the digit
/// block, the adjacent-zero exclusion.
///
/// # Example
///
/// ```rust
/// use turnstile::code::is_valid_pos_code;
///
/// assert!(is_valid_pos_code("AB123C"));
/// assert!(is_valid_pos_code("AB090C"));
/// assert!(!is_valid_pos_code("ab123C")); // lowercase prefix
/// assert!(!is_valid_pos_code("XY000Z")); // adjacent zeros
/// assert!(!is_valid_pos_code("AB12C3")); // digit and letter swapped
/// assert!(!is_valid_pos_code("AB123"));  // wrong length
/// ```
pub fn is_valid_pos_code(code: &str) -> bool {
    len_eq(6)
        .and(all_of([
            char_at(0, uppercase),
            char_at(1, uppercase),
            char_at(5, uppercase),
        ]))
        .and(chars_in_range(2..5, digit))
        .and(lacks_in(2..5, "00"))
        .check(code)
}

/// Error describing the first structural check a candidate code failed.
///
/// Returned by [`PosCode::parse`]. The plain boolean question is answered
/// by [`is_valid_pos_code`]; this type exists for boundaries that want to
/// tell the user *why* a code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCodeError {
    /// The input is not exactly 6 bytes long.
    WrongLength {
        /// Actual byte length of the input.
        len: usize,
    },
    /// A letter position does not hold an uppercase ASCII letter.
    ExpectedUppercase {
        /// Position of the offending character.
        index: usize,
    },
    /// A digit position does not hold an ASCII decimal digit.
    ExpectedDigit {
        /// Position of the offending character.
        index: usize,
    },
    /// The three-digit field contains an adjacent `"00"` pair.
    AdjacentZeroPair,
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCodeError::WrongLength { len } => {
                write!(f, "expected exactly 6 characters, got {len}")
            }
            ParseCodeError::ExpectedUppercase { index } => {
                write!(f, "expected an uppercase letter at position {index}")
            }
            ParseCodeError::ExpectedDigit { index } => {
                write!(f, "expected a decimal digit at position {index}")
            }
            ParseCodeError::AdjacentZeroPair => {
                write!(f, "digit field contains an adjacent \"00\" pair")
            }
        }
    }
}

impl StdError for ParseCodeError {}

/// A 6-character string guaranteed to be a valid POS code.
///
/// `PosCode` follows the "parse, don't validate" pattern: validity is
/// established once at construction, after which the value can be passed
/// around and displayed without further checks. The representation is a
/// fixed 6-byte ASCII array, so the type is `Copy`.
///
/// # Example
///
/// ```rust
/// use turnstile::code::PosCode;
///
/// let code = PosCode::parse("AB123C").unwrap();
/// assert_eq!(code.prefix(), "AB");
/// assert_eq!(code.digits(), "123");
/// assert_eq!(code.suffix(), 'C');
/// assert_eq!(code.to_string(), "AB123C");
///
/// assert!(PosCode::parse("AB100C").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PosCode([u8; 6]);

impl PosCode {
    /// Parse a candidate string into a `PosCode`.
    ///
    /// Checks run in the same order as [`is_valid_pos_code`] and stop at
    /// the first failure, which is reported in the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::code::{ParseCodeError, PosCode};
    ///
    /// assert!(PosCode::parse("AB123C").is_ok());
    /// assert_eq!(
    ///     PosCode::parse("AB123"),
    ///     Err(ParseCodeError::WrongLength { len: 5 })
    /// );
    /// assert_eq!(
    ///     PosCode::parse("ab123C"),
    ///     Err(ParseCodeError::ExpectedUppercase { index: 0 })
    /// );
    /// assert_eq!(
    ///     PosCode::parse("XY000Z"),
    ///     Err(ParseCodeError::AdjacentZeroPair)
    /// );
    /// ```
    pub fn parse(code: &str) -> Result<Self, ParseCodeError> {
        let bytes = code.as_bytes();
        if bytes.len() != 6 {
            return Err(ParseCodeError::WrongLength { len: bytes.len() });
        }
        for index in [0, 1, 5] {
            if !bytes[index].is_ascii_uppercase() {
                return Err(ParseCodeError::ExpectedUppercase { index });
            }
        }
        for index in 2..5 {
            if !bytes[index].is_ascii_digit() {
                return Err(ParseCodeError::ExpectedDigit { index });
            }
        }
        if bytes[2..5].windows(2).any(|pair| pair == b"00") {
            return Err(ParseCodeError::AdjacentZeroPair);
        }
        let mut raw = [0u8; 6];
        raw.copy_from_slice(bytes);
        Ok(Self(raw))
    }

    /// Assemble a code from enumeration cursors.
    ///
    /// Callers must only pass letter indices in `0..26`, digit values in
    /// `0..10`, and a digit triple without an adjacent-zero pair.
    pub(crate) fn from_parts(l1: u8, l2: u8, d1: u8, d2: u8, d3: u8, l3: u8) -> Self {
        debug_assert!(l1 < 26 && l2 < 26 && l3 < 26);
        debug_assert!(d1 < 10 && d2 < 10 && d3 < 10);
        debug_assert!(!(d1 == 0 && d2 == 0) && !(d2 == 0 && d3 == 0));
        Self([
            b'A' + l1,
            b'A' + l2,
            b'0' + d1,
            b'0' + d2,
            b'0' + d3,
            b'A' + l3,
        ])
    }

    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Invariant: every byte is an ASCII letter or digit.
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    /// The two-letter prefix (positions 0-1).
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..2]
    }

    /// The three-digit field (positions 2-4).
    #[inline]
    pub fn digits(&self) -> &str {
        &self.as_str()[2..5]
    }

    /// The trailing letter (position 5).
    #[inline]
    pub fn suffix(&self) -> char {
        self.0[5] as char
    }
}

impl fmt::Debug for PosCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PosCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for PosCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for PosCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PosCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Serde support (feature-gated): a `PosCode` serializes as its plain
    //! string form, and deserialization re-validates the input.

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::PosCode;

    impl Serialize for PosCode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for PosCode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            PosCode::parse(&raw).map_err(serde::de::Error::custom)
        }
    }
}

/// Demand-driven enumeration of every valid POS code.
///
/// Codes are produced in a fixed lexicographic order: the letter pair
/// advances slowest, then the three digits (skipping any state that would
/// put `"00"` in the digit field), then the trailing letter. Each valid
/// code appears exactly once; the full space holds
/// [`TOTAL_VALID_CODES`] entries.
///
/// The enumerator holds only its loop cursors, so constructing one is
/// free and consuming a prefix never computes codes beyond it.
///
/// # Example
///
/// ```rust
/// use turnstile::code::CodeEnumerator;
///
/// let mut codes = CodeEnumerator::new();
/// assert_eq!(codes.next().unwrap().as_str(), "AA010A");
/// assert_eq!(codes.next().unwrap().as_str(), "AA010B");
/// ```
#[derive(Clone, Debug)]
pub struct CodeEnumerator {
    l1: u8,
    l2: u8,
    d1: u8,
    d2: u8,
    d3: u8,
    l3: u8,
    remaining: usize,
}

impl CodeEnumerator {
    /// Create an enumerator positioned at the first valid code, `AA010A`.
    ///
    /// The digit cursor starts at `010` rather than `000`: a zero in both
    /// leading digit slots is excluded, so `010` is the first admissible
    /// triple.
    pub fn new() -> Self {
        Self {
            l1: 0,
            l2: 0,
            d1: 0,
            d2: 1,
            d3: 0,
            l3: 0,
            remaining: TOTAL_VALID_CODES,
        }
    }

    /// Advance the cursors to the next admissible state.
    ///
    /// Works like an odometer from the innermost position outward, with
    /// the two skip rules applied whenever a digit cursor changes: the
    /// pairs (d1,d2) and (d2,d3) may never both be zero.
    fn advance(&mut self) {
        self.l3 += 1;
        if self.l3 < 26 {
            return;
        }
        self.l3 = 0;
        loop {
            self.d3 += 1;
            if self.d3 == 10 {
                self.d3 = 0;
                loop {
                    self.d2 += 1;
                    if self.d2 == 10 {
                        self.d2 = 0;
                        self.d1 += 1;
                        if self.d1 == 10 {
                            self.d1 = 0;
                            self.l2 += 1;
                            if self.l2 == 26 {
                                self.l2 = 0;
                                self.l1 += 1;
                                // remaining reaching zero terminates the
                                // iterator before these cursors are read
                                if self.l1 == 26 {
                                    return;
                                }
                            }
                        }
                    }
                    if !(self.d1 == 0 && self.d2 == 0) {
                        break;
                    }
                }
            }
            if !(self.d2 == 0 && self.d3 == 0) {
                break;
            }
        }
    }
}

impl Default for CodeEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CodeEnumerator {
    type Item = PosCode;

    fn next(&mut self) -> Option<PosCode> {
        if self.remaining == 0 {
            return None;
        }
        let code = PosCode::from_parts(self.l1, self.l2, self.d1, self.d2, self.d3, self.l3);
        self.remaining -= 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(code = %code, remaining = self.remaining, "enumerated code");
        self.advance();
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for CodeEnumerator {}

/// Enumerate valid POS codes, optionally stopping after `limit` items.
///
/// With `limit = None` the iterator runs the full space of
/// [`TOTAL_VALID_CODES`] codes; with `Some(n)` it stops after `n`.
/// Enumeration is lazy either way: codes the caller never consumes are
/// never built, and `Some(0)` yields an empty iterator.
///
/// # Example
///
/// ```rust
/// use turnstile::code::{generate_valid_codes, is_valid_pos_code};
///
/// let sample: Vec<_> = generate_valid_codes(Some(3)).collect();
/// assert_eq!(sample.len(), 3);
/// assert!(sample.iter().all(|c| is_valid_pos_code(c.as_str())));
///
/// assert_eq!(generate_valid_codes(Some(0)).count(), 0);
/// ```
pub fn generate_valid_codes(limit: Option<usize>) -> impl Iterator<Item = PosCode> {
    CodeEnumerator::new().take(limit.unwrap_or(TOTAL_VALID_CODES))
}
