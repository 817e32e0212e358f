//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// let six_chars = len_eq(6);
/// assert!(six_chars.check("AB123C"));
/// assert!(!six_chars.check("AB123"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// let p = len_eq(3).or(len_eq(6)).not();
/// assert!(p.check("ABCD"));    // neither 3 nor 6 chars
/// assert!(!p.check("AB123C")); // 6 chars, so not() inverts to false
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The right-hand predicate is not evaluated when the left one fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::predicate::*;
    ///
    /// let p = len_eq(3).and(chars_in_range(0..3, |c: char| c.is_ascii_digit()));
    /// assert!(p.check("123"));
    /// assert!(!p.check("12a"));
    /// assert!(!p.check("1234"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::predicate::*;
    ///
    /// let p = len_eq(1).or(len_eq(2));
    /// assert!(p.check("A"));
    /// assert!(p.check("AB"));
    /// assert!(!p.check("ABC"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::predicate::*;
    ///
    /// let p = len_eq(6).not();
    /// assert!(p.check("AB"));
    /// assert!(!p.check("AB123C"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array to avoid heap allocation. Note: `all_of`
/// requires homogeneous predicate types. For mixed predicates, use `.and()`
/// chaining instead.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// fn uppercase(c: char) -> bool {
///     c.is_ascii_uppercase()
/// }
///
/// let letter_slots = all_of([char_at(0, uppercase), char_at(2, uppercase)]);
/// assert!(letter_slots.check("AbC"));
/// assert!(!letter_slots.check("abC"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// This uses const generics for zero-allocation predicate arrays.
///
/// # Example
///
/// ```rust
/// use turnstile::predicate::*;
///
/// fn digit(c: char) -> bool {
///     c.is_ascii_digit()
/// }
///
/// let ends_in_digits = all_of([char_at(1, digit), char_at(2, digit)]);
/// assert!(ends_in_digits.check("A12"));
/// assert!(!ends_in_digits.check("A1c"));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}
