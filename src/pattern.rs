//! Regular-language validators for credential formats
//!
//! Two independent membership tests, each anchored at both ends of the
//! input so partial matches never slip through:
//!
//! - **password**: one uppercase letter, any run of lowercase letters,
//!   then at least one digit (`^[A-Z][a-z]*[0-9]+$`)
//! - **institutional email**: a lowercase-led alphanumeric local part
//!   followed by the literal institutional domain
//!   (`^[a-z][a-z0-9]*@uptc\.edu\.co$`)
//!
//! Both functions are pure and total: any input, including empty or
//! non-ASCII strings, yields a plain boolean.

use once_cell::sync::Lazy;
use regex::Regex;

/// The only email domain accepted by [`is_valid_institutional_email`].
pub const INSTITUTIONAL_DOMAIN: &str = "@uptc.edu.co";

static PASSWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]*[0-9]+$").expect("hard-coded pattern"));

static INSTITUTIONAL_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*@uptc\.edu\.co$").expect("hard-coded pattern"));

/// Check whether `password` follows the required shape: one uppercase
/// letter, zero or more lowercase letters, one or more digits.
///
/// The whole input must match; a valid password embedded in a longer
/// string is rejected.
///
/// # Example
///
/// ```rust
/// use turnstile::pattern::is_valid_password;
///
/// assert!(is_valid_password("Abc123"));
/// assert!(is_valid_password("A1"));
/// assert!(!is_valid_password("abc123")); // missing leading uppercase
/// assert!(!is_valid_password("Abc"));    // missing trailing digits
/// ```
#[inline]
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

/// Check whether `email` is a well-formed institutional address: a local
/// part of lowercase letters and digits, led by a letter, directly
/// followed by [`INSTITUTIONAL_DOMAIN`].
///
/// # Example
///
/// ```rust
/// use turnstile::pattern::is_valid_institutional_email;
///
/// assert!(is_valid_institutional_email("juan123@uptc.edu.co"));
/// assert!(!is_valid_institutional_email("Juan@uptc.edu.co")); // uppercase local part
/// assert!(!is_valid_institutional_email("juan@gmail.com"));   // wrong domain
/// ```
#[inline]
pub fn is_valid_institutional_email(email: &str) -> bool {
    INSTITUTIONAL_EMAIL_RE.is_match(email)
}
