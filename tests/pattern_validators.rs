//! Integration tests for the credential-format validators

use turnstile::{
    assert_invalid, assert_valid, is_valid_institutional_email, is_valid_password,
    INSTITUTIONAL_DOMAIN,
};

#[test]
fn password_follows_upper_lower_digits_shape() {
    assert_valid!(is_valid_password, "Abc123");
    assert_valid!(is_valid_password, "A1");
    assert_valid!(is_valid_password, "Zelda99");

    assert_invalid!(is_valid_password, "abc123"); // missing leading uppercase
    assert_invalid!(is_valid_password, "Abc"); // missing trailing digits
    assert_invalid!(is_valid_password, "");
}

#[test]
fn password_match_covers_the_whole_string() {
    assert_invalid!(is_valid_password, " Abc123");
    assert_invalid!(is_valid_password, "Abc123 ");
    assert_invalid!(is_valid_password, "Abc123Abc123");
}

#[test]
fn email_requires_lowercase_local_part_and_exact_domain() {
    assert_valid!(is_valid_institutional_email, "juan123@uptc.edu.co");
    assert_valid!(is_valid_institutional_email, "x@uptc.edu.co");

    assert_invalid!(is_valid_institutional_email, "Juan@uptc.edu.co"); // leading uppercase
    assert_invalid!(is_valid_institutional_email, "juan@gmail.com"); // wrong domain
    assert_invalid!(is_valid_institutional_email, "123@uptc.edu.co"); // digit-led local part
    assert_invalid!(is_valid_institutional_email, "juan@uptc.edu.co ");
}

#[test]
fn email_domain_dot_is_literal() {
    assert_invalid!(is_valid_institutional_email, "juan@uptcxedu.co");
    assert_invalid!(is_valid_institutional_email, "juan@uptc_edu_co");
}

#[test]
fn validators_are_total_over_arbitrary_input() {
    let long = "x".repeat(10_000);
    for weird in ["", " ", "\u{0}", "ñandú", "🦀", "a\nb", long.as_str()] {
        let _ = is_valid_password(weird);
        let _ = is_valid_institutional_email(weird);
    }
}

#[test]
fn exposed_domain_constant_builds_valid_addresses() {
    let address = format!("maria9{INSTITUTIONAL_DOMAIN}");
    assert_valid!(is_valid_institutional_email, &address);
}
