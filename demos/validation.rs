//! Validation Example
//!
//! This example walks through the three validators in the crate and shows
//! how the POS code format decomposes into positional predicates.
//!
//! Run with: cargo run --example validation

use turnstile::predicate::*;
use turnstile::{is_valid_institutional_email, is_valid_password, is_valid_pos_code, PosCode};

fn main() {
    println!("=== Turnstile Validation Example ===\n");

    pos_codes();
    parsed_codes();
    credential_patterns();
    custom_predicates();
}

/// The POS code predicate over a few representative inputs
fn pos_codes() {
    println!("--- POS Codes ---\n");

    for candidate in ["AB123C", "AB090C", "XY000Z", "AA100Z", "ab123C", "AB12C3"] {
        println!("  {:8} -> {}", candidate, is_valid_pos_code(candidate));
    }
    println!();
}

/// Parsing names the first failed check instead of answering yes/no
fn parsed_codes() {
    println!("--- Parse, Don't Validate ---\n");

    match PosCode::parse("AB123C") {
        Ok(code) => println!(
            "  parsed {}: prefix={} digits={} suffix={}",
            code,
            code.prefix(),
            code.digits(),
            code.suffix()
        ),
        Err(err) => println!("  rejected: {err}"),
    }

    for bad in ["AB123", "ab123C", "AB100C"] {
        if let Err(err) = PosCode::parse(bad) {
            println!("  {:8} rejected: {}", bad, err);
        }
    }
    println!();
}

/// The two regex-backed credential validators
fn credential_patterns() {
    println!("--- Credential Patterns ---\n");

    for password in ["Abc123", "abc123", "Abc"] {
        println!("  password {:8} -> {}", password, is_valid_password(password));
    }
    for email in ["juan123@uptc.edu.co", "Juan@uptc.edu.co", "juan@gmail.com"] {
        println!(
            "  email {:22} -> {}",
            email,
            is_valid_institutional_email(email)
        );
    }
    println!();
}

/// Building a custom fixed format from the same predicate layer
fn custom_predicates() {
    println!("--- Custom Predicates ---\n");

    fn uppercase(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    // A 4-character ticket stub: letter, two digits, letter
    let ticket = len_eq(4)
        .and(all_of([char_at(0, uppercase), char_at(3, uppercase)]))
        .and(chars_in_range(1..3, |c: char| c.is_ascii_digit()));

    for candidate in ["A12B", "a12B", "A1BB", "A12B5"] {
        println!("  ticket {:6} -> {}", candidate, ticket.check(candidate));
    }
}
