//! Enumeration Example
//!
//! Shows the demand-driven code enumerator: bounded prefixes, lazy
//! consumption of the unbounded form, and the closed-form space size.
//!
//! Run with: cargo run --example enumeration

use turnstile::{generate_valid_codes, CodeEnumerator, TOTAL_VALID_CODES, VALID_DIGIT_TRIPLES};

fn main() {
    println!("=== Turnstile Enumeration Example ===\n");

    println!("First 15 codes:");
    for (index, code) in generate_valid_codes(Some(15)).enumerate() {
        println!("{:>4}: {}", index + 1, code);
    }

    println!("\nThe space is large but finite:");
    println!("  digit triples without '00': {VALID_DIGIT_TRIPLES}");
    println!("  total valid codes:          {TOTAL_VALID_CODES}");

    // Laziness: asking the unbounded enumeration for three codes builds
    // exactly three codes.
    let sample: Vec<_> = generate_valid_codes(None).take(3).collect();
    println!("\nThree codes from the unbounded form: {sample:?}");

    let mut enumerator = CodeEnumerator::new();
    let _ = enumerator.nth(999);
    let (remaining, _) = enumerator.size_hint();
    println!("After consuming 1000 codes, {remaining} remain.");
}
