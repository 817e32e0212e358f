//! Traced Enumeration Example
//!
//! Demonstrates the optional `tracing` integration: with the feature
//! enabled, the enumerator emits a trace event per produced code.
//!
//! Run with: cargo run --example traced_enumeration --features tracing

use turnstile::generate_valid_codes;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Generating 5 codes with tracing enabled:");
    for code in generate_valid_codes(Some(5)) {
        println!("  {code}");
    }
}
