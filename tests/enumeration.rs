//! Integration tests for the lazy code enumeration

use turnstile::{
    generate_valid_codes, is_valid_pos_code, CodeEnumerator, TOTAL_VALID_CODES,
    VALID_DIGIT_TRIPLES,
};

#[test]
fn enumeration_order_is_deterministic() {
    let first_ten: Vec<String> = generate_valid_codes(Some(10))
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        first_ten,
        [
            "AA010A", "AA010B", "AA010C", "AA010D", "AA010E", "AA010F", "AA010G", "AA010H",
            "AA010I", "AA010J"
        ]
    );
}

#[test]
fn two_enumerators_are_independent() {
    let mut a = CodeEnumerator::new();
    let mut b = CodeEnumerator::new();
    let _ = a.nth(100);
    assert_eq!(b.next().unwrap().as_str(), "AA010A");
}

#[test]
fn limit_caps_the_sequence() {
    assert_eq!(generate_valid_codes(Some(0)).count(), 0);
    assert_eq!(generate_valid_codes(Some(1)).count(), 1);
    assert_eq!(generate_valid_codes(Some(1234)).count(), 1234);
}

#[test]
fn limited_prefix_has_no_duplicates() {
    let mut seen: Vec<String> = generate_valid_codes(Some(5000))
        .map(|c| c.to_string())
        .collect();
    let produced = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), produced);
}

#[test]
fn every_generated_code_passes_the_validator() {
    for code in generate_valid_codes(Some(5000)) {
        assert!(is_valid_pos_code(code.as_str()), "generated {code}");
    }
}

#[test]
fn letter_pair_blocks_have_closed_form_size() {
    // Each of the 676 letter pairs owns 981 * 26 codes.
    let block = VALID_DIGIT_TRIPLES * 26;
    assert_eq!(TOTAL_VALID_CODES, block * 26 * 26);

    let codes: Vec<_> = generate_valid_codes(Some(block + 1)).collect();
    assert!(codes[..block].iter().all(|c| c.prefix() == "AA"));
    assert_eq!(codes[block].as_str(), "AB010A");
}

#[test]
fn size_hint_tracks_consumption_exactly() {
    let mut codes = CodeEnumerator::new();
    for consumed in 0..100 {
        let left = TOTAL_VALID_CODES - consumed;
        assert_eq!(codes.size_hint(), (left, Some(left)));
        let _ = codes.next();
    }
}

#[test]
fn unbounded_generation_stays_lazy() {
    // Pulling a handful of items from the unbounded form must not walk
    // the 17-million-code space.
    let sample: Vec<_> = generate_valid_codes(None).take(3).collect();
    assert_eq!(sample.len(), 3);
    assert_eq!(sample[0].as_str(), "AA010A");
}
