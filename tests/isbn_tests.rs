//! Book number integration tests
//!
//! The dual-format scenarios: dirty catalog strings, repair mode, form
//! preference, hyphenation, and the short/long round trip.

use im_stdnum::{Isbn, NumberError, StandardNumber};
use proptest::prelude::*;
use rstest::rstest;

fn verified(input: &str) -> Isbn {
    let mut isbn = Isbn::new();
    isbn.set(input);
    isbn.normalize();
    isbn.verify().unwrap();
    isbn
}

#[test]
fn test_dirty_catalog_entry() {
    let isbn = verified("3-9803350-5-4 kart. : DM 24.00");
    assert_eq!(isbn.normalized_value(), Some("3980335054"));
    assert_eq!(isbn.ean_value(), Some("9783980335058"));
}

#[test]
fn test_repair_of_wrong_check_character() {
    let mut isbn = Isbn::new();
    isbn.set("3616065810");
    isbn.create_checksum(true);
    isbn.normalize();
    isbn.verify().unwrap();
    assert_eq!(isbn.normalized_value(), Some("361606581X"));
}

#[test]
fn test_long_form_preferred_with_repair() {
    let mut isbn = Isbn::new();
    isbn.ean(true);
    isbn.set("978-3-551-75213-1");
    isbn.create_checksum(true);
    isbn.normalize();
    isbn.verify().unwrap();
    assert_eq!(isbn.normalized_value(), Some("9783551752130"));
    assert_eq!(isbn.format(), Some("978-3-551-75213-0".to_string()));
}

#[test]
fn test_short_and_long_variants() {
    let mut isbn = Isbn::new();
    isbn.set("1-9339-8817-7.");
    isbn.normalize();
    isbn.verify().unwrap();
    assert_eq!(isbn.format(), Some("1-933988-17-7".to_string()));
    assert_eq!(
        isbn.typed_variants(),
        vec!["ISBN 1-933988-17-7".to_string(), "ISBN 1933988177".to_string()]
    );
    isbn.ean(true);
    assert_eq!(isbn.format(), Some("978-1-933988-17-7".to_string()));
}

#[test]
fn test_format_is_stable_across_calls() {
    let mut isbn = verified("3-9803350-5-4");
    let first = isbn.format();
    let second = isbn.format();
    assert_eq!(first, second);
    assert_eq!(first, Some("3-9803350-5-4".to_string()));
}

#[test]
fn test_repair_is_deterministic() {
    let repair = |input: &str| {
        let mut isbn = Isbn::new();
        isbn.set(input);
        isbn.create_checksum(true);
        isbn.normalize();
        isbn.verify().unwrap();
        isbn.normalized_value().map(str::to_string)
    };
    assert_eq!(repair("3616065810"), repair("3616065810"));
}

#[test]
fn test_979_reports_short_form_absent() {
    let mut isbn = Isbn::new();
    isbn.ean(true);
    isbn.set("9791029801297");
    isbn.create_checksum(true);
    isbn.normalize();
    isbn.verify().unwrap();
    assert_eq!(isbn.short_value(), None);
    assert!(isbn.is_valid());
}

#[rstest]
#[case("linux is an operating system")]
#[case("978-3-5517-521")]
fn test_unusable_input_is_malformed(#[case] input: &str) {
    let mut isbn = Isbn::new();
    isbn.set(input);
    isbn.normalize();
    assert!(matches!(isbn.verify(), Err(NumberError::Malformed { .. })));
}

proptest! {
    // short -> long -> short round trip over arbitrary 9-digit bodies
    #[test]
    fn test_round_trip_short_long_short(body in "[0-9]{9}") {
        let mut short = Isbn::new();
        short.set(&body);
        short.create_checksum(true);
        short.normalize();
        short.verify().unwrap();
        let short_value = short.normalized_value().unwrap().to_string();
        let long_value = short.ean_value().unwrap().to_string();

        let mut long = Isbn::new();
        long.set(&long_value);
        long.normalize();
        long.verify().unwrap();
        prop_assert_eq!(long.short_value(), Some(short_value.as_str()));
    }
}
