//! Checksum scheme properties
//!
//! Every scheme must accept what it encodes, for any payload within its
//! alphabet and length range.

use im_stdnum::checksum::{
    AlnumMod37, Checksum, EanMod10, Mod112, Mod1110, Mod11Complement, Mod11Residue, Mod163,
    Mod3736, Mod9710, UpcMod10,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("400763000011")]
#[case("978355175213")]
#[case("000000000000")]
fn test_ean_mod10_accepts_own_encoding(#[case] body: &str) {
    assert!(EanMod10.verify(&EanMod10.encode(body)));
}

#[rstest]
#[case("03600029145")]
#[case("00000000000")]
fn test_upc_mod10_accepts_own_encoding(#[case] body: &str) {
    assert!(UpcMod10.verify(&UpcMod10.encode(body)));
}

#[rstest]
#[case("398033505")]
#[case("361606581")]
#[case("1869712")]
fn test_mod11_complement_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod11Complement.verify(&Mod11Complement.encode(body)));
}

#[rstest]
#[case("127976")]
#[case("20692")]
fn test_mod11_residue_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod11Residue.verify(&Mod11Residue.encode(body)));
}

#[rstest]
#[case("000000012281955")]
#[case("000000021825009")]
fn test_mod112_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod112.verify(&Mod112.encode(body)));
}

#[rstest]
#[case("136695976")]
#[case("0794623")]
fn test_hybrid_mod1110_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod1110.verify(&Mod1110.encode(body)));
}

#[rstest]
#[case("794623")]
#[case("538237")]
fn test_mod9710_accepts_own_encoding(#[case] body: &str) {
    let encoded = Mod9710.encode(body);
    assert!(Mod9710.verify(&encoded));
    assert_eq!(Mod9710.number(&encoded), body);
}

#[rstest]
#[case("A022009000004BE")]
#[case("0A9200212B4A105")]
fn test_mod163_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod163.verify(&Mod163.encode(body)));
}

#[rstest]
#[case("B159D8FA01240000")]
#[case("188166C734206541")]
#[case("188166C7342065419F3A0245")]
fn test_mod3736_accepts_own_encoding(#[case] body: &str) {
    assert!(Mod3736.verify(&Mod3736.encode(body)));
}

#[test]
fn test_alnum_mod37_accepts_own_encoding() {
    assert!(AlnumMod37.verify(&AlnumMod37.encode(
        "0095-4403(199502/03)21:3<12:WATIIB>2.0.TX;2-"
    )));
}

proptest! {
    #[test]
    fn test_decimal_schemes_accept_any_digit_body(body in "[0-9]{6,12}") {
        prop_assert!(EanMod10.verify(&EanMod10.encode(&body)));
        prop_assert!(UpcMod10.verify(&UpcMod10.encode(&body)));
        prop_assert!(Mod11Complement.verify(&Mod11Complement.encode(&body)));
        prop_assert!(Mod11Residue.verify(&Mod11Residue.encode(&body)));
        prop_assert!(Mod112.verify(&Mod112.encode(&body)));
        prop_assert!(Mod1110.verify(&Mod1110.encode(&body)));
        prop_assert!(Mod9710.verify(&Mod9710.encode(&body)));
    }

    #[test]
    fn test_alnum_schemes_accept_any_alnum_body(body in "[0-9A-Z]{6,24}") {
        prop_assert!(Mod163.verify(&Mod163.encode(&body)));
        prop_assert!(Mod3736.verify(&Mod3736.encode(&body)));
        prop_assert!(AlnumMod37.verify(&AlnumMod37.encode(&body)));
    }
}
