//! Name and work identifier integration tests
//!
//! ISNI/ORCID name identifiers, the text, audiovisual, and musical work
//! codes, and the resolvable DOI/ARK identifiers.

use im_stdnum::{Ark, Doi, Isan, Isni, Istc, Iswc, NumberError, Orcid, StandardNumber};
use rstest::rstest;

#[rstest]
#[case("0000 0001 2281 955X", "000000012281955X")]
#[case("0000-0002-1825-0097", "0000000218250097")]
fn test_valid_isni(#[case] input: &str, #[case] normalized: &str) {
    let mut isni = Isni::new();
    isni.set(input);
    isni.normalize();
    assert!(isni.is_valid());
    assert_eq!(isni.normalized_value(), Some(normalized));
}

#[test]
fn test_orcid_format_and_uri() {
    let mut orcid = Orcid::new();
    orcid.set("0000-0002-1825-0097");
    orcid.normalize();
    orcid.verify().unwrap();
    assert_eq!(orcid.format(), Some("0000-0002-1825-0097".to_string()));
    assert_eq!(
        orcid.to_uri().unwrap().as_str(),
        "http://orcid.org/0000000218250097"
    );
}

#[test]
fn test_orcid_rejects_transposed_digits() {
    let mut orcid = Orcid::new();
    orcid.set("0000-0002-1852-0097");
    orcid.normalize();
    assert!(matches!(
        orcid.verify(),
        Err(NumberError::BadChecksum { .. })
    ));
}

#[test]
fn test_istc_roundtrips_its_printed_form() {
    let mut istc = Istc::new();
    istc.set("ISTC A02-2009-000004BE-A");
    istc.normalize();
    istc.verify().unwrap();
    assert_eq!(istc.normalized_value(), Some("A022009000004BEA"));
    assert_eq!(istc.format(), Some("ISTC A02-2009-000004BE-A".to_string()));
}

#[rstest]
#[case("ISAN 0000-3BAB-9352-0000-G", "00003BAB93520000G")]
#[case("ISAN B159-D8FA-0124-0000-K", "B159D8FA01240000K")]
#[case("1881-66C7-3420-6541-Y-9F3A-0245-O", "188166C734206541Y9F3A0245O")]
fn test_valid_isan(#[case] input: &str, #[case] normalized: &str) {
    let mut isan = Isan::new();
    isan.set(input);
    isan.normalize();
    isan.verify().unwrap();
    assert_eq!(isan.normalized_value(), Some(normalized));
}

#[test]
fn test_isan_rejects_title_text() {
    let mut isan = Isan::new();
    isan.set("1435-1838 = Lehrergilde-Rundbrief");
    isan.create_checksum(true);
    isan.normalize();
    assert!(matches!(isan.verify(), Err(NumberError::Malformed { .. })));
}

#[test]
fn test_iswc_with_dotted_form() {
    let mut iswc = Iswc::new();
    iswc.set("T-034.524.680-1");
    iswc.normalize();
    assert!(iswc.is_valid());
    assert_eq!(iswc.normalized_value(), Some("T0345246801"));
    assert_eq!(iswc.format(), Some("ISWC T-034524680-1".to_string()));
}

#[rstest]
#[case("10.1016/0032-3861(93)90481-O", "10.1016/0032-3861(93)90481-o")]
#[case("doi:10.1000/182", "10.1000/182")]
fn test_valid_doi(#[case] input: &str, #[case] normalized: &str) {
    let mut doi = Doi::new();
    doi.set(input);
    doi.normalize();
    assert!(doi.is_valid());
    assert_eq!(doi.normalized_value(), Some(normalized));
}

#[test]
fn test_doi_resolver_url() {
    let mut doi = Doi::new();
    doi.set("10.1000/182");
    doi.normalize();
    doi.verify().unwrap();
    assert_eq!(doi.format(), Some("http://doi.org/10.1000/182".to_string()));
}

#[test]
fn test_valid_ark() {
    let mut ark = Ark::new();
    ark.set("ark:/12025/654xz321");
    ark.normalize();
    assert!(ark.is_valid());
    assert_eq!(ark.normalized_value(), Some("ark:/12025/654xz321"));
}

#[test]
fn test_ark_requires_its_scheme() {
    let mut ark = Ark::new();
    ark.set("urn:/12025/654xz321");
    ark.normalize();
    assert!(matches!(ark.verify(), Err(NumberError::Malformed { .. })));
}
