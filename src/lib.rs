//! Validation, normalization, and formatting of standard numbers
//!
//! This crate provides handlers for bibliographic and commercial
//! identifier schemes:
//! - ISBN with 10↔13 conversion and range-driven hyphenation
//! - ISMN, ISSN, ISWC, ISTC, ISAN, SICI, ZDB, PPN
//! - ISNI and ORCID name identifiers
//! - EAN, GTIN, and UPC trade item numbers
//! - DOI and ARK resolvable identifiers
//!
//! Every handler follows the same lifecycle: `set` a raw string,
//! `normalize` to extract and clean the candidate, `verify` (optionally
//! repairing the check digit), then read `normalized_value` or `format`.
//!
//! ```
//! use im_stdnum::{Isbn, StandardNumber};
//!
//! let mut isbn = Isbn::new();
//! isbn.set("978-3-551-75213-0");
//! isbn.normalize();
//! assert!(isbn.is_valid());
//! assert_eq!(isbn.normalized_value(), Some("3551752133"));
//! ```

pub mod ark;
pub mod checksum;
pub mod doi;
pub mod ean;
pub mod gtin;
pub mod isan;
pub mod isbn;
pub mod ismn;
pub mod isni;
pub mod issn;
pub mod istc;
pub mod iswc;
pub mod number;
pub mod orcid;
pub mod ppn;
pub mod ranges;
pub mod sici;
pub mod upc;
pub mod zdb;

pub use ark::Ark;
pub use doi::Doi;
pub use ean::Ean;
pub use gtin::Gtin;
pub use isan::Isan;
pub use isbn::Isbn;
pub use ismn::Ismn;
pub use isni::Isni;
pub use issn::Issn;
pub use istc::Istc;
pub use iswc::Iswc;
pub use number::{NumberError, NumberKind, StandardNumber};
pub use orcid::Orcid;
pub use ppn::Ppn;
pub use ranges::{RangeTable, DEFAULT_ISBN_RANGES};
pub use sici::Sici;
pub use upc::Upc;
pub use zdb::Zdb;

/// Try every scheme against an input and return the handlers that
/// accept it, each already verified.
pub fn detect(value: &str) -> Vec<Box<dyn StandardNumber>> {
    let mut hits = Vec::new();
    for kind in NumberKind::all() {
        let mut number = kind.make();
        number.set(value);
        number.normalize();
        if number.is_valid() {
            hits.push(number);
        }
    }
    hits
}
