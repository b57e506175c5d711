//! The standard number contract and the closed type registry

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a standard number fails verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("missing value")]
    Missing,
    #[error("malformed input: {message}")]
    Malformed { message: String },
    #[error("bad checksum: {message}")]
    BadChecksum { message: String },
}

impl NumberError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        NumberError::Malformed {
            message: message.into(),
        }
    }

    pub(crate) fn bad_checksum(message: impl Into<String>) -> Self {
        NumberError::BadChecksum {
            message: message.into(),
        }
    }
}

/// A standard number is a number that
///
/// - is backed by an international standard or a de-facto community use
/// - can accept alphanumeric values (digits, letters, separator characters)
/// - can be normalized
/// - can be verified, raising an error when verification fails
/// - can carry a computed checksum
/// - can be formatted to a printable representation
///
/// Instances are short-lived, single-owner value holders: set a raw value,
/// normalize, verify, then read the normalized or formatted string. They
/// are not synchronized; do not share one instance across threads.
pub trait StandardNumber {
    /// The scheme this handler implements.
    fn kind(&self) -> NumberKind;

    /// Store a raw input value, clearing all derived state.
    fn set(&mut self, value: &str);

    /// Toggle checksum-repair mode: when on, a missing or wrong trailing
    /// check character is recomputed and substituted instead of rejected.
    fn create_checksum(&mut self, repair: bool);

    /// Extract and clean the candidate substring from the raw input.
    /// Best-effort and idempotent; never fails. When no plausible
    /// substring is found the value is left unusable and a later
    /// `verify` reports the error.
    fn normalize(&mut self);

    /// Check validity without raising an error.
    fn is_valid(&mut self) -> bool;

    /// Verify the number, returning a structured error on failure.
    fn verify(&mut self) -> Result<(), NumberError>;

    /// The canonical, separator-free value, if one has been derived.
    fn normalized_value(&self) -> Option<&str>;

    /// A human-readable representation of the current canonical value.
    fn format(&mut self) -> Option<String>;

    /// Clear all state so the instance can be reused.
    fn reset(&mut self);

    /// Typed display variants: the formatted and the normalized value,
    /// each prefixed with the scheme name.
    fn typed_variants(&mut self) -> Vec<String> {
        let tag = self.kind().name().to_uppercase();
        let mut variants = Vec::new();
        if let Some(formatted) = self.format() {
            variants.push(format!("{tag} {formatted}"));
        }
        if let Some(normalized) = self.normalized_value() {
            variants.push(format!("{tag} {normalized}"));
        }
        variants
    }
}

/// The closed set of supported standard number schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Ark,
    Doi,
    Ean,
    Gtin,
    Isan,
    Isbn,
    Ismn,
    Isni,
    Issn,
    Istc,
    Iswc,
    Orcid,
    Ppn,
    Sici,
    Upc,
    Zdb,
}

impl NumberKind {
    /// All supported schemes.
    pub fn all() -> &'static [NumberKind] {
        &[
            NumberKind::Ark,
            NumberKind::Doi,
            NumberKind::Ean,
            NumberKind::Gtin,
            NumberKind::Isan,
            NumberKind::Isbn,
            NumberKind::Ismn,
            NumberKind::Isni,
            NumberKind::Issn,
            NumberKind::Istc,
            NumberKind::Iswc,
            NumberKind::Orcid,
            NumberKind::Ppn,
            NumberKind::Sici,
            NumberKind::Upc,
            NumberKind::Zdb,
        ]
    }

    /// Scheme name as used in lookups and typed variants.
    pub fn name(self) -> &'static str {
        match self {
            NumberKind::Ark => "ark",
            NumberKind::Doi => "doi",
            NumberKind::Ean => "ean",
            NumberKind::Gtin => "gtin",
            NumberKind::Isan => "isan",
            NumberKind::Isbn => "isbn",
            NumberKind::Ismn => "ismn",
            NumberKind::Isni => "isni",
            NumberKind::Issn => "issn",
            NumberKind::Istc => "istc",
            NumberKind::Iswc => "iswc",
            NumberKind::Orcid => "orcid",
            NumberKind::Ppn => "ppn",
            NumberKind::Sici => "sici",
            NumberKind::Upc => "upc",
            NumberKind::Zdb => "zdb",
        }
    }

    /// Look up a scheme by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<NumberKind> {
        match name.to_ascii_lowercase().as_str() {
            "ark" => Some(NumberKind::Ark),
            "doi" => Some(NumberKind::Doi),
            "ean" => Some(NumberKind::Ean),
            "gtin" => Some(NumberKind::Gtin),
            "isan" => Some(NumberKind::Isan),
            "isbn" => Some(NumberKind::Isbn),
            "ismn" => Some(NumberKind::Ismn),
            "isni" => Some(NumberKind::Isni),
            "issn" => Some(NumberKind::Issn),
            "istc" => Some(NumberKind::Istc),
            "iswc" => Some(NumberKind::Iswc),
            "orcid" => Some(NumberKind::Orcid),
            "ppn" => Some(NumberKind::Ppn),
            "sici" => Some(NumberKind::Sici),
            "upc" => Some(NumberKind::Upc),
            "zdb" => Some(NumberKind::Zdb),
            _ => None,
        }
    }

    /// Construct a fresh handler for this scheme.
    pub fn make(self) -> Box<dyn StandardNumber> {
        match self {
            NumberKind::Ark => Box::new(crate::ark::Ark::new()),
            NumberKind::Doi => Box::new(crate::doi::Doi::new()),
            NumberKind::Ean => Box::new(crate::ean::Ean::new()),
            NumberKind::Gtin => Box::new(crate::gtin::Gtin::new()),
            NumberKind::Isan => Box::new(crate::isan::Isan::new()),
            NumberKind::Isbn => Box::new(crate::isbn::Isbn::new()),
            NumberKind::Ismn => Box::new(crate::ismn::Ismn::new()),
            NumberKind::Isni => Box::new(crate::isni::Isni::new()),
            NumberKind::Issn => Box::new(crate::issn::Issn::new()),
            NumberKind::Istc => Box::new(crate::istc::Istc::new()),
            NumberKind::Iswc => Box::new(crate::iswc::Iswc::new()),
            NumberKind::Orcid => Box::new(crate::orcid::Orcid::new()),
            NumberKind::Ppn => Box::new(crate::ppn::Ppn::new()),
            NumberKind::Sici => Box::new(crate::sici::Sici::new()),
            NumberKind::Upc => Box::new(crate::upc::Upc::new()),
            NumberKind::Zdb => Box::new(crate::zdb::Zdb::new()),
        }
    }
}
