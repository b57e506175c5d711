//! Open Researcher and Contributor ID
//!
//! A researcher identifier drawn from the name-identifier number space,
//! with the same sixteen-character shape and mod 11-2 check character.
//! Delegates validation to the name-identifier handler and adds the
//! resolver URI.

use url::Url;

use crate::isni::Isni;
use crate::number::{NumberError, NumberKind, StandardNumber};

/// A researcher identifier such as `0000-0002-1825-0097`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orcid {
    inner: Isni,
}

impl Orcid {
    pub fn new() -> Self {
        Orcid::default()
    }

    /// The resolver URI for a verified identifier.
    pub fn to_uri(&self) -> Result<Url, NumberError> {
        let value = self.inner.normalized_value().ok_or(NumberError::Missing)?;
        Url::parse(&format!("http://orcid.org/{value}"))
            .map_err(|err| NumberError::malformed(err.to_string()))
    }
}

impl StandardNumber for Orcid {
    fn kind(&self) -> NumberKind {
        NumberKind::Orcid
    }

    fn set(&mut self, value: &str) {
        self.inner.set(value);
    }

    fn create_checksum(&mut self, repair: bool) {
        self.inner.create_checksum(repair);
    }

    fn normalize(&mut self) {
        self.inner.normalize();
    }

    fn is_valid(&mut self) -> bool {
        self.inner.is_valid()
    }

    fn verify(&mut self) -> Result<(), NumberError> {
        self.inner.verify()
    }

    fn normalized_value(&self) -> Option<&str> {
        self.inner.normalized_value()
    }

    /// Printed form with the customary hyphens every four characters.
    fn format(&mut self) -> Option<String> {
        self.inner.normalized_value().map(|value| {
            format!(
                "{}-{}-{}-{}",
                &value[..4],
                &value[4..8],
                &value[8..12],
                &value[12..]
            )
        })
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
