//! Archival Resource Key
//!
//! A URI-shaped persistent identifier under the `ark` scheme, carrying
//! a name assigning authority number and an opaque name. No check
//! digit; validation means the value parses as a URI with the right
//! scheme.

use url::Url;

use crate::number::{NumberError, NumberKind, StandardNumber};

/// A resource key such as `ark:/12025/654xz321`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ark {
    raw: Option<String>,
    value: Option<Url>,
}

impl Ark {
    pub fn new() -> Self {
        Ark::default()
    }

    /// The parsed URI of a verified key.
    pub fn as_url(&self) -> Option<&Url> {
        self.value.as_ref()
    }
}

impl StandardNumber for Ark {
    fn kind(&self) -> NumberKind {
        NumberKind::Ark
    }

    fn set(&mut self, value: &str) {
        self.reset();
        self.raw = Some(value.to_string());
    }

    fn create_checksum(&mut self, _repair: bool) {
        // no check digit in this scheme
    }

    fn normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.value = Url::parse(raw.trim())
            .ok()
            .filter(|url| url.scheme() == "ark");
    }

    fn is_valid(&mut self) -> bool {
        self.verify().is_ok()
    }

    fn verify(&mut self) -> Result<(), NumberError> {
        if self.value.is_none() {
            self.normalize();
        }
        if self.value.is_some() {
            return Ok(());
        }
        let raw = self.raw.as_deref().ok_or(NumberError::Missing)?;
        Err(NumberError::malformed(format!("invalid input: {raw}")))
    }

    fn normalized_value(&self) -> Option<&str> {
        self.value.as_ref().map(Url::as_str)
    }

    fn format(&mut self) -> Option<String> {
        self.value.as_ref().map(|url| url.as_str().to_string())
    }

    fn reset(&mut self) {
        self.raw = None;
        self.value = None;
    }
}
