//! Digital Object Identifier
//!
//! A `10.`-prefixed registrant code and a suffix chosen by the
//! registrant. There is no check digit; validation is syntactic, and
//! values compare case-insensitively, so the canonical form is
//! lowercase.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref DOI_PATTERN: Regex =
        Regex::new(r"(?i)\b10\.\d{4,9}(?:\.[0-9]+)*/[a-z0-9/\-.()<>_:;\\]+").unwrap();
}

/// An object identifier such as `10.1016/0032-3861(93)90481-o`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doi {
    raw: Option<String>,
    value: Option<String>,
}

impl Doi {
    pub fn new() -> Self {
        Doi::default()
    }

    /// The resolver URI for a verified identifier.
    pub fn to_uri(&self) -> Result<Url, NumberError> {
        let value = self.value.as_deref().ok_or(NumberError::Missing)?;
        Url::parse(&format!("http://doi.org/{value}"))
            .map_err(|err| NumberError::malformed(err.to_string()))
    }
}

impl StandardNumber for Doi {
    fn kind(&self) -> NumberKind {
        NumberKind::Doi
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
        self.value = DOI_PATTERN
            .find(raw)
            .map(|m| m.as_str().to_lowercase());
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
        self.value.as_deref()
    }

    /// The resolver URL as the printable form.
    fn format(&mut self) -> Option<String> {
        self.value
            .as_deref()
            .map(|value| format!("http://doi.org/{value}"))
    }

    fn reset(&mut self) {
        self.raw = None;
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_doi() {
        let mut doi = Doi::new();
        doi.set("10.1016/0032-3861(93)90481-O");
        doi.normalize();
        assert!(doi.is_valid());
        assert_eq!(doi.normalized_value(), Some("10.1016/0032-3861(93)90481-o"));
        assert_eq!(
            doi.format(),
            Some("http://doi.org/10.1016/0032-3861(93)90481-o".to_string())
        );
    }

    #[test]
    fn test_prefixed_input() {
        let mut doi = Doi::new();
        doi.set("doi:10.1000/182");
        doi.normalize();
        doi.verify().unwrap();
        assert_eq!(doi.normalized_value(), Some("10.1000/182"));
    }

    #[test]
    fn test_invalid_input() {
        let mut doi = Doi::new();
        doi.set("not an identifier");
        doi.normalize();
        assert!(matches!(doi.verify(), Err(NumberError::Malformed { .. })));
    }
}
