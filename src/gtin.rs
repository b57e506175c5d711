//! Global Trade Item Number
//!
//! The article-number superset used across supply chains; values run
//! from eight to fourteen digits and are occasionally written with
//! hyphens between segments.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, EanMod10};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref GTIN_PATTERN: Regex = Regex::new(r"[0-9-]{3,18}").unwrap();
}

/// A trade item number of eight to fourteen digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gtin {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Gtin {
    pub fn new() -> Self {
        Gtin::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = GTIN_PATTERN
            .find(raw)
            .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect());
    }

    fn check(&mut self) -> Result<(), NumberError> {
        if self.candidate.is_none() {
            self.do_normalize();
        }
        self.value = None;
        let candidate = match self.candidate.clone() {
            Some(candidate) => candidate,
            None => {
                let raw = self.raw.as_deref().ok_or(NumberError::Missing)?;
                return Err(NumberError::malformed(format!("invalid input: {raw}")));
            }
        };
        if !(8..=14).contains(&candidate.len()) {
            return Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
            )));
        }
        if EanMod10.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            let body = &candidate[..candidate.len() - 1];
            self.value = Some(EanMod10.encode(body));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check digit: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Gtin {
    fn kind(&self) -> NumberKind {
        NumberKind::Gtin
    }

    fn set(&mut self, value: &str) {
        self.reset();
        self.raw = Some(value.to_string());
    }

    fn create_checksum(&mut self, repair: bool) {
        self.repair = repair;
    }

    fn normalize(&mut self) {
        self.do_normalize();
    }

    fn is_valid(&mut self) -> bool {
        self.verify().is_ok()
    }

    fn verify(&mut self) -> Result<(), NumberError> {
        self.check()
    }

    fn normalized_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn format(&mut self) -> Option<String> {
        self.value.clone()
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_gtin() {
        let mut gtin = Gtin::new();
        gtin.set("9783980335058");
        gtin.normalize();
        assert!(gtin.is_valid());
        assert_eq!(gtin.normalized_value(), Some("9783980335058"));
    }

    #[test]
    fn test_hyphenated_input() {
        let mut gtin = Gtin::new();
        gtin.set("978-3-9803350-5-8");
        gtin.normalize();
        gtin.verify().unwrap();
        assert_eq!(gtin.normalized_value(), Some("9783980335058"));
    }

    #[test]
    fn test_repair_replaces_last_digit() {
        let mut gtin = Gtin::new();
        gtin.set("9771869712030");
        gtin.create_checksum(true);
        gtin.normalize();
        gtin.verify().unwrap();
        assert_eq!(gtin.normalized_value(), Some("9771869712038"));
    }

    #[test]
    fn test_too_short() {
        let mut gtin = Gtin::new();
        gtin.set("1234567");
        gtin.normalize();
        assert!(matches!(gtin.verify(), Err(NumberError::Malformed { .. })));
    }
}
