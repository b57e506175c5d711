//! International Standard Music Number
//!
//! Printed music numbers historically started with an `M`; the modern
//! form is the `979-0` bookland article number. Normalization maps the
//! `M` onto `0` and prepends the `979` prefix, so the canonical value is
//! always the thirteen-digit form.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, EanMod10};
use crate::gtin::Gtin;
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ISMN_PATTERN: Regex = Regex::new(r"[0-9M\p{Pd}]{0,17}").unwrap();
}

/// A music number such as `M-2306-7118-7`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ismn {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Ismn {
    pub fn new() -> Self {
        Ismn::default()
    }

    /// The canonical value as a trade item number.
    pub fn to_gtin(&self) -> Result<Gtin, NumberError> {
        let value = self.value.as_deref().ok_or(NumberError::Missing)?;
        let mut gtin = Gtin::new();
        gtin.set(value);
        gtin.normalize();
        gtin.verify()?;
        Ok(gtin)
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = ISMN_PATTERN.find(raw).map(|m| {
            let cleaned: String = m
                .as_str()
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|ch| if ch == 'M' { '0' } else { ch })
                .collect();
            if cleaned.starts_with("979") {
                cleaned
            } else {
                format!("979{cleaned}")
            }
        });
    }

    fn check(&mut self) -> Result<(), NumberError> {
        if self.candidate.is_none() {
            self.do_normalize();
        }
        self.value = None;
        let candidate = match self.candidate.clone() {
            Some(candidate) => candidate,
            None => return Err(NumberError::Missing),
        };
        if !candidate.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(NumberError::malformed(format!(
                "invalid input: {candidate}"
            )));
        }
        // twelve digits is a payload without its check digit; repair
        // mode appends the missing digit
        if candidate.len() == 12 && self.repair {
            self.value = Some(EanMod10.encode(&candidate));
            return Ok(());
        }
        if candidate.len() != 13 {
            return Err(NumberError::malformed(format!(
                "invalid input: {candidate}"
            )));
        }
        if EanMod10.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            self.value = Some(EanMod10.encode(&candidate[..12]));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check digit: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Ismn {
    fn kind(&self) -> NumberKind {
        NumberKind::Ismn
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
    fn test_legacy_m_form() {
        let mut ismn = Ismn::new();
        ismn.set("M-2306-7118-7");
        ismn.normalize();
        assert!(ismn.is_valid());
        assert_eq!(ismn.normalized_value(), Some("9790230671187"));
    }

    #[test]
    fn test_modern_979_form() {
        let mut ismn = Ismn::new();
        ismn.set("979-0-2306-7118-7");
        ismn.normalize();
        ismn.verify().unwrap();
        assert_eq!(ismn.normalized_value(), Some("9790230671187"));
    }

    #[test]
    fn test_repair() {
        let mut ismn = Ismn::new();
        ismn.set("M-2306-7118-0");
        ismn.create_checksum(true);
        ismn.normalize();
        ismn.verify().unwrap();
        assert_eq!(ismn.normalized_value(), Some("9790230671187"));
    }

    #[test]
    fn test_repair_appends_missing_check() {
        let mut ismn = Ismn::new();
        ismn.set("979-0-3452-4680");
        ismn.create_checksum(true);
        ismn.normalize();
        ismn.verify().unwrap();
        assert_eq!(ismn.normalized_value(), Some("9790345246805"));
    }

    #[test]
    fn test_twelve_digits_without_repair() {
        let mut ismn = Ismn::new();
        ismn.set("979-0-3452-4680");
        ismn.normalize();
        assert!(matches!(ismn.verify(), Err(NumberError::Malformed { .. })));
    }

    #[test]
    fn test_lenient_979_prefix() {
        // any 979 article number with a good check digit passes; the
        // registration element is not restricted to 979-0
        let mut ismn = Ismn::new();
        ismn.set("9791234567896");
        ismn.normalize();
        assert!(ismn.is_valid());
    }

    #[test]
    fn test_to_gtin() {
        let mut ismn = Ismn::new();
        ismn.set("M-2306-7118-7");
        ismn.normalize();
        ismn.verify().unwrap();
        let gtin = ismn.to_gtin().unwrap();
        assert_eq!(gtin.normalized_value(), Some("9790230671187"));
    }
}
