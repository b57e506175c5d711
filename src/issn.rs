//! International Standard Serial Number
//!
//! Eight characters: seven digits plus a modulus-11 complement check
//! character that may be `X`. A serial can be turned into a bookland
//! article number with a two-digit price or issue addon.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod11Complement};
use crate::gtin::Gtin;
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ISSN_PATTERN: Regex = Regex::new(r"[0-9xX\p{Pd}]{8,9}").unwrap();
}

/// A serial number such as `1869-7127`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issn {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Issn {
    pub fn new() -> Self {
        Issn::default()
    }

    /// Derive the `977`-prefixed article number with the given addon,
    /// repairing the trailing check digit through the trade-number
    /// handler.
    pub fn to_gtin(&self, addon: &str) -> Result<Gtin, NumberError> {
        let value = self.value.as_deref().ok_or(NumberError::Missing)?;
        let mut gtin = Gtin::new();
        gtin.set(&format!("977{}{}0", &value[..7], addon));
        gtin.create_checksum(true);
        gtin.normalize();
        gtin.verify()?;
        Ok(gtin)
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = ISSN_PATTERN.find(raw).map(|m| {
            m.as_str()
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_uppercase()
        });
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
        if candidate.len() != 8 {
            return Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
            )));
        }
        if !candidate[..7].chars().all(|ch| ch.is_ascii_digit()) {
            return Err(NumberError::malformed(format!(
                "invalid input: {candidate}"
            )));
        }
        if Mod11Complement.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            self.value = Some(Mod11Complement.encode(&candidate[..7]));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Issn {
    fn kind(&self) -> NumberKind {
        NumberKind::Issn
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

    /// Printed form, always `NNNN-NNNC`.
    fn format(&mut self) -> Option<String> {
        self.value
            .as_deref()
            .map(|value| format!("{}-{}", &value[..4], &value[4..]))
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
    fn test_valid_issn() {
        let mut issn = Issn::new();
        issn.set("1869-7127");
        issn.normalize();
        assert!(issn.is_valid());
        assert_eq!(issn.normalized_value(), Some("18697127"));
        assert_eq!(issn.format(), Some("1869-7127".to_string()));
    }

    #[test]
    fn test_to_gtin_with_addon() {
        let mut issn = Issn::new();
        issn.set("18697127");
        issn.normalize();
        issn.verify().unwrap();
        let gtin = issn.to_gtin("03").unwrap();
        assert_eq!(gtin.normalized_value(), Some("9771869712038"));
    }

    #[test]
    fn test_words_are_malformed() {
        let mut issn = Issn::new();
        issn.set("linux");
        issn.normalize();
        assert!(matches!(issn.verify(), Err(NumberError::Malformed { .. })));
    }

    #[test]
    fn test_bad_check_without_repair() {
        let mut issn = Issn::new();
        issn.set("1869-7128");
        issn.normalize();
        assert!(matches!(
            issn.verify(),
            Err(NumberError::BadChecksum { .. })
        ));
    }
}
