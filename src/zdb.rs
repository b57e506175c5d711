//! Zeitschriftendatenbank number
//!
//! Record identifier of the German serials union catalog. The check
//! character is the plain modulus-11 residue, written as `X` for ten,
//! and the printed form separates it with a hyphen.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod11Residue};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ZDB_PATTERN: Regex = Regex::new(r"[0-9xX-]{3,11}").unwrap();
}

/// A serials-catalog record number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zdb {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
    formatted: Option<String>,
}

impl Zdb {
    pub fn new() -> Self {
        Zdb::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = ZDB_PATTERN.find(raw).map(|m| {
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
        self.formatted = None;
        let candidate = match self.candidate.clone() {
            Some(candidate) => candidate,
            None => {
                let raw = self.raw.as_deref().ok_or(NumberError::Missing)?;
                return Err(NumberError::malformed(format!("invalid input: {raw}")));
            }
        };
        if self.repair {
            // the candidate is the payload; append a fresh check character
            if !candidate.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(NumberError::malformed(format!(
                    "invalid input: {candidate}"
                )));
            }
            self.value = Some(Mod11Residue.encode(&candidate));
        } else if Mod11Residue.verify(&candidate) {
            self.value = Some(candidate);
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Zdb {
    fn kind(&self) -> NumberKind {
        NumberKind::Zdb
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

    /// Printed form with the check character hyphened off, cached.
    fn format(&mut self) -> Option<String> {
        if self.formatted.is_none() {
            self.formatted = self.value.as_deref().map(|value| {
                let split = value.len() - 1;
                format!("{}-{}", &value[..split], &value[split..])
            });
        }
        self.formatted.clone()
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
        self.formatted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zdb() {
        let mut zdb = Zdb::new();
        zdb.set("127976-2");
        zdb.normalize();
        assert!(zdb.is_valid());
        assert_eq!(zdb.normalized_value(), Some("1279762"));
        assert_eq!(zdb.format(), Some("127976-2".to_string()));
    }

    #[test]
    fn test_repair_appends_check() {
        let mut zdb = Zdb::new();
        zdb.set("127976");
        zdb.create_checksum(true);
        zdb.normalize();
        zdb.verify().unwrap();
        assert_eq!(zdb.normalized_value(), Some("1279762"));
    }

    #[test]
    fn test_bad_check() {
        let mut zdb = Zdb::new();
        zdb.set("127976-1");
        zdb.normalize();
        assert!(matches!(zdb.verify(), Err(NumberError::BadChecksum { .. })));
    }
}
