//! International Standard Name Identifier
//!
//! Sixteen characters: fifteen digits plus an ISO 7064 mod 11-2 check
//! character that may be `X`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod112};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ISNI_PATTERN: Regex = Regex::new(r"[0-9xX\p{Pd}\s]{16,24}").unwrap();
}

/// A name identifier such as `0000 0001 2281 955X`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Isni {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Isni {
    pub fn new() -> Self {
        Isni::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = ISNI_PATTERN.find(raw).map(|m| {
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
        if candidate.len() != 16 || !candidate[..15].chars().all(|ch| ch.is_ascii_digit()) {
            return Err(NumberError::malformed(format!(
                "invalid input: {candidate}"
            )));
        }
        if Mod112.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            self.value = Some(Mod112.encode(&candidate[..15]));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Isni {
    fn kind(&self) -> NumberKind {
        NumberKind::Isni
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
    fn test_valid_isni_with_x_check() {
        let mut isni = Isni::new();
        isni.set("0000 0001 2281 955X");
        isni.normalize();
        assert!(isni.is_valid());
        assert_eq!(isni.normalized_value(), Some("000000012281955X"));
    }

    #[test]
    fn test_hyphenated_input() {
        let mut isni = Isni::new();
        isni.set("0000-0002-1825-0097");
        isni.normalize();
        isni.verify().unwrap();
        assert_eq!(isni.normalized_value(), Some("0000000218250097"));
    }

    #[test]
    fn test_repair_recomputes_check() {
        let mut isni = Isni::new();
        isni.set("0000000122819550");
        isni.create_checksum(true);
        isni.normalize();
        isni.verify().unwrap();
        assert_eq!(isni.normalized_value(), Some("000000012281955X"));
    }

    #[test]
    fn test_too_short_is_malformed() {
        let mut isni = Isni::new();
        isni.set("0000 0001 2281");
        isni.normalize();
        assert!(matches!(isni.verify(), Err(NumberError::Malformed { .. })));
    }
}
