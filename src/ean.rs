//! International Article Number
//!
//! The thirteen-digit article number printed under retail barcodes,
//! often typeset with spaces between the number system, manufacturer,
//! and product segments.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, EanMod10};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref EAN_PATTERN: Regex = Regex::new(r"[0-9\s]{13,18}").unwrap();
}

/// A thirteen-digit article number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ean {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Ean {
    pub fn new() -> Self {
        Ean::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = EAN_PATTERN
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
        if candidate.len() != 13 {
            return Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
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

impl StandardNumber for Ean {
    fn kind(&self) -> NumberKind {
        NumberKind::Ean
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
