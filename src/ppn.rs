//! Pica production number
//!
//! Record identifier of Pica-based library systems. Same printed shape
//! as the serials-catalog number, but the check character is the
//! modulus-11 complement.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod11Complement};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref PPN_PATTERN: Regex = Regex::new(r"[0-9xX-]{3,11}").unwrap();
}

/// A Pica record number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ppn {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
    formatted: Option<String>,
}

impl Ppn {
    pub fn new() -> Self {
        Ppn::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = PPN_PATTERN.find(raw).map(|m| {
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
            if !candidate.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(NumberError::malformed(format!(
                    "invalid input: {candidate}"
                )));
            }
            self.value = Some(Mod11Complement.encode(&candidate));
        } else if Mod11Complement.verify(&candidate) {
            self.value = Some(candidate);
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Ppn {
    fn kind(&self) -> NumberKind {
        NumberKind::Ppn
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
