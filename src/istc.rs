//! International Standard Text Code
//!
//! Sixteen hex characters: a three-character registration element, a
//! four-digit year, an eight-character work element, and a weighted
//! mod-16 check character.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod163};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ISTC_PATTERN: Regex = Regex::new(r"[0-9A-Fa-f\p{Pd}\s]{16,24}").unwrap();
}

/// A text code such as `ISTC A02-2009-000004BE-A`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Istc {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Istc {
    pub fn new() -> Self {
        Istc::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        let stripped = raw
            .trim_start()
            .strip_prefix("ISTC")
            .unwrap_or(raw)
            .trim_start();
        self.candidate = ISTC_PATTERN.find(stripped).map(|m| {
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
        if candidate.len() != 16 {
            return Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
            )));
        }
        if Mod163.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            self.value = Some(Mod163.encode(&candidate[..15]));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Istc {
    fn kind(&self) -> NumberKind {
        NumberKind::Istc
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

    /// Printed form with the four elements hyphened apart and the
    /// scheme tag in front.
    fn format(&mut self) -> Option<String> {
        self.value.as_deref().map(|value| {
            format!(
                "ISTC {}-{}-{}-{}",
                &value[..3],
                &value[3..7],
                &value[7..15],
                &value[15..]
            )
        })
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
    }
}
