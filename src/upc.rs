//! Universal Product Code
//!
//! The twelve-digit North American barcode number. Unlike its
//! thirteen-digit relative the odd positions carry the triple weight.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, UpcMod10};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref UPC_PATTERN: Regex = Regex::new(r"[0-9]{0,12}").unwrap();
}

/// A twelve-digit product code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upc {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Upc {
    pub fn new() -> Self {
        Upc::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = UPC_PATTERN.find(raw).map(|m| m.as_str().to_string());
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
        if candidate.len() != 12 {
            return Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
            )));
        }
        if UpcMod10.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            self.value = Some(UpcMod10.encode(&candidate[..11]));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check digit: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Upc {
    fn kind(&self) -> NumberKind {
        NumberKind::Upc
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
