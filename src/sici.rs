//! Serial Item and Contribution Identifier
//!
//! A structured code pinning down one contribution inside one serial
//! issue, ending in a mod-37 alphanumeric check character computed
//! over the entire code including its punctuation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{AlnumMod37, Checksum};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref SICI_PATTERN: Regex = Regex::new(r"[!-~]{12,64}").unwrap();
}

/// A contribution identifier such as
/// `0095-4403(199502/03)21:3<12:WATIIB>2.0.TX;2-J`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sici {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Sici {
    pub fn new() -> Self {
        Sici::default()
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        let stripped = raw
            .trim_start()
            .strip_prefix("SICI")
            .unwrap_or(raw)
            .trim_start();
        self.candidate = SICI_PATTERN
            .find(stripped)
            .map(|m| m.as_str().to_string());
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
        if AlnumMod37.verify(&candidate) {
            self.value = Some(candidate);
        } else if self.repair {
            let body = &candidate[..candidate.len() - 1];
            self.value = Some(AlnumMod37.encode(body));
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        }
        Ok(())
    }
}

impl StandardNumber for Sici {
    fn kind(&self) -> NumberKind {
        NumberKind::Sici
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

    /// Printed form with the scheme tag in front.
    fn format(&mut self) -> Option<String> {
        self.value.as_deref().map(|value| format!("SICI {value}"))
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
    }
}
