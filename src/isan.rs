//! International Standard Audiovisual Number
//!
//! Sixteen hex digits naming the work, an alphanumeric mod 37,36 check
//! character, and optionally eight more hex digits naming a version
//! with a second check character. That second check is computed over
//! all twenty-four hex digits, skipping the first check character.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, Mod3736};
use crate::number::{NumberError, NumberKind, StandardNumber};

lazy_static! {
    static ref ISAN_PATTERN: Regex = Regex::new(r"[0-9A-Za-z\p{Pd}\s]{16,34}").unwrap();
}

/// An audiovisual work number, with or without the version part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Isan {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    repair: bool,
}

impl Isan {
    pub fn new() -> Self {
        Isan::default()
    }

    /// Whether the verified value carries the version part.
    pub fn is_versioned(&self) -> bool {
        self.value.as_deref().is_some_and(|value| value.len() == 26)
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        let stripped = raw
            .trim_start()
            .strip_prefix("ISAN")
            .unwrap_or(raw)
            .trim_start();
        self.candidate = ISAN_PATTERN.find(stripped).map(|m| {
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
        let value = match candidate.len() {
            16 => self.check_root(&candidate, false)?,
            17 => self.check_root(&candidate, true)?,
            24 => self.check_versioned(&candidate[..16], &candidate[16..], None)?,
            26 => self.check_versioned(
                &candidate[..16],
                &candidate[17..25],
                Some((candidate.as_bytes()[16], candidate.as_bytes()[25])),
            )?,
            _ => {
                return Err(NumberError::malformed(format!(
                    "invalid length: {candidate}"
                )))
            }
        };
        self.value = Some(value);
        Ok(())
    }

    fn check_root(&self, root: &str, has_check: bool) -> Result<String, NumberError> {
        let body = if has_check { &root[..16] } else { root };
        require_hex(body)?;
        if has_check && Mod3736.verify(root) {
            return Ok(root.to_string());
        }
        if self.repair {
            Ok(Mod3736.encode(body))
        } else if has_check {
            Err(NumberError::bad_checksum(format!(
                "bad check character: {root}"
            )))
        } else {
            Err(NumberError::bad_checksum(format!(
                "missing check character: {root}"
            )))
        }
    }

    fn check_versioned(
        &self,
        root: &str,
        version: &str,
        checks: Option<(u8, u8)>,
    ) -> Result<String, NumberError> {
        require_hex(root)?;
        require_hex(version)?;
        let hexes = format!("{root}{version}");
        if let Some((first, second)) = checks {
            let stored = format!(
                "{root}{}{version}{}",
                char::from(first),
                char::from(second)
            );
            let root_ok = Mod3736.verify(&format!("{root}{}", char::from(first)));
            let full_ok = Mod3736.verify(&format!("{hexes}{}", char::from(second)));
            if root_ok && full_ok {
                return Ok(stored);
            }
            if !self.repair {
                return Err(NumberError::bad_checksum(format!(
                    "bad check character: {stored}"
                )));
            }
        } else if !self.repair {
            return Err(NumberError::bad_checksum(format!(
                "missing check characters: {hexes}"
            )));
        }
        let root_checked = Mod3736.encode(root);
        let full_checked = Mod3736.encode(&hexes);
        let second = &full_checked[full_checked.len() - 1..];
        Ok(format!("{root_checked}{version}{second}"))
    }
}

fn require_hex(digits: &str) -> Result<(), NumberError> {
    if digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(NumberError::malformed(format!("invalid input: {digits}")))
    }
}

impl StandardNumber for Isan {
    fn kind(&self) -> NumberKind {
        NumberKind::Isan
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

    /// Printed form with the scheme tag and four-character groups.
    fn format(&mut self) -> Option<String> {
        self.value.as_deref().map(|value| {
            let mut out = String::from("ISAN ");
            out.push_str(&value[..4]);
            for chunk in [&value[4..8], &value[8..12], &value[12..16], &value[16..17]] {
                out.push('-');
                out.push_str(chunk);
            }
            if value.len() == 26 {
                for chunk in [&value[17..21], &value[21..25], &value[25..]] {
                    out.push('-');
                    out.push_str(chunk);
                }
            }
            out
        })
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
    }
}
