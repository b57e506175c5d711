//! International Standard Book Number
//!
//! One handler covers both printed forms: the legacy ten-character form
//! with its modulus-11 check character, and the thirteen-digit bookland
//! article number with its modulus-10 check digit. Setting either form
//! derives the other where one exists, so a single pass yields the pair
//! of interchangeable values plus their hyphenated representations.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{Checksum, EanMod10, Mod11Complement};
use crate::number::{NumberError, NumberKind, StandardNumber};
use crate::ranges::{RangeTable, DEFAULT_ISBN_RANGES};

lazy_static! {
    static ref ISBN_PATTERN: Regex = Regex::new(r"[0-9xX\p{Pd}]{10,17}").unwrap();
}

/// A book number in either the ten-character or the thirteen-digit form.
///
/// ```
/// use im_stdnum::{Isbn, StandardNumber};
///
/// let mut isbn = Isbn::new();
/// isbn.set("3-9803350-5-4 kart. : DM 24.00");
/// isbn.normalize();
/// assert!(isbn.is_valid());
/// assert_eq!(isbn.normalized_value(), Some("3980335054"));
/// assert_eq!(isbn.ean_value(), Some("9783980335058"));
/// ```
#[derive(Debug, Clone)]
pub struct Isbn {
    raw: Option<String>,
    candidate: Option<String>,
    value: Option<String>,
    ean_value: Option<String>,
    prefer_ean: bool,
    repair: bool,
    input_was_ean: bool,
    formatted: Option<String>,
    table: Arc<RangeTable>,
}

impl Default for Isbn {
    fn default() -> Self {
        Isbn::new()
    }
}

impl Isbn {
    pub fn new() -> Self {
        Isbn::with_table(Arc::clone(&DEFAULT_ISBN_RANGES))
    }

    /// Use a caller-supplied registration-group table for hyphenation.
    pub fn with_table(table: Arc<RangeTable>) -> Self {
        Isbn {
            raw: None,
            candidate: None,
            value: None,
            ean_value: None,
            prefer_ean: false,
            repair: false,
            input_was_ean: false,
            formatted: None,
            table,
        }
    }

    /// Prefer the thirteen-digit form as the canonical value.
    pub fn ean(&mut self, prefer_ean: bool) -> &mut Self {
        self.prefer_ean = prefer_ean;
        self.formatted = None;
        self
    }

    /// Whether the raw input carried the thirteen-digit form.
    pub fn is_ean(&self) -> bool {
        self.input_was_ean
    }

    /// The thirteen-digit form, if one has been derived.
    pub fn ean_value(&self) -> Option<&str> {
        self.ean_value.as_deref()
    }

    /// The ten-character form, if one exists. Prefix `979` numbers have
    /// no such form.
    pub fn short_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn check(&mut self) -> Result<(), NumberError> {
        if self.candidate.is_none() {
            self.do_normalize();
        }
        self.value = None;
        self.ean_value = None;
        self.input_was_ean = false;
        self.formatted = None;
        let candidate = match self.candidate.clone() {
            Some(candidate) => candidate,
            None => {
                let raw = self.raw.as_deref().ok_or(NumberError::Missing)?;
                return Err(NumberError::malformed(format!("invalid input: {raw}")));
            }
        };
        match candidate.len() {
            9 => self.check_short(&candidate, false),
            10 => self.check_short(&candidate, true),
            12 => self.check_ean(&candidate, false),
            13 => self.check_ean(&candidate, true),
            _ => Err(NumberError::malformed(format!(
                "invalid length: {candidate}"
            ))),
        }
    }

    /// Ten-character form: nine digits plus a modulus-11 check character
    /// that may be `X`. A nine-character input lacks the check character
    /// and is acceptable only in repair mode.
    fn check_short(&mut self, candidate: &str, has_check: bool) -> Result<(), NumberError> {
        let body = if has_check {
            &candidate[..9]
        } else {
            candidate
        };
        if !body.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(NumberError::malformed(format!("invalid input: {candidate}")));
        }
        let value = if !has_check {
            if !self.repair {
                return Err(NumberError::bad_checksum(format!(
                    "missing check character: {candidate}"
                )));
            }
            Mod11Complement.encode(body)
        } else if Mod11Complement.verify(candidate) {
            candidate.to_uppercase()
        } else if self.repair {
            Mod11Complement.encode(body)
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check character: {candidate}"
            )));
        };
        self.ean_value = Some(EanMod10.encode(&format!("978{body}")));
        self.value = Some(value);
        Ok(())
    }

    /// Thirteen-digit bookland form: must carry a `978` or `979` prefix
    /// and be all digits. A twelve-digit input lacks the check digit and
    /// is acceptable only in repair mode. Only `978` numbers convert back
    /// to the ten-character form.
    fn check_ean(&mut self, candidate: &str, has_check: bool) -> Result<(), NumberError> {
        if !candidate.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(NumberError::malformed(format!("invalid input: {candidate}")));
        }
        if !candidate.starts_with("978") && !candidate.starts_with("979") {
            return Err(NumberError::malformed(format!(
                "invalid prefix: {candidate}"
            )));
        }
        let ean = if !has_check {
            if !self.repair {
                return Err(NumberError::bad_checksum(format!(
                    "missing check digit: {candidate}"
                )));
            }
            EanMod10.encode(candidate)
        } else if EanMod10.verify(candidate) {
            candidate.to_string()
        } else if self.repair && self.prefer_ean {
            EanMod10.encode(&candidate[..12])
        } else {
            return Err(NumberError::bad_checksum(format!(
                "bad check digit: {candidate}"
            )));
        };
        if ean.starts_with("978") {
            self.value = Some(Mod11Complement.encode(&ean[3..12]));
        }
        self.ean_value = Some(ean);
        self.input_was_ean = true;
        Ok(())
    }

    fn do_normalize(&mut self) {
        let Some(raw) = self.raw.as_deref() else {
            return;
        };
        self.candidate = ISBN_PATTERN.find(raw).map(|m| {
            m.as_str()
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect()
        });
    }
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.ean_value.is_some() && self.ean_value == other.ean_value
    }
}

impl StandardNumber for Isbn {
    fn kind(&self) -> NumberKind {
        NumberKind::Isbn
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
        self.verify().is_ok() && self.normalized_value().is_some()
    }

    fn verify(&mut self) -> Result<(), NumberError> {
        self.check()
    }

    /// The preferred form only. A long form whose prefix has no short
    /// equivalent reports `None` here when the short form is preferred.
    fn normalized_value(&self) -> Option<&str> {
        if self.prefer_ean {
            self.ean_value.as_deref()
        } else {
            self.value.as_deref()
        }
    }

    /// Hyphenated representation of the preferred form, cached until the
    /// value changes. Falls back to the unhyphenated value when no
    /// registration-group interval matches.
    fn format(&mut self) -> Option<String> {
        if self.formatted.is_none() {
            self.formatted = if self.prefer_ean {
                self.ean_value.as_deref().map(|ean| self.table.format(ean))
            } else {
                self.value.as_deref().map(|value| {
                    let padded = format!("978{value}");
                    let hyphenated = self.table.format(&padded);
                    match hyphenated.strip_prefix("978-") {
                        Some(short) => short.to_string(),
                        None => value.to_string(),
                    }
                })
            };
        }
        self.formatted.clone()
    }

    fn reset(&mut self) {
        self.raw = None;
        self.candidate = None;
        self.value = None;
        self.ean_value = None;
        self.input_was_ean = false;
        self.formatted = None;
    }
}
