//! Weighted-sum checksum schemes
//!
//! The position-weighted modulus schemes used by the trade-item and
//! catalog numbering families: alternating ×1/×3 decimal sums closed
//! modulo 10, descending-weight sums modulo 11 with an `X` sentinel,
//! and the alternating mod-37 sum over the `0-9A-Z#` alphabet.

use super::Checksum;

fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(10)
}

/// Digit value with `X`/`x` standing for 10.
fn mod11_value(ch: char) -> Option<u32> {
    match ch {
        'X' | 'x' => Some(10),
        _ => ch.to_digit(10),
    }
}

fn mod11_char(value: u32) -> char {
    if value == 10 {
        'X'
    } else {
        char::from(b'0' + value as u8)
    }
}

/// Alternating ×1/×3 sum over a decimal payload, summed left to right.
fn weighted_mod10(body: &str, even_weight: u32) -> u32 {
    let odd_weight = 4 - even_weight;
    let sum: u32 = body
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let val = digit_value(ch)
                .unwrap_or_else(|| panic!("not a digit in {body}"));
            let weight = if i % 2 == 0 { even_weight } else { odd_weight };
            val * weight
        })
        .sum();
    (10 - sum % 10) % 10
}

fn verify_mod10(value: &str, even_weight: u32) -> bool {
    if value.len() < 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, check) = value.split_at(value.len() - 1);
    weighted_mod10(body, even_weight) == check.chars().next().and_then(digit_value).unwrap_or(11)
}

/// EAN/GTIN-family mod 10: even positions (from the left, zero-based)
/// weigh 1, odd positions weigh 3.
pub struct EanMod10;

impl Checksum for EanMod10 {
    fn compute(&self, body: &str) -> u32 {
        weighted_mod10(body, 1)
    }

    fn verify(&self, value: &str) -> bool {
        verify_mod10(value, 1)
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, self.compute(body))
    }
}

/// UPC mod 10: even positions weigh 3, odd positions weigh 1.
pub struct UpcMod10;

impl Checksum for UpcMod10 {
    fn compute(&self, body: &str) -> u32 {
        weighted_mod10(body, 3)
    }

    fn verify(&self, value: &str) -> bool {
        verify_mod10(value, 3)
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, self.compute(body))
    }
}

/// Sum with weights ascending 2,3,4,… from the rightmost payload digit.
fn descending_mod11_sum(body: &str) -> u32 {
    body.chars()
        .rev()
        .enumerate()
        .map(|(i, ch)| {
            let val = digit_value(ch)
                .unwrap_or_else(|| panic!("not a digit in {body}"));
            val * (i as u32 + 2)
        })
        .sum()
}

fn verify_mod11(value: &str, check_of: impl Fn(&str) -> u32) -> bool {
    if value.len() < 2 || !value.is_ascii() {
        return false;
    }
    let (body, check) = value.split_at(value.len() - 1);
    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match check.chars().next().and_then(mod11_value) {
        Some(stored) => check_of(body) == stored,
        None => false,
    }
}

/// Descending-weight mod 11 with check value `(11 − sum mod 11) mod 11`,
/// rendering 10 as `X`. Used by the ten-character book number, the serial
/// number, and the Pica catalog record number.
pub struct Mod11Complement;

impl Checksum for Mod11Complement {
    fn compute(&self, body: &str) -> u32 {
        (11 - descending_mod11_sum(body) % 11) % 11
    }

    fn verify(&self, value: &str) -> bool {
        verify_mod11(value, |body| self.compute(body))
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, mod11_char(self.compute(body)))
    }
}

/// Descending-weight mod 11 with check value `sum mod 11`, rendering 10
/// as `X`. Used by the serial-titles database number.
pub struct Mod11Residue;

impl Checksum for Mod11Residue {
    fn compute(&self, body: &str) -> u32 {
        descending_mod11_sum(body) % 11
    }

    fn verify(&self, value: &str) -> bool {
        verify_mod11(value, |body| self.compute(body))
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, mod11_char(self.compute(body)))
    }
}

/// Alphabet of the serial item/contribution check character.
const MOD37_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ#";

fn mod37_value(ch: char) -> Option<u32> {
    MOD37_ALPHABET.find(ch).map(|i| i as u32)
}

/// Alternating ×1/×3 sum over the 37-symbol alphabet `0-9A-Z#`, check
/// value `(37 − sum mod 37) mod 37`, value 36 rendering as `#`.
///
/// Serial item/contribution codes carry punctuation in the payload; any
/// character outside the alphabet scores −1, as the issuing standard's
/// reference implementation does. The check character itself must be in
/// the alphabet.
pub struct AlnumMod37;

impl AlnumMod37 {
    fn sum(body: &str) -> i64 {
        body.chars()
            .enumerate()
            .map(|(i, ch)| {
                let val = mod37_value(ch).map(i64::from).unwrap_or(-1);
                val * if i % 2 == 0 { 1 } else { 3 }
            })
            .sum()
    }
}

impl Checksum for AlnumMod37 {
    fn compute(&self, body: &str) -> u32 {
        ((37 - Self::sum(body).rem_euclid(37)) % 37) as u32
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 2 || !value.is_ascii() {
            return false;
        }
        let (body, check) = value.split_at(value.len() - 1);
        match check.chars().next().and_then(mod37_value) {
            Some(stored) => self.compute(body) == stored,
            None => false,
        }
    }

    fn encode(&self, body: &str) -> String {
        let check = self.compute(body) as usize;
        format!("{}{}", body, &MOD37_ALPHABET[check..=check])
    }
}
