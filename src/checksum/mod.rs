//! Check digit and check character algorithms
//!
//! One implementation per modulus scheme, all behind the same contract:
//! compute a check value for a payload, verify a full string against its
//! trailing check character(s), and append a freshly computed check value.

pub mod iso7064;
pub mod weighted;

pub use iso7064::{Mod112, Mod1110, Mod163, Mod3736, Mod9710};
pub use weighted::{AlnumMod37, EanMod10, Mod11Complement, Mod11Residue, UpcMod10};

/// A modulus checksum scheme.
///
/// `verify` fails closed: an out-of-alphabet character anywhere, or an
/// input shorter than the scheme minimum, is a verification failure and
/// never an out-of-bounds fault. `compute` and `encode` take the payload
/// only (no check character) and treat an out-of-alphabet character as a
/// precondition violation.
pub trait Checksum {
    /// Compute the check value for a payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload contains a character outside the scheme's
    /// alphabet. Callers validate the payload first.
    fn compute(&self, body: &str) -> u32;

    /// Verify a full string, including its trailing check character(s).
    fn verify(&self, value: &str) -> bool;

    /// Append the computed check value to the payload, rendered in the
    /// scheme's alphabet. `verify(encode(body))` holds for every payload
    /// within the scheme's alphabet.
    fn encode(&self, body: &str) -> String;

    /// The payload part of a full string, without the check character(s).
    /// Most schemes use one trailing check character.
    fn number<'a>(&self, value: &'a str) -> &'a str {
        let mut chars = value.chars();
        chars.next_back();
        chars.as_str()
    }
}

/// Value of an alphanumeric check character in the `0-9A-Z` alphabet.
pub(crate) fn alnum_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Render a check value in the `0-9A-Z` alphabet.
///
/// # Panics
///
/// Panics if `value` is 36 or larger.
pub(crate) fn alnum_char(value: u32) -> char {
    match value {
        0..=9 => char::from(b'0' + value as u8),
        10..=35 => char::from(b'A' + (value - 10) as u8),
        _ => panic!("check value {value} out of alphabet"),
    }
}
