//! ISO/IEC 7064:2003 checksum schemes

use super::{alnum_char, alnum_value, Checksum};

/// MOD 11-2 pure-system calculation over decimal digits, with `X`
/// standing for check value 10 in the final position only. Used by the
/// name-identifier family.
pub struct Mod112;

impl Mod112 {
    /// Doubling fold over the payload digits, reduced mod 11.
    fn fold(body: &str) -> Option<u32> {
        let mut check = 0u32;
        for ch in body.chars() {
            let val = ch.to_digit(10)?;
            check = ((check + val) * 2) % 11;
        }
        Some(check)
    }
}

impl Checksum for Mod112 {
    fn compute(&self, body: &str) -> u32 {
        let folded = Self::fold(body)
            .unwrap_or_else(|| panic!("not a digit in {body}"));
        (12 - folded) % 11
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 2 || !value.is_ascii() {
            return false;
        }
        let (body, check) = value.split_at(value.len() - 1);
        let stored = match check.chars().next() {
            Some('X') | Some('x') => 10,
            Some(ch) => match ch.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
            None => return false,
        };
        match Self::fold(body) {
            Some(folded) => (folded + stored) % 11 == 1,
            None => false,
        }
    }

    fn encode(&self, body: &str) -> String {
        let check = self.compute(body);
        if check == 10 {
            format!("{body}X")
        } else {
            format!("{body}{check}")
        }
    }
}

/// MOD 11,10 hybrid-system calculation over decimal digits, as used in
/// German VAT numbers. A full string is valid iff the fold ends at 1.
pub struct Mod1110;

impl Mod1110 {
    fn fold(digits: &str) -> Option<u32> {
        let modulus = 10u32;
        let mut check = modulus / 2;
        for ch in digits.chars() {
            let val = ch.to_digit(10)?;
            let base = if check > 0 { check } else { modulus };
            let doubled = (base * 2) % (modulus + 1);
            check = (doubled + val) % modulus;
        }
        Some(check)
    }
}

impl Checksum for Mod1110 {
    fn compute(&self, body: &str) -> u32 {
        let folded = Self::fold(body)
            .unwrap_or_else(|| panic!("not a digit in {body}"));
        let base = if folded > 0 { folded } else { 10 };
        let doubled = (base * 2) % 11;
        (11 - doubled) % 10
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 2 {
            return false;
        }
        matches!(Self::fold(value), Some(1))
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, self.compute(body))
    }
}

/// MOD 97-10 calculation: the whole numeric value reduced modulo 97, two
/// trailing check digits, valid iff the remainder is 1. Used in IBAN-style
/// numbering.
pub struct Mod9710;

impl Mod9710 {
    fn remainder(digits: &str) -> Option<u32> {
        if digits.is_empty() {
            return None;
        }
        let mut rem = 0u32;
        for ch in digits.chars() {
            let val = ch.to_digit(10)?;
            rem = (rem * 10 + val) % 97;
        }
        Some(rem)
    }
}

impl Checksum for Mod9710 {
    fn compute(&self, body: &str) -> u32 {
        let rem = Self::remainder(body)
            .unwrap_or_else(|| panic!("not a digit in {body}"));
        98 - (rem * 100) % 97
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 3 {
            return false;
        }
        matches!(Self::remainder(value), Some(1))
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{:02}", body, self.compute(body))
    }

    fn number<'a>(&self, value: &'a str) -> &'a str {
        let mut chars = value.chars();
        chars.next_back();
        chars.next_back();
        chars.as_str()
    }
}

/// MOD 16/3 calculation over `0-9A-Z` with per-position weights cycling
/// 11, 9, 3, 1 and check value `sum mod 16`, rendered `0-9A-F`. Used by
/// the text-code scheme.
pub struct Mod163;

impl Mod163 {
    fn sum(body: &str) -> Option<u32> {
        let mut sum = 0u32;
        for (i, ch) in body.chars().enumerate() {
            let val = alnum_value(ch)?;
            let phase = (i % 4) as u32;
            let factor = if phase < 2 { 1 } else { 5 };
            let weight = (12 - 2 * phase) - factor; // 11, 9, 3, 1
            sum += val * weight;
        }
        Some(sum)
    }
}

impl Checksum for Mod163 {
    fn compute(&self, body: &str) -> u32 {
        Self::sum(body)
            .unwrap_or_else(|| panic!("character out of alphabet in {body}"))
            % 16
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 2 || !value.is_ascii() {
            return false;
        }
        let (body, check) = value.split_at(value.len() - 1);
        match (Self::sum(body), check.chars().next().and_then(alnum_value)) {
            (Some(sum), Some(stored)) => sum % 16 == stored,
            _ => false,
        }
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, alnum_char(self.compute(body)))
    }
}

/// MOD 37,36 hybrid-system calculation over `0-9A-Z`. Used by the
/// audiovisual-number scheme for both its root and version check
/// characters.
pub struct Mod3736;

impl Mod3736 {
    fn fold(body: &str) -> Option<u32> {
        let modulus = 36u32;
        let mut check = modulus / 2;
        for ch in body.chars() {
            let val = alnum_value(ch)?;
            let base = if check > 0 { check } else { modulus };
            let doubled = (base * 2) % (modulus + 1);
            check = (doubled + val) % modulus;
        }
        Some(check)
    }
}

impl Checksum for Mod3736 {
    fn compute(&self, body: &str) -> u32 {
        let folded = Self::fold(body)
            .unwrap_or_else(|| panic!("character out of alphabet in {body}"));
        let base = if folded > 0 { folded } else { 36 };
        let doubled = (base * 2) % 37;
        (37 - doubled) % 36
    }

    fn verify(&self, value: &str) -> bool {
        if value.len() < 2 {
            return false;
        }
        matches!(Self::fold(value), Some(1))
    }

    fn encode(&self, body: &str) -> String {
        format!("{}{}", body, alnum_char(self.compute(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod112_known_name_identifier() {
        // well-known researcher identifier 0000-0002-1825-0097
        assert_eq!(Mod112.compute("000000021825009"), 7);
        assert!(Mod112.verify("0000000218250097"));
        assert!(!Mod112.verify("0000000218250098"));
    }

    #[test]
    fn test_mod112_x_check() {
        assert_eq!(Mod112.compute("000000012281955"), 10);
        assert_eq!(Mod112.encode("000000012281955"), "000000012281955X");
        assert!(Mod112.verify("000000012281955X"));
    }

    #[test]
    fn test_mod112_rejects_inner_x() {
        assert!(!Mod112.verify("00000001X281955X"));
    }

    #[test]
    fn test_mod1110_german_vat() {
        // DE136695976
        assert_eq!(Mod1110.compute("13669597"), 6);
        assert!(Mod1110.verify("136695976"));
        assert!(!Mod1110.verify("136695970"));
        assert_eq!(Mod1110.encode("13669597"), "136695976");
    }

    #[test]
    fn test_mod9710() {
        let encoded = Mod9710.encode("794623");
        assert!(Mod9710.verify(&encoded));
        assert_eq!(Mod9710.number(&encoded), "794623");
        // single-digit check values are zero-padded
        assert_eq!(Mod9710.encode("1000").len(), 6);
        assert!(Mod9710.verify(&Mod9710.encode("1000")));
    }

    #[test]
    fn test_mod163_roundtrip() {
        let encoded = Mod163.encode("0A9200212B4A105");
        assert!(Mod163.verify(&encoded));
        let check = encoded.chars().last().unwrap();
        let flipped = if check == '0' { '1' } else { '0' };
        assert!(!Mod163.verify(&format!(
            "{}{}",
            &encoded[..encoded.len() - 1],
            flipped
        )));
    }

    #[test]
    fn test_mod3736_audiovisual_vectors() {
        assert_eq!(Mod3736.encode("B159D8FA01240000"), "B159D8FA01240000K");
        assert_eq!(Mod3736.encode("00003BAB93520000"), "00003BAB93520000G");
        assert!(Mod3736.verify("B159D8FA01240000K"));
        assert!(Mod3736.verify("188166C7342000003"));
    }

    #[test]
    fn test_fail_closed_on_bad_alphabet() {
        assert!(!Mod112.verify("00000002182500a7"));
        assert!(!Mod1110.verify("13669x976"));
        assert!(!Mod9710.verify("79#46231"));
        assert!(!Mod3736.verify("B159D8FA0124000.K"));
    }

    #[test]
    fn test_fail_closed_on_non_ascii() {
        assert!(!Mod112.verify("000000021825009é"));
        assert!(!Mod163.verify("0A9200212B4A105é"));
        assert!(!Mod3736.verify("B159D8FA0124000é"));
        assert_eq!(Mod9710.number("79462é"), "7946");
    }
}
