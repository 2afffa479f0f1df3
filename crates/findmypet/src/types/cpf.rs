//! CPF (Brazilian individual taxpayer number) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// A validated CPF, stored as its 11 digits.
///
/// Input may contain punctuation (`123.456.789-09`); only digits are kept.
/// Serializes as the bare digits, which is what the backend expects;
/// `Display` uses the punctuated form.
///
/// # Example
///
/// ```
/// use findmypet::Cpf;
///
/// let cpf = Cpf::new("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_str(), "52998224725");
/// assert_eq!(cpf.to_string(), "529.982.247-25");
/// assert!(!Cpf::is_valid("111.111.111-11"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Create a new CPF, validating length and check digits.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let digits = digits_of(s);

        let reason = if digits.len() != CPF_LEN {
            Some("must have 11 digits")
        } else if all_same(&digits) {
            Some("all digits are identical")
        } else if !check_digits_match(&digits) {
            Some("check digits do not match")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(InvalidInputError::Cpf {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into());
        }

        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }

    /// Whether `s` is a valid CPF once punctuation is stripped.
    pub fn is_valid(s: impl AsRef<str>) -> bool {
        let digits = digits_of(s.as_ref());
        digits.len() == CPF_LEN && !all_same(&digits) && check_digits_match(&digits)
    }

    /// Returns the 11 digits without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the two check digits for the first nine digits of a CPF.
///
/// Each digit is `(sum * 10) % 11` of a weighted sum (weights 10..2 over the
/// nine digits, then 11..2 over the nine digits plus the first check digit),
/// with 10 mapped to 0.
pub fn check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    (first, check_digit(&extended))
}

/// Format a CPF for display.
///
/// Inputs with exactly 11 digits become `ddd.ddd.ddd-dd`; anything else is
/// returned unchanged.
pub fn display(s: &str) -> String {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != CPF_LEN {
        return s.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn check_digits_match(digits: &[u8]) -> bool {
    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let (first, second) = check_digits(&base);
    digits[9] == first && digits[10] == second
}

fn digits_of(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display(&self.0))
    }
}

impl FromStr for Cpf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
