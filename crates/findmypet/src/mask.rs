//! Input masks for form fields.
//!
//! These format partially typed input, so they accept any number of digits
//! and never fail. Non-digits are dropped and input is cut at 11 digits.

const MAX_DIGITS: usize = 11;

fn digits(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Mask a CPF as it is typed: `ddd`, `ddd.ddd`, `ddd.ddd.ddd`, `ddd.ddd.ddd-dd`.
///
/// ```
/// assert_eq!(findmypet::mask::cpf("5299822"), "529.982.2");
/// assert_eq!(findmypet::mask::cpf("52998224725"), "529.982.247-25");
/// ```
pub fn cpf(input: &str) -> String {
    let d = digits(input);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Mask a phone number as it is typed.
///
/// Up to 10 digits use the landline layout `(dd) dddd-dddd`; 11 digits use
/// the mobile layout `(dd) ddddd-dddd`.
///
/// ```
/// assert_eq!(findmypet::mask::phone("119"), "(11) 9");
/// assert_eq!(findmypet::mask::phone("11987654321"), "(11) 98765-4321");
/// ```
pub fn phone(input: &str) -> String {
    let d = digits(input);
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_mask_bands() {
        assert_eq!(cpf(""), "");
        assert_eq!(cpf("529"), "529");
        assert_eq!(cpf("5299"), "529.9");
        assert_eq!(cpf("529982"), "529.982");
        assert_eq!(cpf("5299822"), "529.982.2");
        assert_eq!(cpf("529982247"), "529.982.247");
        assert_eq!(cpf("5299822472"), "529.982.247-2");
        assert_eq!(cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn cpf_mask_ignores_punctuation_and_extra_digits() {
        assert_eq!(cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(cpf("5299822472599"), "529.982.247-25");
    }

    #[test]
    fn phone_mask_bands() {
        assert_eq!(phone(""), "");
        assert_eq!(phone("1"), "(1");
        assert_eq!(phone("11"), "(11");
        assert_eq!(phone("119"), "(11) 9");
        assert_eq!(phone("119876"), "(11) 9876");
        assert_eq!(phone("1198765"), "(11) 9876-5");
        assert_eq!(phone("1134567890"), "(11) 3456-7890");
        assert_eq!(phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_mask_is_stable_on_formatted_input() {
        let once = phone("11987654321");
        assert_eq!(phone(&once), once);
        assert_eq!(phone("(11) 98765-43219999"), "(11) 98765-4321");
    }
}
