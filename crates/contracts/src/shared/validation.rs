//! Structural field checks shared by the booking and registration forms.
//!
//! These are shape checks only. Authoritative validation happens on the
//! backend; the client uses these to block obviously malformed input
//! before a request is even attempted.

/// Structural check for a goods-and-services tax registration number.
///
/// 15 characters: 2-digit state code, 10-character permanent account
/// number (5 letters, 4 digits, 1 letter), entity digit/letter, a literal
/// 'Z', and a final alphanumeric. Deliberately checksum-free: the backend
/// owns real verification.
pub fn is_valid_tax_registration_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    let digit = |b: u8| b.is_ascii_digit();
    let upper = |b: u8| b.is_ascii_uppercase();
    let alnum = |b: u8| b.is_ascii_digit() || b.is_ascii_uppercase();

    digit(bytes[0])
        && digit(bytes[1])
        && bytes[2..7].iter().all(|&b| upper(b))
        && bytes[7..11].iter().all(|&b| digit(b))
        && upper(bytes[11])
        && alnum(bytes[12])
        && bytes[12] != b'0'
        && bytes[13] == b'Z'
        && alnum(bytes[14])
}

/// Minimal shape check for an email address: one '@' with something on
/// both sides and a dot in the domain part.
pub fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

/// Shape check for a dialable phone number: optional '+', 10-13 digits.
pub fn is_plausible_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=13).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_tax_numbers() {
        assert!(is_valid_tax_registration_number("29ABCDE1234F1Z5"));
        assert!(is_valid_tax_registration_number("07AAACC1206D1ZM"));
    }

    #[test]
    fn rejects_malformed_tax_numbers() {
        // wrong length
        assert!(!is_valid_tax_registration_number("29ABCDE1234F1Z"));
        // lowercase letters
        assert!(!is_valid_tax_registration_number("29abcde1234f1z5"));
        // missing the fixed 'Z'
        assert!(!is_valid_tax_registration_number("29ABCDE1234F1X5"));
        // entity position may not be '0'
        assert!(!is_valid_tax_registration_number("29ABCDE1234F0Z5"));
        // letters where the state code belongs
        assert!(!is_valid_tax_registration_number("XXABCDE1234F1Z5"));
        assert!(!is_valid_tax_registration_number(""));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_plausible_email("ads@example.com"));
        assert!(is_plausible_email("first.last@sub.example.in"));
        assert!(!is_plausible_email("no-at-sign.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@"));
        assert!(!is_plausible_email("a@domain"));
        assert!(!is_plausible_email("a b@example.com"));
    }

    #[test]
    fn phone_shape_check() {
        assert!(is_plausible_phone("9876543210"));
        assert!(is_plausible_phone("+919876543210"));
        assert!(!is_plausible_phone("12345"));
        assert!(!is_plausible_phone("98-76-54-32"));
        assert!(!is_plausible_phone("+1234567890123456"));
    }
}
