//! Field validation rules
//!
//! Each rule maps a field's raw value to an error. Only `confirmPassword`
//! looks at another field, through [`ValidationContext`].

use super::field::FieldName;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_AGE: f64 = 12.0;
pub const MAX_AGE: f64 = 120.0;

/// One character outside the browser whitespace set: `\s` minus NEL plus BOM
const NON_SPACE: &str = r"[[^\s\x{FEFF}]\x{85}]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+");
    Regex::new(&pattern).expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("phone pattern is valid"));

/// A user input validation failure. The `Display` output is the message shown
/// under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Age must be a number between 12 and 120.")]
    AgeOutOfRange,
    #[error("Phone number must be at least 10 digits.")]
    PhoneTooShort,
}

/// Values of other fields a rule may depend on
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    pub password: &'a str,
}

impl<'a> ValidationContext<'a> {
    pub fn new(password: &'a str) -> Self {
        Self { password }
    }
}

/// Validate a single field value
pub fn validate(
    name: FieldName,
    value: &str,
    context: &ValidationContext<'_>,
) -> Result<(), ValidationError> {
    match name {
        FieldName::FirstName | FieldName::LastName => {
            if trim_whitespace(value).is_empty() {
                Err(ValidationError::Required)
            } else {
                Ok(())
            }
        }
        FieldName::Email => {
            if EMAIL_PATTERN.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        FieldName::Password => {
            if code_unit_len(value) >= MIN_PASSWORD_LEN {
                Ok(())
            } else {
                Err(ValidationError::PasswordTooShort)
            }
        }
        // Equal but short passwords still count as a mismatch.
        FieldName::ConfirmPassword => {
            if value != context.password || code_unit_len(value) < MIN_PASSWORD_LEN {
                Err(ValidationError::PasswordMismatch)
            } else {
                Ok(())
            }
        }
        FieldName::Age => match coerce_number(value) {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
            _ => Err(ValidationError::AgeOutOfRange),
        },
        FieldName::Phone => {
            if PHONE_PATTERN.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::PhoneTooShort)
            }
        }
    }
}

fn code_unit_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace as browsers trim it. NEL is not whitespace there, the BOM is.
fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(is_space)
}

/// Permissive numeric coercion of a raw string.
///
/// Returns `None` for anything that is not a number, including the empty
/// string. Surrounding whitespace is ignored.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = trim_whitespace(raw);
    if s.is_empty() {
        return None;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .ok()
            .or(Some(f64::INFINITY));
    }

    // f64's parser also takes spellings like "inf" and "NaN" that are not numbers here
    if !s.chars().all(is_decimal_char) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: FieldName, value: &str) -> Result<(), ValidationError> {
        validate(name, value, &ValidationContext::default())
    }

    mod names {
        use super::*;

        #[test]
        fn test_empty_first_name_is_required() {
            assert_eq!(
                check(FieldName::FirstName, ""),
                Err(ValidationError::Required)
            );
        }

        #[test]
        fn test_whitespace_first_name_is_required() {
            assert_eq!(
                check(FieldName::FirstName, "   "),
                Err(ValidationError::Required)
            );
            assert_eq!(
                check(FieldName::LastName, "\t\n"),
                Err(ValidationError::Required)
            );
        }

        #[test]
        fn test_bom_is_whitespace_but_nel_is_not() {
            assert_eq!(
                check(FieldName::FirstName, "\u{feff}\u{a0}"),
                Err(ValidationError::Required)
            );
            assert_eq!(check(FieldName::FirstName, "\u{85}"), Ok(()));
        }

        #[test]
        fn test_non_empty_name_is_valid() {
            assert_eq!(check(FieldName::FirstName, "Jo"), Ok(()));
            assert_eq!(check(FieldName::LastName, " Doe "), Ok(()));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_is_valid() {
            assert_eq!(check(FieldName::Email, "a@b.c"), Ok(()));
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert_eq!(
                check(FieldName::Email, "abc"),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_missing_dot_after_at_is_invalid() {
            assert_eq!(
                check(FieldName::Email, "a@bc"),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_pattern_is_unanchored() {
            assert_eq!(check(FieldName::Email, "say a@b.c please"), Ok(()));
        }

        #[test]
        fn test_bom_breaks_the_match() {
            assert_eq!(
                check(FieldName::Email, "a\u{feff}@b.c"),
                Err(ValidationError::InvalidEmail)
            );
            assert_eq!(check(FieldName::Email, "a\u{85}@b.c"), Ok(()));
        }

        #[test]
        fn test_whitespace_breaks_the_match() {
            assert_eq!(
                check(FieldName::Email, "a @b.c"),
                Err(ValidationError::InvalidEmail)
            );
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_five_characters_is_too_short() {
            assert_eq!(
                check(FieldName::Password, "12345"),
                Err(ValidationError::PasswordTooShort)
            );
        }

        #[test]
        fn test_six_characters_is_valid() {
            assert_eq!(check(FieldName::Password, "123456"), Ok(()));
        }

        #[test]
        fn test_length_counts_utf16_code_units() {
            // Each emoji is two code units
            assert_eq!(check(FieldName::Password, "😀😀😀"), Ok(()));
            assert_eq!(
                check(FieldName::Password, "😀😀"),
                Err(ValidationError::PasswordTooShort)
            );
        }

        #[test]
        fn test_confirm_matching_password_is_valid() {
            let ctx = ValidationContext::new("123456");
            assert_eq!(validate(FieldName::ConfirmPassword, "123456", &ctx), Ok(()));
        }

        #[test]
        fn test_confirm_different_password_mismatches() {
            let ctx = ValidationContext::new("123456");
            assert_eq!(
                validate(FieldName::ConfirmPassword, "abcdef", &ctx),
                Err(ValidationError::PasswordMismatch)
            );
        }

        #[test]
        fn test_confirm_equal_short_passwords_mismatch() {
            let ctx = ValidationContext::new("12345");
            assert_eq!(
                validate(FieldName::ConfirmPassword, "12345", &ctx),
                Err(ValidationError::PasswordMismatch)
            );
        }
    }

    mod age {
        use super::*;

        #[test]
        fn test_out_of_range_and_non_numeric() {
            for value in ["130", "10", "abc", "", "   ", "11.99", "120.5"] {
                assert_eq!(
                    check(FieldName::Age, value),
                    Err(ValidationError::AgeOutOfRange),
                    "{value:?}"
                );
            }
        }

        #[test]
        fn test_in_range_values() {
            for value in ["25", "12", "120", " 30 ", "4e1", "0x1E", "+18", "18."] {
                assert_eq!(check(FieldName::Age, value), Ok(()), "{value:?}");
            }
        }

        #[test]
        fn test_coerce_rejects_rust_only_spellings() {
            assert_eq!(coerce_number("inf"), None);
            assert_eq!(coerce_number("NaN"), None);
            assert_eq!(coerce_number("1e"), None);
            assert_eq!(coerce_number("0x"), None);
            assert_eq!(coerce_number("0xZZ"), None);
        }

        #[test]
        fn test_coerce_trims_browser_whitespace_only() {
            assert_eq!(coerce_number("\u{feff}25\u{2028}"), Some(25.0));
            assert_eq!(coerce_number("\u{a0}25"), Some(25.0));
            assert_eq!(coerce_number("\u{85}25"), None);
            assert_eq!(
                check(FieldName::Age, "\u{85}25"),
                Err(ValidationError::AgeOutOfRange)
            );
        }

        #[test]
        fn test_coerce_infinity() {
            assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
            assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
            assert_eq!(
                check(FieldName::Age, "Infinity"),
                Err(ValidationError::AgeOutOfRange)
            );
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_nine_digits_is_too_short() {
            assert_eq!(
                check(FieldName::Phone, "555123456"),
                Err(ValidationError::PhoneTooShort)
            );
        }

        #[test]
        fn test_ten_digits_is_valid() {
            assert_eq!(check(FieldName::Phone, "5551234567"), Ok(()));
            assert_eq!(check(FieldName::Phone, "555123456789"), Ok(()));
        }

        #[test]
        fn test_separators_are_rejected() {
            for value in [
                "555-123-4567",
                "+15551234567",
                "(555)1234567",
                "5551234567\n",
            ] {
                assert_eq!(
                    check(FieldName::Phone, value),
                    Err(ValidationError::PhoneTooShort),
                    "{value:?}"
                );
            }
        }

        #[test]
        fn test_non_ascii_digits_are_rejected() {
            assert_eq!(
                check(FieldName::Phone, "٥٥٥١٢٣٤٥٦٧"),
                Err(ValidationError::PhoneTooShort)
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Required.to_string(),
            "This field is required."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address."
        );
        assert_eq!(
            ValidationError::AgeOutOfRange.to_string(),
            "Age must be a number between 12 and 120."
        );
    }
}
