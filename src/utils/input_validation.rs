//! Validation rules bound to the signup form fields.
//!
//! Every rule is a total, side-effect free predicate over the raw field
//! content, so it can be handed to a [`FieldValidator`](crate::field::FieldValidator).

use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::consts::{EMAIL_PATTERN, EMAIL_REQUIRED_SUFFIX, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};

// Regex for email addresses
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

/// A single requirement a password has to meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum PasswordRequirement {
    #[display("Min length is {}", MIN_PASSWORD_LENGTH)]
    MinLength,
    #[display("Contains at least one capital letter")]
    Uppercase,
    #[display("Contains at least one special character")]
    SpecialCharacter,
}

impl PasswordRequirement {
    /// Checks this requirement alone against the given password
    pub fn is_met(self, password: &str) -> bool {
        match self {
            PasswordRequirement::MinLength => is_min_length(password),
            PasswordRequirement::Uppercase => has_capital_letter(password),
            PasswordRequirement::SpecialCharacter => has_special_character(password),
        }
    }
}

/// The name must not be blank
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks the trimmed value against the email pattern, and requires a
/// ".com" somewhere in the raw value
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim()) && value.contains(EMAIL_REQUIRED_SUFFIX)
}

/// Substring-only email check. Accepts anything with an `@` and a ".com",
/// the form itself validates with [`is_email`].
pub fn is_email_lenient(value: &str) -> bool {
    value.contains('@') && value.contains(EMAIL_REQUIRED_SUFFIX)
}

/// Counts characters (`char`s), not bytes nor UTF-16 code units
pub fn is_min_length(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_capital_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_special_character(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// A password is valid when it meets every [`PasswordRequirement`]
pub fn is_password(value: &str) -> bool {
    PasswordRequirement::iter().all(|requirement| requirement.is_met(value))
}

/// Lists the requirements the password fails, in display order
pub fn unmet_password_requirements(value: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::iter()
        .filter(|requirement| !requirement.is_met(value))
        .collect()
}

/// The confirmation must be byte-for-byte the password
pub fn matches(confirmation: &str, password: &str) -> bool {
    confirmation == password
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_tests {
        use super::*;

        #[test]
        fn test_valid_names() {
            let valid_cases = vec!["Alice", " Bob ", "Jean-Luc", "李"];

            for name in valid_cases {
                assert!(is_not_empty(name), "Valid name {:?} was rejected !", name);
            }
        }

        #[test]
        fn test_blank_names() {
            let invalid_cases = vec!["", " ", "\t", "  \n  "];

            for name in invalid_cases {
                assert!(!is_not_empty(name), "Blank name {:?} was accepted !", name);
            }
        }
    }

    mod email_tests {
        use super::*;

        #[test]
        fn test_valid_emails() {
            let valid_cases = vec![
                "a@b.com",
                "user@example.com",
                "user.name@example.com",
                "user-name@mail.example.com",
                "  user@example.com  ",
            ];

            for email in valid_cases {
                assert!(is_email(email), "Valid email {:?} was rejected !", email);
            }
        }

        #[test]
        fn test_invalid_emails() {
            let invalid_cases = vec![
                "",
                "abc",
                "a@b",                  // No top-level label
                "user@example.org",     // No ".com"
                "user@example.comm",    // Top-level label too long
                "user name@example.com",
                "@example.com",
                "user@.com",
                "user..name@example.com",
                "usér@example.com",     // Only ASCII word characters
            ];

            for email in invalid_cases {
                assert!(!is_email(email), "Invalid email {:?} was accepted !", email);
            }
        }

        #[test]
        fn test_lenient_email_only_checks_substrings() {
            assert!(is_email_lenient("a@b.com"));
            assert!(is_email_lenient("not an email @ .com"));
            assert!(!is_email_lenient("a@b"));
            assert!(!is_email("not an email @ .com"));
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_password_validity() {
            let test_cases = vec![
                // (password, expected_valid)
                ("Abcdefg!", true),
                ("StrongP@ssw0rd!", true),
                ("Pass word", true),     // Space counts as special
                ("abcdefg!", false),     // No uppercase
                ("Abcdefgh", false),     // No special character
                ("Ab!", false),          // Too short
                ("", false),
            ];

            for (password, expected_valid) in test_cases {
                assert_eq!(
                    is_password(password),
                    expected_valid,
                    "Password {:?} validation result was unexpected",
                    password
                );
            }
        }

        #[test]
        fn test_length_counts_characters() {
            assert!(!is_min_length("Abcdef!"));
            assert!(is_min_length("Abcdefg!"));
            assert!(is_min_length("ÀÉÎÕÜÇÑ!"));
            // Six characters, even though they take ten UTF-16 code units
            assert!(!is_min_length("😀😀😀😀A!"));
        }

        #[test]
        fn test_uppercase_is_ascii_only() {
            assert!(has_capital_letter("abcD"));
            assert!(!has_capital_letter("abcÉ"));
        }

        #[test]
        fn test_unmet_requirements_are_independent() {
            assert_eq!(
                unmet_password_requirements("ab"),
                vec![
                    PasswordRequirement::MinLength,
                    PasswordRequirement::Uppercase,
                    PasswordRequirement::SpecialCharacter,
                ]
            );
            assert_eq!(
                unmet_password_requirements("Ab!"),
                vec![PasswordRequirement::MinLength]
            );
            assert_eq!(
                unmet_password_requirements("abcdefgh"),
                vec![
                    PasswordRequirement::Uppercase,
                    PasswordRequirement::SpecialCharacter,
                ]
            );
            assert!(unmet_password_requirements("Abcdefg!").is_empty());
        }

        #[test]
        fn test_requirement_display() {
            assert_eq!(PasswordRequirement::MinLength.to_string(), "Min length is 8");
            assert_eq!(
                PasswordRequirement::SpecialCharacter.to_string(),
                "Contains at least one special character"
            );
        }
    }

    #[test]
    fn test_confirmation_is_exact() {
        assert!(matches("Secret1!", "Secret1!"));
        assert!(matches("", ""));
        assert!(!matches("Secret1!", "secret1!"));
        assert!(!matches("Secret1! ", "Secret1!"));
    }
}
