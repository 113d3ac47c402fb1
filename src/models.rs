//! Data model of the signup form

use std::fmt;

use derive_more::derive::Display;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::utils::input_validation::PasswordRequirement;

/// A field of the signup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Field {
    #[display("First Name")]
    Name,
    #[display("Email")]
    Email,
    #[display("Password")]
    Password,
    #[display("Confirm Password")]
    ConfirmPassword,
}

impl Field {
    /// Whether the field has a show/hide toggle
    pub fn secret(self) -> Option<SecretField> {
        match self {
            Field::Password => Some(SecretField::Password),
            Field::ConfirmPassword => Some(SecretField::ConfirmPassword),
            Field::Name | Field::Email => None,
        }
    }
}

/// A field whose content is hidden unless the user asks to show it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SecretField {
    #[display("Password")]
    Password,
    #[display("Confirm Password")]
    ConfirmPassword,
}

impl From<SecretField> for Field {
    fn from(secret: SecretField) -> Self {
        match secret {
            SecretField::Password => Field::Password,
            SecretField::ConfirmPassword => Field::ConfirmPassword,
        }
    }
}

/// A message shown under a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Advisory {
    #[display("Name must not be empty")]
    NameEmpty,
    #[display("Enter a valid email")]
    EmailInvalid,
    #[display("Enter a valid password")]
    PasswordInvalid,
    #[display("{_0}")]
    PasswordRequirement(PasswordRequirement),
    #[display("Confirmed password does not match")]
    ConfirmMismatch,
}

/// What gets handed over when a valid form is submitted.
/// The password never shows in its serialized form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}
