//! The signup form: four validated fields, their cross-field rule, and the
//! submit/reset protocol.

use log::{debug, info};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::field::{DependentPredicate, FieldStatus, FieldValidator, Predicate};
use crate::models::{Advisory, Field, SecretField, Submission};
use crate::submit::Submitter;
use crate::utils::input_validation::{
    is_email, is_not_empty, is_password, matches, unmet_password_requirements,
};

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The submitter failed. The form keeps its content.
    #[error("Submission rejected: {0}")]
    Rejected(anyhow::Error),
}

/// Result of a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not valid, nothing happened
    Ignored,
    /// The submitter accepted the form, which has been reset
    Submitted,
}

pub struct FormCoordinator<S> {
    name: FieldValidator<Predicate>,
    email: FieldValidator<Predicate>,
    password: FieldValidator<Predicate>,
    confirm_password: FieldValidator<DependentPredicate>,
    password_visible: bool,
    confirm_visible: bool,
    submitter: S,
}

impl<S: Submitter> FormCoordinator<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            name: FieldValidator::new(is_not_empty),
            email: FieldValidator::new(is_email),
            password: FieldValidator::new(is_password),
            confirm_password: FieldValidator::new(matches),
            password_visible: false,
            confirm_visible: false,
            submitter,
        }
    }

    /// Single-value fields. The confirmation is handled apart since its
    /// rule needs the password.
    fn simple_field(&self, field: Field) -> Option<&FieldValidator<Predicate>> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => None,
        }
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        debug!("{field} changed");
        match field {
            Field::Name => self.name.on_change(value),
            Field::Email => self.email.on_change(value),
            Field::Password => self.password.on_change(value),
            Field::ConfirmPassword => self.confirm_password.on_change(value),
        }
    }

    pub fn blur(&mut self, field: Field) {
        debug!("{field} blurred");
        match field {
            Field::Name => self.name.on_blur(),
            Field::Email => self.email.on_blur(),
            Field::Password => self.password.on_blur(),
            Field::ConfirmPassword => self.confirm_password.on_blur(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match self.simple_field(field) {
            Some(validator) => validator.value(),
            None => self.confirm_password.value(),
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match self.simple_field(field) {
            Some(validator) => validator.is_touched(),
            None => self.confirm_password.is_touched(),
        }
    }

    /// Current state of the field. For the confirmation this is evaluated
    /// against the password as it is right now.
    pub fn status(&self, field: Field) -> FieldStatus {
        match self.simple_field(field) {
            Some(validator) => validator.status(),
            None => self.confirm_password.status_against(self.password.value()),
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        match self.simple_field(field) {
            Some(validator) => validator.is_valid(),
            None => self
                .confirm_password
                .is_valid_against(self.password.value()),
        }
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.status(field).has_error()
    }

    /// Every field is valid right now
    pub fn is_form_valid(&self) -> bool {
        Field::iter().all(|field| self.is_valid(field))
    }

    /// Messages to show under a field.
    ///
    /// The error message only appears once the field is in error. The
    /// password requirement hints are listed as long as they are not met,
    /// touched or not.
    pub fn advisories(&self, field: Field) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let has_error = self.has_error(field);

        match field {
            Field::Name if has_error => advisories.push(Advisory::NameEmpty),
            Field::Email if has_error => advisories.push(Advisory::EmailInvalid),
            Field::Password => {
                if has_error {
                    advisories.push(Advisory::PasswordInvalid);
                }
                advisories.extend(
                    unmet_password_requirements(self.password.value())
                        .into_iter()
                        .map(Advisory::PasswordRequirement),
                );
            }
            Field::ConfirmPassword if has_error => advisories.push(Advisory::ConfirmMismatch),
            _ => {}
        }

        advisories
    }

    pub fn is_visible(&self, field: SecretField) -> bool {
        match field {
            SecretField::Password => self.password_visible,
            SecretField::ConfirmPassword => self.confirm_visible,
        }
    }

    /// Flips the show/hide toggle of a secret field
    pub fn toggle_visibility(&mut self, field: SecretField) {
        let visible = match field {
            SecretField::Password => &mut self.password_visible,
            SecretField::ConfirmPassword => &mut self.confirm_visible,
        };
        *visible = !*visible;
    }

    /// Submits the form if it is valid, then resets it.
    ///
    /// An invalid form is left as is and the submitter is not called.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if !self.is_form_valid() {
            debug!("Submit ignored, form is not valid");
            return Ok(SubmitOutcome::Ignored);
        }

        let submission = Submission {
            name: self.name.value().to_owned(),
            email: self.email.value().to_owned(),
            password: self.password.value().to_owned(),
        };
        self.submitter
            .submit(&submission)
            .map_err(SubmitError::Rejected)?;

        info!("Form submitted for {}", submission.email);
        self.reset();
        Ok(SubmitOutcome::Submitted)
    }

    /// Empties and untouches every field, and hides both secret fields
    pub fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
        self.password.reset();
        self.confirm_password.reset();
        self.password_visible = false;
        self.confirm_visible = false;
        info!("Form reset");
    }

    #[cfg(test)]
    fn submitter(&self) -> &S {
        &self.submitter
    }
}
