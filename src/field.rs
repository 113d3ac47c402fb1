//! Validation state of a single form field

use derive_more::derive::Display;

/// A rule over the field content alone
pub type Predicate = fn(&str) -> bool;

/// A rule over the field content and the live value of another field
pub type DependentPredicate = fn(&str, &str) -> bool;

/// Where a field stands in its lifecycle.
///
/// A field starts `UntouchedInvalid`, a blur moves it to one of the touched
/// states for good, and only a reset brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldStatus {
    #[display("untouched, invalid")]
    UntouchedInvalid,
    #[display("untouched, valid")]
    UntouchedValid,
    #[display("invalid")]
    TouchedInvalid,
    #[display("valid")]
    TouchedValid,
}

impl FieldStatus {
    fn new(touched: bool, valid: bool) -> Self {
        match (touched, valid) {
            (false, false) => FieldStatus::UntouchedInvalid,
            (false, true) => FieldStatus::UntouchedValid,
            (true, false) => FieldStatus::TouchedInvalid,
            (true, true) => FieldStatus::TouchedValid,
        }
    }

    /// Only a touched, invalid field reports an error
    pub fn has_error(self) -> bool {
        self == FieldStatus::TouchedInvalid
    }
}

/// The value and touched flag of one field, together with the rule its
/// value is checked against.
///
/// Validity is never stored: it is recomputed from the current value at
/// every read.
#[derive(Debug, Clone)]
pub struct FieldValidator<P> {
    value: String,
    touched: bool,
    predicate: P,
}

impl<P> FieldValidator<P> {
    /// Creates an empty, untouched field checked by `predicate`
    pub fn new(predicate: P) -> Self {
        Self {
            value: String::new(),
            touched: false,
            predicate,
        }
    }

    /// Replaces the content. The touched flag is left as is.
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The field lost focus
    pub fn on_blur(&mut self) {
        self.touched = true;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    fn status_with(&self, valid: bool) -> FieldStatus {
        FieldStatus::new(self.touched, valid)
    }
}

impl<P> FieldValidator<P>
where
    P: Fn(&str) -> bool,
{
    pub fn is_valid(&self) -> bool {
        (self.predicate)(&self.value)
    }

    pub fn has_error(&self) -> bool {
        self.status().has_error()
    }

    pub fn status(&self) -> FieldStatus {
        self.status_with(self.is_valid())
    }
}

/// Fields whose rule reads another field. The other field's value is passed
/// in at each read so the result always follows its latest content.
impl<P> FieldValidator<P>
where
    P: Fn(&str, &str) -> bool,
{
    pub fn is_valid_against(&self, dependency: &str) -> bool {
        (self.predicate)(&self.value, dependency)
    }

    pub fn has_error_against(&self, dependency: &str) -> bool {
        self.status_against(dependency).has_error()
    }

    pub fn status_against(&self, dependency: &str) -> FieldStatus {
        self.status_with(self.is_valid_against(dependency))
    }
}
