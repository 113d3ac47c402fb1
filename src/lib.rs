//! Validation state of a signup form.
//!
//! Each field tracks its value and whether it has been touched, and derives
//! its validity from a rule. The form combines four such fields, ties the
//! password confirmation to the live password, and only hands its content
//! over when every field is valid.

pub mod consts;
pub mod field;
pub mod form;
pub mod models;
pub mod submit;
pub mod utils;

pub use field::{FieldStatus, FieldValidator};
pub use form::{FormCoordinator, SubmitError, SubmitOutcome};
pub use models::{Advisory, Field, SecretField, Submission};
pub use submit::{LogSubmitter, Submitter};
