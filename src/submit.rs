//! Hand-off of a valid form to whatever consumes it

use log::info;

use crate::models::Submission;

/// Receives the content of a valid form.
///
/// The form calls it at most once per submit, and only when every field is
/// valid.
pub trait Submitter {
    fn submit(&mut self, submission: &Submission) -> anyhow::Result<()>;
}

/// Logs the submitted account, without its password
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl LogSubmitter {
    /// The JSON line written to the log for a submission
    fn payload(submission: &Submission) -> serde_json::Result<String> {
        serde_json::to_string(submission)
    }
}

impl Submitter for LogSubmitter {
    fn submit(&mut self, submission: &Submission) -> anyhow::Result<()> {
        info!("Submitted! {}", Self::payload(submission)?);
        Ok(())
    }
}
