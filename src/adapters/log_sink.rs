use crate::domain::model::Submission;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::Result;

/// Stands in for the backend: the record is logged and nothing is sent anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<()> {
        let record = serde_json::to_string(submission)?;
        tracing::info!(
            tax_id = %submission.tax_id_digits,
            state = submission.form.state.as_deref().unwrap_or_default(),
            record = %record,
            "📨 Sign-up form data"
        );
        Ok(())
    }
}
