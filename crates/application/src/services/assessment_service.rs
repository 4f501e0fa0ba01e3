//! Assessment Service - Public form submission
//!
//! Runs the form rules and only reaches the Lead API when the submission is
//! clean.

use std::sync::Arc;

use domain::{Lead, LeadSubmission};
use tracing::{info, instrument, warn};

use crate::{error::ApplicationError, ports::LeadApiPort};

/// Service handling assessment form submissions
pub struct AssessmentService {
    api: Arc<dyn LeadApiPort>,
}

impl std::fmt::Debug for AssessmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentService").finish_non_exhaustive()
    }
}

impl AssessmentService {
    /// Create a new assessment service
    pub fn new(api: Arc<dyn LeadApiPort>) -> Self {
        Self { api }
    }

    /// Validate and submit a filled-in form
    ///
    /// # Errors
    ///
    /// `ApplicationError::InvalidSubmission` carrying every failing field if
    /// validation fails; the Lead API is not called in that case. API errors
    /// are passed through.
    #[instrument(skip(self, submission))]
    pub async fn submit(&self, submission: LeadSubmission) -> Result<Lead, ApplicationError> {
        let errors = submission.validate();
        if !errors.is_empty() {
            warn!(failing_fields = errors.len(), "Assessment form rejected");
            return Err(ApplicationError::InvalidSubmission(errors));
        }

        let lead = self.api.create_lead(submission.into_new_lead()).await?;
        info!(lead_id = %lead.id, "Assessment submitted");
        Ok(lead)
    }
}
