//! Lead entity - a submitted immigration-assessment inquiry

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{LeadId, LeadStatus},
};

/// A lead as stored in the repository and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier, assigned at creation
    pub id: LeadId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// LinkedIn profile or personal website URL
    pub linkedin: String,
    /// Visa categories of interest (see [`crate::VisaCategory`] for the form options)
    pub visas_interested: Vec<String>,
    /// URL of a previously uploaded resume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub additional_info: String,
    /// Review status, the only mutable field
    pub status: LeadStatus,
    /// Display-formatted submission timestamp
    pub submitted_at: String,
    /// Country of citizenship
    pub country: String,
}

impl Lead {
    /// Materialize a new lead from a create request
    ///
    /// The status is always [`LeadStatus::Pending`] regardless of input.
    #[must_use]
    pub fn create(id: LeadId, new_lead: NewLead, submitted_at: impl Into<String>) -> Self {
        Self {
            id,
            first_name: new_lead.first_name,
            last_name: new_lead.last_name,
            email: new_lead.email,
            linkedin: new_lead.linkedin,
            visas_interested: new_lead.visas_interested,
            resume_url: new_lead.resume_url,
            additional_info: new_lead.additional_info,
            status: LeadStatus::Pending,
            submitted_at: submitted_at.into(),
            country: new_lead.country,
        }
    }

    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against first name, last name or email
    ///
    /// `needle` must already be lowercased. An empty needle matches every lead.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }

    /// Check whether a resume is attached
    #[must_use]
    pub fn has_resume(&self) -> bool {
        self.resume_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Fields accepted when creating a lead
///
/// Everything except `id`, `status` and `submitted_at`, which the API assigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub linkedin: String,
    pub visas_interested: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub additional_info: String,
    pub country: String,
}

impl NewLead {
    /// Name of the first required field that is empty, in API order
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        let checks: [(&'static str, bool); 7] = [
            ("firstName", self.first_name.is_empty()),
            ("lastName", self.last_name.is_empty()),
            ("email", self.email.is_empty()),
            ("linkedin", self.linkedin.is_empty()),
            ("visasInterested", self.visas_interested.is_empty()),
            ("additionalInfo", self.additional_info.is_empty()),
            ("country", self.country.is_empty()),
        ];

        checks
            .into_iter()
            .find_map(|(field, missing)| missing.then_some(field))
    }

    /// Reject the request if any required field is missing
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] naming the first absent field.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        match self.first_missing_field() {
            Some(field) => Err(DomainError::MissingField(field.to_string())),
            None => Ok(()),
        }
    }
}

/// Format a submission timestamp, e.g. `02/02/2024, 2:45 PM`
pub fn format_submitted_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%m/%d/%Y, %-I:%M %p").to_string()
}

/// Current local time formatted as a submission timestamp
#[must_use]
pub fn submitted_now() -> String {
    format_submitted_at(&Local::now())
}
