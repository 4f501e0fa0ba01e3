//! Assessment form validation
//!
//! Rules are evaluated independently, so a single pass reports every
//! problem with the submission at once.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::NewLead;

/// Raw assessment form contents as entered by a prospect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub linkedin: String,
    pub visas_interested: Vec<String>,
    /// Uploaded resume location, empty when nothing was attached
    pub resume_url: String,
    pub additional_info: String,
    pub country: String,
}

/// Per-field validation messages
///
/// `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visas_interested: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

impl FormErrors {
    /// True when every field passed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Failing fields as `(field, message)` pairs, in form order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("linkedin", &self.linkedin),
            ("visasInterested", &self.visas_interested),
            ("additionalInfo", &self.additional_info),
            ("country", &self.country),
            ("resume", &self.resume),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.as_deref().map(|m| (field, m)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl LeadSubmission {
    /// Run every form rule against the submission
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        FormErrors {
            first_name: required(&self.first_name, "First name is required"),
            last_name: required(&self.last_name, "Last name is required"),
            email: validate_email(&self.email),
            linkedin: validate_linkedin(&self.linkedin),
            visas_interested: self
                .visas_interested
                .is_empty()
                .then(|| "Please select at least one visa category".to_string()),
            additional_info: required(&self.additional_info, "Please tell us how we can help you"),
            country: required(&self.country, "Country is required"),
            resume: required(&self.resume_url, "Resume/CV upload is required"),
        }
    }

    /// Convert into a create request
    ///
    /// Duplicate visa selections are dropped (first occurrence wins) and an
    /// empty resume becomes `None`.
    #[must_use]
    pub fn into_new_lead(self) -> NewLead {
        let mut visas: Vec<String> = Vec::with_capacity(self.visas_interested.len());
        for visa in self.visas_interested {
            if !visas.contains(&visa) {
                visas.push(visa);
            }
        }

        let resume_url = if self.resume_url.trim().is_empty() {
            None
        } else {
            Some(self.resume_url)
        };

        NewLead {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            linkedin: self.linkedin,
            visas_interested: visas,
            resume_url,
            additional_info: self.additional_info,
            country: self.country,
        }
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !looks_like_email(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

fn validate_linkedin(linkedin: &str) -> Option<String> {
    if linkedin.trim().is_empty() {
        return Some("LinkedIn profile or personal website is required".to_string());
    }
    if is_profile_or_website(linkedin) {
        None
    } else {
        Some("Please enter a valid LinkedIn profile URL or personal website URL".to_string())
    }
}

/// `local@domain.tld` anywhere in the value, no whitespace inside
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|_| unreachable!()));

/// Coarse `local@domain.tld` shape check
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// LinkedIn profile/company page, or any http(s) URL
#[must_use]
pub fn is_profile_or_website(value: &str) -> bool {
    let url = value.trim().to_lowercase();
    url.contains("linkedin.com/in/")
        || url.contains("linkedin.com/company/")
        || url.starts_with("http://")
        || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> LeadSubmission {
        LeadSubmission {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            linkedin: "https://linkedin.com/in/johndoe".to_string(),
            visas_interested: vec!["O-1".to_string()],
            resume_url: "/uploads/resume.pdf".to_string(),
            additional_info: "Looking for visa assistance".to_string(),
            country: "United States".to_string(),
        }
    }

    #[test]
    fn valid_submission_has_no_errors() {
        let errors = valid_submission().validate();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn empty_submission_reports_every_field() {
        let errors = LeadSubmission::default().validate();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.first_name.as_deref(), Some("First name is required"));
        assert_eq!(errors.last_name.as_deref(), Some("Last name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(
            errors.linkedin.as_deref(),
            Some("LinkedIn profile or personal website is required")
        );
        assert_eq!(
            errors.visas_interested.as_deref(),
            Some("Please select at least one visa category")
        );
        assert_eq!(
            errors.additional_info.as_deref(),
            Some("Please tell us how we can help you")
        );
        assert_eq!(errors.country.as_deref(), Some("Country is required"));
        assert_eq!(errors.resume.as_deref(), Some("Resume/CV upload is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut submission = valid_submission();
        submission.first_name = "   ".to_string();
        submission.country = "\t".to_string();
        let errors = submission.validate();
        assert!(errors.first_name.is_some());
        assert!(errors.country.is_some());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut submission = valid_submission();
        submission.email = "not-an-email".to_string();
        assert_eq!(
            submission.validate().email.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(looks_like_email("junk a@b.c junk"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@bco"));
        assert!(!looks_like_email("a @b.co"));
    }

    #[test]
    fn linkedin_accepts_profiles_and_websites() {
        assert!(is_profile_or_website("linkedin.com/in/someone"));
        assert!(is_profile_or_website("www.LinkedIn.com/company/acme"));
        assert!(is_profile_or_website("https://example.dev"));
        assert!(is_profile_or_website("  HTTP://example.dev  "));
        assert!(!is_profile_or_website("example.dev"));
        assert!(!is_profile_or_website("linkedin.com/feed"));
    }

    #[test]
    fn invalid_linkedin_message() {
        let mut submission = valid_submission();
        submission.linkedin = "johndoe".to_string();
        assert_eq!(
            submission.validate().linkedin.as_deref(),
            Some("Please enter a valid LinkedIn profile URL or personal website URL")
        );
    }

    #[test]
    fn display_lists_failures_in_form_order() {
        let mut submission = valid_submission();
        submission.country.clear();
        submission.first_name.clear();
        assert_eq!(
            submission.validate().to_string(),
            "firstName: First name is required; country: Country is required"
        );
    }

    #[test]
    fn into_new_lead_dedupes_visas_and_drops_empty_resume() {
        let mut submission = valid_submission();
        submission.visas_interested = vec![
            "O-1".to_string(),
            "EB-1".to_string(),
            "O-1".to_string(),
        ];
        submission.resume_url = "  ".to_string();

        let new_lead = submission.into_new_lead();
        assert_eq!(new_lead.visas_interested, vec!["O-1", "EB-1"]);
        assert_eq!(new_lead.resume_url, None);
    }

    #[test]
    fn into_new_lead_keeps_resume() {
        let new_lead = valid_submission().into_new_lead();
        assert_eq!(new_lead.resume_url.as_deref(), Some("/uploads/resume.pdf"));
        assert!(new_lead.ensure_complete().is_ok());
    }

    #[test]
    fn form_errors_serialize_only_failures() {
        let mut submission = valid_submission();
        submission.email = "bad".to_string();
        let json = serde_json::to_value(submission.validate()).unwrap();
        assert_eq!(json, serde_json::json!({"email": "Please enter a valid email address"}));
    }
}
