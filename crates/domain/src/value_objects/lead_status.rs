//! Lead status and the dashboard's status filter

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Review status of a lead
///
/// This is the only field of a lead that changes after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    /// Submitted, nobody has contacted the lead yet
    #[default]
    Pending,
    /// An attorney has reached out
    ReachedOut,
}

impl LeadStatus {
    /// All statuses, in display order
    pub const ALL: [Self; 2] = [Self::Pending, Self::ReachedOut];

    /// Wire representation (`PENDING` / `REACHED_OUT`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::ReachedOut => "REACHED_OUT",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::ReachedOut => "Reached Out",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact wire literal only; anything else is an invalid status.
impl FromStr for LeadStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "REACHED_OUT" => Ok(Self::ReachedOut),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Status filter applied by the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// No status filtering
    #[default]
    All,
    /// Only leads with the given status
    Only(LeadStatus),
}

impl StatusFilter {
    /// Check whether a lead with `status` passes this filter
    #[must_use]
    pub fn matches(&self, status: LeadStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    /// Wire representation (`all`, `PENDING`, `REACHED_OUT`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "pending" => Ok(Self::Only(LeadStatus::Pending)),
            "reached_out" | "reached-out" | "reachedout" => Ok(Self::Only(LeadStatus::ReachedOut)),
            _ => Err(DomainError::InvalidStatusFilter(s.to_string())),
        }
    }
}

impl From<LeadStatus> for StatusFilter {
    fn from(status: LeadStatus) -> Self {
        Self::Only(status)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_pending() {
        assert_eq!(LeadStatus::default(), LeadStatus::Pending);
    }

    #[test]
    fn status_serializes_to_wire_literals() {
        assert_eq!(
            serde_json::to_string(&LeadStatus::ReachedOut).unwrap(),
            r#""REACHED_OUT""#
        );
        let parsed: LeadStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(parsed, LeadStatus::Pending);
    }

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!("PENDING".parse::<LeadStatus>().unwrap(), LeadStatus::Pending);
        assert_eq!(
            "REACHED_OUT".parse::<LeadStatus>().unwrap(),
            LeadStatus::ReachedOut
        );
        assert!("pending".parse::<LeadStatus>().is_err());
        assert!("DONE".parse::<LeadStatus>().is_err());
        assert!("".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn invalid_status_error_message() {
        let err = "CLOSED".parse::<LeadStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status. Must be PENDING or REACHED_OUT"
        );
    }

    #[test]
    fn filter_all_matches_everything() {
        for status in LeadStatus::ALL {
            assert!(StatusFilter::All.matches(status));
        }
    }

    #[test]
    fn filter_only_matches_exact_status() {
        let filter = StatusFilter::Only(LeadStatus::ReachedOut);
        assert!(filter.matches(LeadStatus::ReachedOut));
        assert!(!filter.matches(LeadStatus::Pending));
    }

    #[test]
    fn filter_parsing_is_lenient() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "PENDING".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(LeadStatus::Pending)
        );
        assert_eq!(
            "reached-out".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(LeadStatus::ReachedOut)
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_serde_uses_wire_literals() {
        let json = serde_json::to_string(&StatusFilter::Only(LeadStatus::Pending)).unwrap();
        assert_eq!(json, r#""PENDING""#);
        let parsed: StatusFilter = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, StatusFilter::All);
    }
}
