//! Student records and their verification status.

use serde::{Deserialize, Serialize};

/// Snapshot of a student as returned by the lookup/registration endpoints.
/// The backend owns the record; this is only a cached projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub program: String,
}

/// Verification status reported by the backend for a student record.
///
/// Decoded case-insensitively; anything the backend invents later maps to
/// `Unknown` rather than failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Unknown,
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" | "verified" => Self::Approved,
            "rejected" | "declined" => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::VerificationStatus;

    #[test]
    fn parse_accepts_backend_spellings() {
        assert_eq!(
            VerificationStatus::parse("Pending"),
            VerificationStatus::Pending
        );
        assert_eq!(
            VerificationStatus::parse(" APPROVED "),
            VerificationStatus::Approved
        );
        assert_eq!(
            VerificationStatus::parse("verified"),
            VerificationStatus::Approved
        );
        assert_eq!(
            VerificationStatus::parse("declined"),
            VerificationStatus::Rejected
        );
    }

    #[test]
    fn parse_maps_novel_strings_to_unknown() {
        assert_eq!(
            VerificationStatus::parse("on-hold"),
            VerificationStatus::Unknown
        );
        assert_eq!(VerificationStatus::parse(""), VerificationStatus::Unknown);
    }
}
