use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use super::null_as_empty;

/// Daily mark. Parsing is case-sensitive: `"present"` is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl TryFrom<String> for AttendanceStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "2024-05-01")]
    pub date: String,

    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,

    #[schema(example = "2024-05-01T09:00:00Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,

    #[schema(example = "2024-05-01T09:00:00Z", format = "date-time", value_type = String)]
    pub updated_at: DateTime<Utc>,
}

/// Raw mark request; all three fields arrive as strings and may be blank.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkAttendance {
    #[schema(example = "EMP-001")]
    #[serde(deserialize_with = "null_as_empty")]
    pub employee_id: String,
    #[schema(example = "2024-05-01")]
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    #[schema(example = "Present")]
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
}

/// Outcome of an upsert against the (employee_id, date) key.
#[derive(Debug, Clone)]
pub struct Upserted {
    pub record: Attendance,
    pub created: bool,
}

/// Which slice of the attendance table a listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceFilter {
    All,
    OnOrAfter(String),
    /// Inclusive on both ends.
    Between(String, String),
}

impl AttendanceFilter {
    /// In-process equivalent of the SQL `WHERE` built for each variant.
    #[cfg(test)]
    pub fn matches(&self, date: &str) -> bool {
        match self {
            AttendanceFilter::All => true,
            AttendanceFilter::OnOrAfter(start) => date >= start.as_str(),
            AttendanceFilter::Between(start, end) => {
                date >= start.as_str() && date <= end.as_str()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert_eq!("Present".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Present));
        assert_eq!("Absent".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Absent));
        assert!("present".parse::<AttendanceStatus>().is_err());
        assert!("On Leave".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_its_column_text() {
        let status = AttendanceStatus::try_from(AttendanceStatus::Absent.as_ref().to_string());
        assert_eq!(status, Ok(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
    }

    #[test]
    fn between_is_inclusive_and_lexicographic() {
        let filter = AttendanceFilter::Between("2024-01-01".into(), "2024-01-31".into());
        assert!(filter.matches("2024-01-01"));
        assert!(filter.matches("2024-01-31"));
        assert!(!filter.matches("2023-12-31"));
        assert!(!filter.matches("2024-02-01"));
    }

    #[test]
    fn on_or_after_keeps_the_boundary() {
        let filter = AttendanceFilter::OnOrAfter("2024-03-10".into());
        assert!(filter.matches("2024-03-10"));
        assert!(filter.matches("2024-04-01"));
        assert!(!filter.matches("2024-03-09"));
        assert!(AttendanceFilter::All.matches("1999-01-01"));
    }
}
