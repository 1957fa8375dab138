use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::null_as_empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeId": "EMP-001",
        "fullName": "Ann Lee",
        "email": "ann.lee@company.com",
        "department": "Engineering",
        "createdAt": "2024-05-01T09:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "Ann Lee")]
    pub full_name: String,

    #[schema(example = "ann.lee@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-05-01T09:00:00Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// Raw creation payload. Fields may be missing or padded with whitespace.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    #[serde(deserialize_with = "null_as_empty")]
    pub employee_id: String,
    #[schema(example = "Ann Lee")]
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[schema(example = "ann.lee@company.com", format = "email")]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[schema(example = "Engineering")]
    #[serde(deserialize_with = "null_as_empty")]
    pub department: String,
}

/// Trimmed and validated fields, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}
