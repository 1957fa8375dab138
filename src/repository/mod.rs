use async_trait::async_trait;
use derive_more::Display;

use crate::model::attendance::{Attendance, AttendanceFilter, AttendanceStatus, Upserted};
use crate::model::employee::{Employee, NewEmployee};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::{MySqlAttendanceRepository, MySqlEmployeeRepository};

#[derive(Debug, Display)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[display(fmt = "duplicate key: {}", _0)]
    Duplicate(String),
    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Employee records keyed by the business `employee_id`, which the store keeps unique.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fails with [`StoreError::Duplicate`] when the id is already taken.
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee>;

    /// Looks up by the store-assigned `id`, not the business id.
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Employee>>;

    async fn exists(&self, employee_id: &str) -> StoreResult<bool>;

    /// Newest first.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: u64) -> StoreResult<u64>;
}

/// Attendance marks, at most one per (employee_id, date).
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Creates the mark for the key or overwrites its status, as one atomic store operation.
    async fn upsert(
        &self,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> StoreResult<Upserted>;

    /// Ordered by date, newest first.
    async fn list(&self, filter: &AttendanceFilter) -> StoreResult<Vec<Attendance>>;

    /// Ordered by date, newest first.
    async fn list_for_employee(&self, employee_id: &str) -> StoreResult<Vec<Attendance>>;

    async fn delete_for_employee(&self, employee_id: &str) -> StoreResult<u64>;
}
