//! Shared fixtures for service and handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::model::attendance::{Attendance, AttendanceFilter, AttendanceStatus, Upserted};
use crate::model::employee::{CreateEmployee, Employee, NewEmployee};
use crate::repository::memory::{InMemoryAttendanceRepository, InMemoryEmployeeRepository};
use crate::repository::{AttendanceRepository, EmployeeRepository, StoreError, StoreResult};
use crate::service::{AttendanceService, EmployeeService};

pub const WINDOW_DAYS: u64 = 30;

pub fn employee_input(
    employee_id: &str,
    full_name: &str,
    email: &str,
    department: &str,
) -> CreateEmployee {
    CreateEmployee {
        employee_id: employee_id.into(),
        full_name: full_name.into(),
        email: email.into(),
        department: department.into(),
    }
}

#[derive(Default)]
pub struct TestStores {
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub attendance: Arc<InMemoryAttendanceRepository>,
}

impl TestStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_service(&self) -> EmployeeService {
        EmployeeService::new(self.employees.clone(), self.attendance.clone())
    }

    pub fn attendance_service(&self) -> AttendanceService {
        AttendanceService::new(self.employees.clone(), self.attendance.clone(), WINDOW_DAYS)
    }

    pub async fn seed_employee(&self, employee_id: &str) -> Employee {
        self.employees
            .insert(NewEmployee {
                employee_id: employee_id.to_string(),
                full_name: format!("Employee {employee_id}"),
                email: format!("{}@example.com", employee_id.to_lowercase()),
                department: "Engineering".to_string(),
            })
            .await
            .expect("seed employee")
    }

    pub async fn seed_attendance(&self, employee_id: &str, date: &str, status: AttendanceStatus) {
        self.attendance
            .upsert(employee_id, date, status)
            .await
            .expect("seed attendance");
    }
}

/// Employee store that always loses the insert race: the id looks free, then the
/// unique index rejects the write.
#[derive(Default)]
pub struct RacingEmployeeRepository {
    pub inner: Arc<InMemoryEmployeeRepository>,
}

#[async_trait]
impl EmployeeRepository for RacingEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee> {
        Err(StoreError::Duplicate(format!(
            "Duplicate entry '{}' for key 'uq_employees_employee_id'",
            employee.employee_id
        )))
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Employee>> {
        self.inner.find_by_id(id).await
    }

    async fn exists(&self, _employee_id: &str) -> StoreResult<bool> {
        Ok(false)
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        self.inner.list().await
    }

    async fn delete(&self, id: u64) -> StoreResult<u64> {
        self.inner.delete(id).await
    }
}

/// Attendance store whose bulk delete fails; everything else goes to `inner`.
pub struct BrokenCascadeAttendanceRepository {
    pub inner: Arc<InMemoryAttendanceRepository>,
}

#[async_trait]
impl AttendanceRepository for BrokenCascadeAttendanceRepository {
    async fn upsert(
        &self,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> StoreResult<Upserted> {
        self.inner.upsert(employee_id, date, status).await
    }

    async fn list(&self, filter: &AttendanceFilter) -> StoreResult<Vec<Attendance>> {
        self.inner.list(filter).await
    }

    async fn list_for_employee(&self, employee_id: &str) -> StoreResult<Vec<Attendance>> {
        self.inner.list_for_employee(employee_id).await
    }

    async fn delete_for_employee(&self, _employee_id: &str) -> StoreResult<u64> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
