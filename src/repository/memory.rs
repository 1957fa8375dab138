//! Mutex-backed stores with the same ordering and uniqueness rules as the MySQL tables.

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::sync::Mutex;

use super::{AttendanceRepository, EmployeeRepository, StoreError, StoreResult};
use crate::model::attendance::{Attendance, AttendanceFilter, AttendanceStatus, Upserted};
use crate::model::employee::{Employee, NewEmployee};

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.employee_id == employee.employee_id) {
            return Err(StoreError::Duplicate(employee.employee_id));
        }

        let next_id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let created = Employee {
            id: next_id,
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            email: employee.email,
            department: employee.department,
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Employee>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn exists(&self, employee_id: &str) -> StoreResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|e| e.employee_id == employee_id))
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let mut employees = self.rows.lock().unwrap().clone();
        employees.sort_by_key(|e| Reverse((e.created_at, e.id)));
        Ok(employees)
    }

    async fn delete(&self, id: u64) -> StoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryAttendanceRepository {
    rows: Mutex<Vec<Attendance>>,
}

impl InMemoryAttendanceRepository {
    pub fn count_for(&self, employee_id: &str) -> usize {
        let rows = self.rows.lock().unwrap();
        rows.iter().filter(|a| a.employee_id == employee_id).count()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn newest_first(records: &mut [Attendance]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn upsert(
        &self,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> StoreResult<Upserted> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();

        if let Some(existing) = rows
            .iter_mut()
            .find(|a| a.employee_id == employee_id && a.date == date)
        {
            existing.status = status;
            existing.updated_at = now;
            return Ok(Upserted {
                record: existing.clone(),
                created: false,
            });
        }

        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let record = Attendance {
            id: next_id,
            employee_id: employee_id.to_string(),
            date: date.to_string(),
            status,
            created_at: now,
            updated_at: now,
        };
        rows.push(record.clone());
        Ok(Upserted {
            record,
            created: true,
        })
    }

    async fn list(&self, filter: &AttendanceFilter) -> StoreResult<Vec<Attendance>> {
        let mut records: Vec<Attendance> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| filter.matches(&a.date))
            .cloned()
            .collect();
        newest_first(&mut records);
        Ok(records)
    }

    async fn list_for_employee(&self, employee_id: &str) -> StoreResult<Vec<Attendance>> {
        let mut records: Vec<Attendance> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        newest_first(&mut records);
        Ok(records)
    }

    async fn delete_for_employee(&self, employee_id: &str) -> StoreResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.employee_id != employee_id);
        Ok((before - rows.len()) as u64)
    }
}
