use std::sync::Arc;
use tracing::{info, warn};

use super::{ServiceError, ServiceResult};
use crate::model::employee::{CreateEmployee, Employee};
use crate::repository::{AttendanceRepository, EmployeeRepository, StoreError};
use crate::utils::validation::normalize_employee;

pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    attendance: Arc<dyn AttendanceRepository>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// A taken `employee_id` is reported before any other field is looked at.
    pub async fn create_employee(&self, input: CreateEmployee) -> ServiceResult<Employee> {
        let employee_id = input.employee_id.trim();
        if !employee_id.is_empty() && self.employees.exists(employee_id).await? {
            return Err(ServiceError::Conflict(format!(
                "Employee ID \"{employee_id}\" is already taken."
            )));
        }

        let new_employee = normalize_employee(&input)?;

        match self.employees.insert(new_employee).await {
            Ok(employee) => {
                info!(employee_id = %employee.employee_id, "Employee created");
                Ok(employee)
            }
            // Lost a race with a concurrent create for the same id.
            Err(StoreError::Duplicate(detail)) => {
                warn!(detail = %detail, "Employee insert hit the unique index");
                Err(ServiceError::Conflict("Employee ID already exists.".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves the record by its store `id`, removes its attendance, then the employee.
    /// A failed cascade leaves the employee in place.
    pub async fn delete_employee(&self, id: u64) -> ServiceResult<()> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Employee not found."))?;

        let removed = self
            .attendance
            .delete_for_employee(&employee.employee_id)
            .await?;

        self.employees.delete(employee.id).await?;

        info!(
            id = employee.id,
            employee_id = %employee.employee_id,
            attendance_removed = removed,
            "Employee deleted"
        );
        Ok(())
    }

    pub async fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.employees.list().await?)
    }
}
