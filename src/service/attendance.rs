use chrono::{Days, NaiveDate, Utc};
use std::sync::Arc;
use tracing::debug;

use super::{ServiceError, ServiceResult};
use crate::model::attendance::{
    Attendance, AttendanceFilter, AttendanceStatus, MarkAttendance, Upserted,
};
use crate::repository::{AttendanceRepository, EmployeeRepository};
use crate::utils::validation::is_date_shaped;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct AttendanceService {
    employees: Arc<dyn EmployeeRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    window_days: u64,
}

impl AttendanceService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        window_days: u64,
    ) -> Self {
        Self {
            employees,
            attendance,
            window_days,
        }
    }

    /// Creates the day's mark for the employee, or overwrites its status if one exists.
    pub async fn upsert_attendance(&self, input: MarkAttendance) -> ServiceResult<Upserted> {
        let employee_id = input.employee_id.trim();
        let date = input.date.trim();
        let status = input.status.trim();

        if employee_id.is_empty() || date.is_empty() || status.is_empty() {
            return Err(ServiceError::validation("All fields are required."));
        }

        let status: AttendanceStatus = status
            .parse()
            .map_err(|_| ServiceError::validation("Status must be Present or Absent."))?;

        if !self.employees.exists(employee_id).await? {
            return Err(ServiceError::not_found("Employee not found."));
        }

        if !is_date_shaped(date) {
            return Err(ServiceError::validation("Date must be in YYYY-MM-DD format."));
        }

        let upserted = self.attendance.upsert(employee_id, date, status).await?;
        debug!(
            employee_id,
            date,
            status = %status,
            created = upserted.created,
            "Attendance marked"
        );
        Ok(upserted)
    }

    pub async fn list_attendance(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ServiceResult<Vec<Attendance>> {
        let today = Utc::now().date_naive();
        let filter = resolve_filter(start_date, end_date, today, self.window_days);
        debug!(filter = ?filter, "Listing attendance");

        Ok(self.attendance.list(&filter).await?)
    }

    /// No existence check: an unknown id simply has no marks.
    pub async fn list_attendance_for_employee(
        &self,
        employee_id: &str,
    ) -> ServiceResult<Vec<Attendance>> {
        Ok(self.attendance.list_for_employee(employee_id.trim()).await?)
    }
}

/// Neither bound: trailing window ending today. Both bounds: inclusive range.
/// Exactly one bound: no filtering at all.
pub fn resolve_filter(
    start_date: Option<&str>,
    end_date: Option<&str>,
    today: NaiveDate,
    window_days: u64,
) -> AttendanceFilter {
    let start = start_date.map(str::trim).filter(|s| !s.is_empty());
    let end = end_date.map(str::trim).filter(|s| !s.is_empty());

    match (start, end) {
        (None, None) => {
            let since = today
                .checked_sub_days(Days::new(window_days))
                .unwrap_or(NaiveDate::MIN);
            AttendanceFilter::OnOrAfter(since.format(DATE_FORMAT).to_string())
        }
        (Some(start), Some(end)) => AttendanceFilter::Between(start.to_string(), end.to_string()),
        _ => AttendanceFilter::All,
    }
}
