use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{AttendanceRepository, EmployeeRepository, StoreResult};
use crate::model::attendance::{Attendance, AttendanceFilter, AttendanceStatus, Upserted};
use crate::model::employee::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str = "id, employee_id, full_name, email, department, created_at";
const ATTENDANCE_COLUMNS: &str = "id, employee_id, `date`, status, created_at, updated_at";

#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .execute(&self.pool)
        .await?;

        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(result.last_insert_id())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn exists(&self, employee_id: &str) -> StoreResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT 1 FROM employees WHERE employee_id = ? LIMIT 1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at DESC, id DESC");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn delete(&self, id: u64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[derive(Clone)]
pub struct MySqlAttendanceRepository {
    pool: MySqlPool,
}

impl MySqlAttendanceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for MySqlAttendanceRepository {
    async fn upsert(
        &self,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> StoreResult<Upserted> {
        // The unique (employee_id, date) index turns this into a single atomic check-and-write.
        let result = sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, `date`, status)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                status = VALUES(status),
                updated_at = CURRENT_TIMESTAMP(6)
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .bind(status.as_ref())
        .execute(&self.pool)
        .await?;

        // MySQL reports 1 affected row for a fresh insert and 2 when an existing row changed.
        let created = result.rows_affected() == 1;

        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? AND `date` = ?"
        );
        let record = sqlx::query_as::<_, Attendance>(&sql)
            .bind(employee_id)
            .bind(date)
            .fetch_one(&self.pool)
            .await?;

        Ok(Upserted { record, created })
    }

    async fn list(&self, filter: &AttendanceFilter) -> StoreResult<Vec<Attendance>> {
        // ---------- build WHERE clause from the filter ----------
        let (where_clause, bindings): (&str, Vec<&str>) = match filter {
            AttendanceFilter::All => ("", Vec::new()),
            AttendanceFilter::OnOrAfter(start) => ("WHERE `date` >= ?", vec![start.as_str()]),
            AttendanceFilter::Between(start, end) => (
                "WHERE `date` >= ? AND `date` <= ?",
                vec![start.as_str(), end.as_str()],
            ),
        };

        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance {where_clause} ORDER BY `date` DESC, id DESC"
        );
        debug!(sql = %sql, bindings = ?bindings, "Fetching attendance");

        let mut query = sqlx::query_as::<_, Attendance>(&sql);
        for b in bindings {
            query = query.bind(b);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn list_for_employee(&self, employee_id: &str) -> StoreResult<Vec<Attendance>> {
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? ORDER BY `date` DESC, id DESC"
        );
        let records = sqlx::query_as::<_, Attendance>(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn delete_for_employee(&self, employee_id: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
