use crate::api::attendance::{AttendanceQuery, AttendanceResponse};
use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Employee profiles and daily attendance marks for a small HR front-end.

### Key Features
- **Employee Management**
  - Create, list and delete employees (deleting an employee removes its attendance)
- **Attendance Management**
  - Mark a day as Present or Absent; marking the same day again updates it
  - List attendance by date range (last 30 days by default) or per employee

### Response Format
- JSON with camelCase field names
- Every error is `{"message": "..."}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceQuery,
            AttendanceResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
