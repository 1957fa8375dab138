use crate::{
    model::attendance::{Attendance, MarkAttendance},
    service::AttendanceService,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Inclusive lower bound (YYYY-MM-DD); only applied together with `endDate`
    #[schema(example = "2024-01-01")]
    pub start_date: Option<String>,
    /// Inclusive upper bound (YYYY-MM-DD); only applied together with `startDate`
    #[schema(example = "2024-01-31")]
    pub end_date: Option<String>,
}

/// Upsert result; `updated` is only present when an existing mark was overwritten.
#[derive(Serialize, ToSchema)]
pub struct AttendanceResponse {
    #[serde(flatten)]
    pub record: Attendance,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub updated: bool,
}

/// Mark attendance (create or update the day's record)
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance created", body = AttendanceResponse),
        (status = 200, description = "Existing attendance updated", body = AttendanceResponse),
        (status = 400, description = "Missing field or invalid status", body = Object, example = json!({
            "message": "Status must be Present or Absent."
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    service: web::Data<AttendanceService>,
    payload: web::Json<MarkAttendance>,
) -> actix_web::Result<HttpResponse> {
    let upserted = service.upsert_attendance(payload.into_inner()).await?;

    let mut response = if upserted.created {
        HttpResponse::Created()
    } else {
        HttpResponse::Ok()
    };

    Ok(response.json(AttendanceResponse {
        updated: !upserted.created,
        record: upserted.record,
    }))
}

/// List attendance, newest date first
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records; last 30 days when no range is given", body = [Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    service: web::Data<AttendanceService>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<HttpResponse> {
    let records = service
        .list_attendance(query.start_date.as_deref(), query.end_date.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(records))
}

/// All attendance for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Business employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = [Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    service: web::Data<AttendanceService>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let employee_id = path.into_inner();
    let records = service.list_attendance_for_employee(&employee_id).await?;

    Ok(HttpResponse::Ok().json(records))
}
