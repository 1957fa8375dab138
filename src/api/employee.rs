use crate::{model::employee::CreateEmployee, service::EmployeeService};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::model::employee::Employee),
        (status = 400, description = "Invalid field", body = Object, example = json!({
            "message": "Please provide a valid email address."
        })),
        (status = 409, description = "Employee ID already taken", body = Object, example = json!({
            "message": "Employee ID \"EMP-001\" is already taken."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<HttpResponse> {
    let employee = service.create_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees, newest first
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> actix_web::Result<HttpResponse> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee and all of its attendance
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Store-assigned record id (the `id` field, not `employeeId`)")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted successfully."
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> actix_web::Result<HttpResponse> {
    service.delete_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully."
    })))
}
