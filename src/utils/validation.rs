use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::employee::{CreateEmployee, NewEmployee};
use crate::service::{ServiceError, ServiceResult};

pub const EMPLOYEE_ID_MAX_LEN: usize = 50;
pub const FULL_NAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 254;
pub const DEPARTMENT_MAX_LEN: usize = 100;

/// local@domain.tld, no whitespace, exactly one `@`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Shape check only; the date is never parsed as a calendar day.
pub fn is_date_shaped(value: &str) -> bool {
    DATE_RE.is_match(value)
}

fn required<'a>(value: &'a str, label: &str) -> ServiceResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::validation(format!("{label} is required.")));
    }
    Ok(value)
}

fn max_len(value: &str, label: &str, max: usize) -> ServiceResult<()> {
    if value.chars().count() > max {
        return Err(ServiceError::validation(format!(
            "{label} must be at most {max} characters."
        )));
    }
    Ok(())
}

/// Trims every field, lower-cases the email and reports the first failing field.
pub fn normalize_employee(input: &CreateEmployee) -> ServiceResult<NewEmployee> {
    let employee_id = required(&input.employee_id, "Employee ID")?;
    max_len(employee_id, "Employee ID", EMPLOYEE_ID_MAX_LEN)?;

    let full_name = required(&input.full_name, "Full name")?;
    max_len(full_name, "Full name", FULL_NAME_MAX_LEN)?;

    let email = required(&input.email, "Email address")?.to_lowercase();
    if !is_valid_email(&email) {
        return Err(ServiceError::validation(
            "Please provide a valid email address.",
        ));
    }
    max_len(&email, "Email address", EMAIL_MAX_LEN)?;

    let department = required(&input.department, "Department")?;
    max_len(department, "Department", DEPARTMENT_MAX_LEN)?;

    Ok(NewEmployee {
        employee_id: employee_id.to_string(),
        full_name: full_name.to_string(),
        email,
        department: department.to_string(),
    })
}
