use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

mod api;
mod config;
mod db;
mod docs;
mod model;
mod repository;
mod routes;
mod service;
#[cfg(test)]
mod test_support;
mod utils;

use config::Config;
use db::init_db;
use repository::{
    AttendanceRepository, EmployeeRepository, MySqlAttendanceRepository, MySqlEmployeeRepository,
};
use service::{AttendanceService, EmployeeService};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config).await?;

    let employees: Arc<dyn EmployeeRepository> =
        Arc::new(MySqlEmployeeRepository::new(pool.clone()));
    let attendance: Arc<dyn AttendanceRepository> = Arc::new(MySqlAttendanceRepository::new(pool));

    let employee_service = Data::new(EmployeeService::new(
        employees.clone(),
        attendance.clone(),
    ));
    let attendance_service = Data::new(AttendanceService::new(
        employees,
        attendance,
        config.attendance_window_days,
    ));

    let limiter = routes::build_limiter(config.rate_api_per_min)?;
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so the UI's JS/CSS assets resolve
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(employee_service.clone())
            .app_data(attendance_service.clone())
            .app_data(api::error::json_config())
            .app_data(api::error::query_config())
            .app_data(api::error::path_config())
            .configure(|cfg| routes::configure(cfg, &api_prefix, &limiter))
    })
    .bind(&config.server_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
