use crate::api::{attendance, employee, health};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Result, anyhow};

pub type RateLimitConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter that refills `requests_per_min` tokens every minute.
pub fn build_limiter(requests_per_min: u32) -> Result<RateLimitConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };

    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &RateLimitConfig) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter))
            .configure(api_routes),
    );
}

/// Endpoints relative to the API prefix.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health::health)))
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(
                    web::resource("")
                        .route(web::post().to(attendance::mark_attendance))
                        .route(web::get().to(attendance::list_attendance)),
                )
                // /attendance/employee/{employee_id}
                .service(
                    web::resource("/employee/{employee_id}")
                        .route(web::get().to(attendance::employee_attendance)),
                ),
        );
}
