use actix_web::{HttpResponse, web};

use crate::models::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod vendors;

/// Mount every catalog endpoint under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(categories::list_categories)
            .service(categories::create_category)
            .service(categories::get_category)
            .service(categories::update_category)
            .service(categories::patch_category)
            .service(vendors::list_vendors)
            .service(vendors::create_vendor)
            .service(vendors::get_vendor)
            .service(vendors::update_vendor)
            .service(vendors::patch_vendor),
    );
}

/// Run a synchronous service call on the blocking thread pool.
pub async fn run_blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.unwrap_or_else(|e| {
        log::error!("Blocking task failed: {e}");
        Err(ServiceError::Internal)
    })
}

pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::TypeConstraint(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

/// Response for an id with no stored record.
pub fn missing_response(config: &ServerConfig) -> HttpResponse {
    if config.missing_as_not_found {
        HttpResponse::NotFound().finish()
    } else {
        HttpResponse::Ok().finish()
    }
}
