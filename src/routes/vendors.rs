use actix_web::{HttpResponse, Responder, get, patch, post, put, web};

use crate::domain::types::VendorId;
use crate::domain::vendor::Vendor;
use crate::dto::vendors::VendorDto;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{error_response, missing_response, run_blocking};
use crate::services::vendors::{
    create_vendor as create_vendor_service, get_vendor as get_vendor_service,
    list_vendors as list_vendors_service, patch_vendor as patch_vendor_service,
    update_vendor as update_vendor_service,
};

#[get("/vendors")]
pub async fn list_vendors(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || list_vendors_service(&repo)).await {
        Ok(vendors) => HttpResponse::Ok().json(
            vendors
                .into_iter()
                .map(VendorDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err),
    }
}

#[get("/vendors/{vendor_id}")]
pub async fn get_vendor(
    vendor_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let vendor_id = match VendorId::new(vendor_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let repo = repo.get_ref().clone();

    match run_blocking(move || get_vendor_service(&vendor_id, &repo)).await {
        Ok(Some(vendor)) => HttpResponse::Ok().json(VendorDto::from(vendor)),
        Ok(None) => missing_response(&server_config),
        Err(err) => error_response(err),
    }
}

#[post("/vendors")]
pub async fn create_vendor(
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<VendorDto>,
) -> impl Responder {
    let vendor = Vendor::from(body);
    let repo = repo.get_ref().clone();

    match run_blocking(move || create_vendor_service(vendor, &repo)).await {
        Ok(_) => HttpResponse::Created().finish(),
        Err(err) => error_response(err),
    }
}

#[put("/vendors/{vendor_id}")]
pub async fn update_vendor(
    vendor_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<VendorDto>,
) -> impl Responder {
    let vendor_id = match VendorId::new(vendor_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let vendor = Vendor::from(body);
    let repo = repo.get_ref().clone();

    match run_blocking(move || update_vendor_service(vendor_id, vendor, &repo)).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[patch("/vendors/{vendor_id}")]
pub async fn patch_vendor(
    vendor_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(body): web::Json<VendorDto>,
) -> impl Responder {
    let vendor_id = match VendorId::new(vendor_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let patch = Vendor::from(body);
    let dirty_check = server_config.patch_dirty_check;
    let repo = repo.get_ref().clone();

    match run_blocking(move || patch_vendor_service(&vendor_id, patch, dirty_check, &repo))
        .await
    {
        Ok(Some(_)) => HttpResponse::Ok().finish(),
        Ok(None) => missing_response(&server_config),
        Err(err) => error_response(err),
    }
}
