use actix_web::{HttpResponse, Responder, get, patch, post, put, web};

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{error_response, missing_response, run_blocking};
use crate::services::categories::{
    create_category as create_category_service, get_category as get_category_service,
    list_categories as list_categories_service, patch_category as patch_category_service,
    update_category as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || list_categories_service(&repo)).await {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(err),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let category_id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let repo = repo.get_ref().clone();

    match run_blocking(move || get_category_service(&category_id, &repo)).await {
        Ok(Some(category)) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Ok(None) => missing_response(&server_config),
        Err(err) => error_response(err),
    }
}

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<CategoryDto>,
) -> impl Responder {
    let category = Category::from(body);
    let repo = repo.get_ref().clone();

    match run_blocking(move || create_category_service(category, &repo)).await {
        Ok(_) => HttpResponse::Created().finish(),
        Err(err) => error_response(err),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<CategoryDto>,
) -> impl Responder {
    let category_id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let category = Category::from(body);
    let repo = repo.get_ref().clone();

    match run_blocking(move || update_category_service(category_id, category, &repo)).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[patch("/categories/{category_id}")]
pub async fn patch_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(body): web::Json<CategoryDto>,
) -> impl Responder {
    let category_id = match CategoryId::new(category_id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e.into()),
    };
    let patch = Category::from(body);
    let dirty_check = server_config.patch_dirty_check;
    let repo = repo.get_ref().clone();

    match run_blocking(move || patch_category_service(&category_id, patch, dirty_check, &repo))
        .await
    {
        Ok(Some(_)) => HttpResponse::Ok().finish(),
        Ok(None) => missing_response(&server_config),
        Err(err) => error_response(err),
    }
}
