//! # Category HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/categories` | 필요 | 201 Created |
//! | `GET` | `/categories` | - | 200 OK |
//! | `GET` | `/categories/{id}` | - | 200 OK |
//! | `PUT` | `/categories/{id}` | 필요 | 202 Accepted |
//! | `DELETE` | `/categories/{id}` | 필요 | 202 Accepted |
//!
//! 변경 작업은 역할과 무관하게 인증된 주체라면 허용됩니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use uuid::Uuid;
use validator::Validate;
use crate::domain::dto::CategoryRequest;
use crate::domain::entities::Category;
use crate::domain::mapping::{categories_to_dtos, category_from_request, category_to_dto};
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::AppError;
use crate::services::CategoryService;

#[post("")]
pub async fn create_category(
    user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::Authenticated)?;
    let category = validated_category(payload)?;

    let created = service.create_category(category).await?;

    Ok(HttpResponse::Created().json(category_to_dto(Some(&created))))
}

#[get("")]
pub async fn list_categories(
    service: web::Data<CategoryService>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories_to_dtos(&categories)))
}

#[get("/{category_id}")]
pub async fn get_category(
    service: web::Data<CategoryService>,
    category_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let category = service.get_category(category_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category_to_dto(Some(&category))))
}

/// 카테고리 교체 핸들러
///
/// 식별자와 생성 시각은 저장된 값을 유지하고 이름/설명만 바뀝니다.
#[put("/{category_id}")]
pub async fn update_category(
    user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    category_id: web::Path<Uuid>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::Authenticated)?;
    let category = validated_category(payload)?;

    let updated = service.update_category(category_id.into_inner(), category).await?;

    Ok(HttpResponse::Accepted().json(category_to_dto(Some(&updated))))
}

#[delete("/{category_id}")]
pub async fn delete_category(
    user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    category_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::Authenticated)?;
    let id = category_id.into_inner();

    service.delete_category(id).await?;

    Ok(HttpResponse::Accepted()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Category with ID: {} has been deleted.", id)))
}

fn validated_category(payload: web::Json<CategoryRequest>) -> Result<Category, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    category_from_request(Some(payload.into_inner()))
        .ok_or_else(|| AppError::ValidationError("Category request must not be empty".to_string()))
}
