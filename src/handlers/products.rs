//! # Product HTTP Handlers
//!
//! 상품 조회/변경 엔드포인트입니다. 조회는 인증 없이 허용되고,
//! 생성/교체/삭제는 `ADMIN` 역할이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/products` | 전체 목록 | 200 OK |
//! | `GET` | `/products/{id}` | 단건 조회 (캐시 우선) | 200 OK |
//! | `POST` | `/products/bulk` | 식별자 목록 일괄 조회 | 200 OK |
//! | `GET` | `/products/category/{id}` | 카테고리별 목록 | 200 OK |
//! | `POST` | `/products` | 생성 | 201 Created |
//! | `PUT` | `/products/{id}` | 교체 | 200 OK |
//! | `DELETE` | `/products/{id}` | 삭제 | 204 No Content |
//!
//! 생성/교체 요청은 역할 검사를 먼저 수행한 뒤 본문을 읽습니다.
//!
//! 조회 응답의 `category`에는 식별자만 담깁니다. 카테고리 전체 정보가 필요하면
//! `GET /categories/{id}`를 사용합니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use uuid::Uuid;
use validator::Validate;
use crate::domain::dto::ProductRequest;
use crate::domain::entities::Product;
use crate::domain::mapping::{product_from_request, product_to_dto, products_to_dtos};
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::AppError;
use crate::services::ProductService;

#[get("")]
pub async fn list_products(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let products = service.list_products().await?;
    Ok(HttpResponse::Ok().json(products_to_dtos(&products)))
}

/// 식별자 목록으로 상품을 일괄 조회합니다.
///
/// # 요청 본문
///
/// ```json
/// ["0b7c...", "5f1e..."]
/// ```
///
/// 하나라도 없으면 누락된 식별자를 담은 404를 반환합니다.
#[post("/bulk")]
pub async fn get_products_by_ids(
    service: web::Data<ProductService>,
    ids: web::Json<Vec<Uuid>>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_products_by_ids(&ids).await?;
    Ok(HttpResponse::Ok().json(products_to_dtos(&products)))
}

#[get("/category/{category_id}")]
pub async fn list_products_by_category(
    service: web::Data<ProductService>,
    category_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let products = service.list_products_by_category(category_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(products_to_dtos(&products)))
}

#[get("/{product_id}")]
pub async fn get_product(
    service: web::Data<ProductService>,
    product_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let product = service.get_product(product_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product_to_dto(Some(&product), None)))
}

/// 상품 생성 핸들러
///
/// `category.id`가 가리키는 카테고리가 존재해야 하며,
/// 응답에는 조회된 카테고리 전체 정보가 포함됩니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/products \
///   -H "Authorization: Bearer {admin_token}" \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Hammer","price":12.5,"category":{"id":"..."}}'
/// ```
#[post("")]
pub async fn create_product(
    user: AuthenticatedUser,
    service: web::Data<ProductService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::admin())?;
    let product = validated_product(&body)?;

    let (saved, category) = service.create_product(product).await?;

    Ok(HttpResponse::Created().json(product_to_dto(Some(&saved), Some(&category))))
}

/// 상품 교체 핸들러
///
/// 요청 본문의 `id`는 무시되고 경로의 식별자가 사용됩니다.
#[put("/{product_id}")]
pub async fn replace_product(
    user: AuthenticatedUser,
    service: web::Data<ProductService>,
    product_id: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::admin())?;
    let product = validated_product(&body)?;

    let updated = service.replace_product(product_id.into_inner(), product).await?;

    Ok(HttpResponse::Ok().json(product_to_dto(Some(&updated), None)))
}

#[delete("/{product_id}")]
pub async fn delete_product(
    user: AuthenticatedUser,
    service: web::Data<ProductService>,
    product_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    user.require(&RequiredRole::admin())?;
    let id = product_id.into_inner();

    service.delete_product(id).await?;

    Ok(HttpResponse::NoContent()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Product with ID: {} successfully deleted.", id)))
}

/// 요청 본문을 역직렬화하고 검증합니다.
///
/// 역할 검사를 통과한 요청에서만 호출됩니다.
fn validated_product(body: &[u8]) -> Result<Product, AppError> {
    let request: ProductRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Json deserialize error: {}", e)))?;

    request.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    product_from_request(Some(request))
        .ok_or_else(|| AppError::ValidationError("Product request must not be empty".to_string()))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;
    use crate::domain::dto::ProductDto;
    use crate::middlewares::AuthMiddleware;
    use crate::test_support::Fixture;

    macro_rules! app {
        ($fx:expr) => {
            test::init_service(
                App::new()
                    .wrap(AuthMiddleware::new($fx.tokens.clone()))
                    .configure(crate::routes::configure_app($fx.state())),
            )
            .await
        };
    }

    fn hammer(category_id: Uuid) -> Value {
        json!({
            "name": "Hammer",
            "description": "claw hammer",
            "price": 12.5,
            "category": { "id": category_id },
            "isPrime": true
        })
    }

    #[actix_web::test]
    async fn test_admin_can_create_product() {
        let fx = Fixture::new();
        let (category, _) = fx.seed_product("Widget");
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .set_json(hammer(category.id()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "Hammer");
        assert_eq!(body["isPrime"], true);
        assert_eq!(body["state"], "ACTIVE");
        assert_eq!(body["category"]["name"], "Tools");
        assert_eq!(fx.products.find_by_id_count(), 0);
        assert_eq!(fx.cache.put_count(), 0);
    }

    #[actix_web::test]
    async fn test_user_role_cannot_create_product() {
        let fx = Fixture::new();
        let (category, _) = fx.seed_product("Widget");
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["USER"])))
            .set_json(hammer(category.id()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_user_role_is_forbidden_before_body_is_read() {
        let fx = Fixture::new();
        let (_, product) = fx.seed_product("Widget");
        let app = app!(fx);

        let create = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["USER"])))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, create).await.status(), StatusCode::FORBIDDEN);

        let replace = test::TestRequest::put()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["USER"])))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, replace).await.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_admin_malformed_body_is_bad_request() {
        let fx = Fixture::new();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_anonymous_create_is_unauthorized() {
        let fx = Fixture::new();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(hammer(Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_with_unknown_category_is_not_found() {
        let fx = Fixture::new();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .set_json(hammer(Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_with_negative_price_is_bad_request() {
        let fx = Fixture::new();
        let (category, _) = fx.seed_product("Widget");
        let app = app!(fx);

        let mut body = hammer(category.id());
        body["price"] = json!(-1);
        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_products_without_header() {
        let fx = Fixture::new();
        let (category, product) = fx.seed_product("Widget");
        let app = app!(fx);

        let req = test::TestRequest::get().uri("/products").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Vec<ProductDto> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, product.id());
        assert_eq!(body[0].category.as_ref().and_then(|c| c.id), Some(category.id()));
    }

    #[actix_web::test]
    async fn test_bad_token_is_unauthorized_even_on_reads() {
        let fx = Fixture::new();
        let app = app!(fx);

        let req = test::TestRequest::get()
            .uri("/products")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_product_populates_cache() {
        let fx = Fixture::new();
        let (_, product) = fx.seed_product("Widget");
        let app = app!(fx);

        let uri = format!("/products/{}", product.id());
        let first = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        let second = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(fx.products.find_by_id_count(), 1);
        assert_eq!(fx.cache.entry(product.id()), Some(product));
    }

    #[actix_web::test]
    async fn test_get_missing_product_is_not_found() {
        let fx = Fixture::new();
        let app = app!(fx);
        let id = Uuid::new_v4();

        let req = test::TestRequest::get().uri(&format!("/products/{}", id)).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], format!("Not found: Product with ID: {} not available.", id));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let fx = Fixture::new();
        let app = app!(fx);

        let req = test::TestRequest::get().uri("/products/not-a-uuid").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_bulk_lookup_reports_missing_ids() {
        let fx = Fixture::new();
        let (_, product) = fx.seed_product("Widget");
        let missing = Uuid::new_v4();
        let app = app!(fx);

        let ok = test::TestRequest::post()
            .uri("/products/bulk")
            .set_json(json!([product.id()]))
            .to_request();
        let res = test::call_service(&app, ok).await;
        assert_eq!(res.status(), StatusCode::OK);

        let partial = test::TestRequest::post()
            .uri("/products/bulk")
            .set_json(json!([product.id(), missing]))
            .to_request();
        let res = test::call_service(&app, partial).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], format!("Not found: Products not found for IDs: [{}]", missing));
    }

    #[actix_web::test]
    async fn test_list_by_category() {
        let fx = Fixture::new();
        let (category, _) = fx.seed_product("Widget");
        let app = app!(fx);

        let req = test::TestRequest::get()
            .uri(&format!("/products/category/{}", category.id()))
            .to_request();
        let body: Vec<ProductDto> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 1);
    }

    #[actix_web::test]
    async fn test_replace_forces_path_id() {
        let fx = Fixture::new();
        let (category, product) = fx.seed_product("Widget");
        let app = app!(fx);

        let mut body = hammer(category.id());
        body["id"] = json!(Uuid::new_v4());
        let req = test::TestRequest::put()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let dto: ProductDto = test::read_body_json(res).await;
        assert_eq!(dto.id, product.id());
        assert_eq!(dto.name, "Hammer");
        assert_eq!(fx.cache.entry(product.id()).map(|p| p.name), Some("Hammer".to_string()));
    }

    #[actix_web::test]
    async fn test_user_role_cannot_replace_product() {
        let fx = Fixture::new();
        let (category, product) = fx.seed_product("Widget");
        let app = app!(fx);

        let req = test::TestRequest::put()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["USER"])))
            .set_json(hammer(category.id()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(fx.products.get(product.id()).map(|p| p.name), Some("Widget".to_string()));
        assert_eq!(fx.products.save_count(), 0);
        assert_eq!(fx.cache.put_count(), 0);
    }

    #[actix_web::test]
    async fn test_user_role_cannot_delete_product() {
        let fx = Fixture::new();
        let (_, product) = fx.seed_product("Widget");
        fx.cache.seed(product.clone());
        let app = app!(fx);

        let req = test::TestRequest::delete()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["USER"])))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(fx.products.get(product.id()).is_some());
        assert!(fx.cache.entry(product.id()).is_some());
        assert_eq!(fx.products.delete_count(), 0);
    }

    #[actix_web::test]
    async fn test_delete_product() {
        let fx = Fixture::new();
        let (_, product) = fx.seed_product("Widget");
        fx.cache.seed(product.clone());
        let app = app!(fx);

        let req = test::TestRequest::delete()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(fx.products.get(product.id()).is_none());
        assert!(fx.cache.entry(product.id()).is_none());

        let again = test::TestRequest::delete()
            .uri(&format!("/products/{}", product.id()))
            .insert_header(("Authorization", fx.bearer(&["ADMIN"])))
            .to_request();
        let res = test::call_service(&app, again).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
