//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Storefront, Admin Console)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 베어러 토큰 검증              ← Filter
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 검증, 권한, DTO 변환       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 캐시 우선 조회, 존재 검사            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / ProductCache                  ← Gateway Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<T>`로 주입받습니다 (`main.rs`에서 한 번 생성).
//! - 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//!   인자로 받아 401을, `require`로 역할을 검사해 403을 반환합니다.
//! - 요청 본문은 `validator`로 검증한 뒤 매핑 함수로 엔티티로 바꿉니다.
//! - 모든 에러는 `AppError`로 반환되어 `{"error": "..."}` 형식의 JSON 응답이 됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_product(
//!     user: AuthenticatedUser,
//!     service: web::Data<ProductService>,
//!     payload: web::Json<ProductRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     user.require(&RequiredRole::admin())?;
//!     // ...
//! }
//! ```

pub mod products;
pub mod categories;
