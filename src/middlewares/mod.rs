//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사(Cross-cutting concerns)를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 검증
//! - 검증된 주체 정보를 request extension에 저장
//! - 헤더가 없는 요청은 익명으로 통과시키고, 잘못된 토큰은 401로 차단
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::AuthMiddleware;
//!
//! let tokens = Arc::new(TokenService::new(&JwtConfig::secret()?));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(AuthMiddleware::new(tokens.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
