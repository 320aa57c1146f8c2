//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 협력 객체(리포지토리, 캐시)를
//! 생성자 인자로 받으며 전역 레지스트리를 사용하지 않습니다.
//!
//! - [`products`] - 캐시 어사이드 상품 조회/교체/삭제, 벌크 조회
//! - [`categories`] - 카테고리 CRUD
//! - [`auth`] - 베어러 토큰 검증

pub mod products;
pub mod categories;
pub mod auth;

pub use products::ProductService;
pub use categories::CategoryService;
pub use auth::TokenService;
