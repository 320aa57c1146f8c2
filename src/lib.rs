//! 상품 카탈로그 서비스 백엔드
//!
//! 상품과 카테고리를 관리하는 REST 마이크로서비스입니다.
//! MongoDB에 영구 저장하고, 상품 단건 조회는 Redis 해시를 통한
//! 캐시 우선(cache-aside) 방식으로 처리합니다.
//!
//! # Features
//!
//! - **상품 관리**: 조회, 일괄 조회, 카테고리별 조회, 생성/교체/삭제 (`ADMIN` 전용)
//! - **카테고리 관리**: 인증된 사용자의 생성/수정/삭제
//! - **JWT 인증**: HS256 베어러 토큰의 `sub` / `roles` 클레임 검증
//! - **MongoDB**: 상품/카테고리 영구 저장
//! - **Redis**: `"<namespace>~<productId>"` 해시 기반 상품 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 권한 검사, DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 캐시 우선 조회, 존재 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 뒤에 MongoDB 구현)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use product_service_backend::services::ProductService;
//!
//! let service = ProductService::new(product_repo, category_repo, cache);
//! let product = service.get_product(id).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
