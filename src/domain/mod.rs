//! # Domain Layer Module
//!
//! 상품 카탈로그의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 / 캐시 스냅샷 (Product, Category)
//! ├── dto       - HTTP 요청/응답 객체
//! ├── models    - 인증 주체, JWT 클레임
//! └── mapping   - entities ↔ dto 변환 함수
//! ```
//!
//! 엔티티는 공통 메타데이터를 상속이 아닌 포함(composition)으로 가지며,
//! 상품 → 카테고리 관계는 식별자 하나로 표현되는 단방향 참조입니다.

pub mod entities;
pub mod dto;
pub mod models;
pub mod mapping;
