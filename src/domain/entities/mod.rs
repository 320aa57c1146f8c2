//! # Domain Entities
//!
//! MongoDB에 저장되는 영속 엔티티들입니다.
//! 공통 필드(식별자, 생성/수정 시각, 상태)는 [`base_entity::EntityMeta`]에 모아
//! 각 엔티티에 값으로 포함합니다. 엔티티 간 참조는 식별자만 저장하는 단방향 참조입니다.
//!
//! ```text
//! Product ──category_id──▶ Category
//! ```

pub mod base_entity;
pub mod uuid_format;
pub mod products;
pub mod categories;

pub use base_entity::*;
pub use products::*;
pub use categories::*;
