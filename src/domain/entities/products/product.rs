//! Product Entity Implementation
//!
//! `products` 컬렉션에 저장되는 상품 엔티티입니다.
//! 카테고리는 객체가 아닌 식별자(`category_id`)로만 참조하며,
//! 카테고리 정보가 필요하면 `CategoryRepository`를 통해 명시적으로 조회합니다.
//! 캐시에는 이 구조체의 JSON 스냅샷이 그대로 저장됩니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::base_entity::EntityMeta;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: Decimal,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::domain::entities::uuid_format::option"
    )]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub is_prime: bool,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            meta: EntityMeta::new(),
            name: name.into(),
            description: None,
            image_url: None,
            price,
            category_id: None,
            is_prime: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.meta.id
    }
}
