//! Category Entity Implementation
//!
//! `categories` 컬렉션에 저장되는 카테고리 엔티티입니다.
//! 상품 목록에 대한 역참조는 두지 않으며, 역방향 조회는
//! `ProductRepository::find_by_category_id`로 수행합니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::base_entity::EntityMeta;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            meta: EntityMeta::new(),
            name: name.into(),
            description,
        }
    }

    pub fn id(&self) -> Uuid {
        self.meta.id
    }
}
