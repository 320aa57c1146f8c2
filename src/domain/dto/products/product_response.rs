use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::dto::categories::CategoryDto;
use crate::domain::entities::base_entity::EntityState;

/// 상품 응답 DTO
///
/// 가격은 JSON 숫자로 직렬화됩니다. 카테고리는 엔티티와 공유되지 않는
/// 별도의 [`CategoryDto`] 사본입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
    pub is_prime: bool,
    pub state: EntityState,
}
