//! 상품 생성/교체 요청 DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};
use crate::domain::dto::categories::CategoryDto;

/// `POST /products`, `PUT /products/{id}` 요청 본문
///
/// `id`는 교체 요청에서 무시되며 항상 경로의 식별자가 사용됩니다.
/// `category`에는 이미 존재하는 카테고리의 `id`가 들어 있어야 하고,
/// 함께 전달된 이름/설명은 카테고리를 수정하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "상품명은 1-255자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(length(max = 2000, message = "설명은 2000자를 넘을 수 없습니다"))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(url(message = "이미지 주소는 올바른 URL이어야 합니다"))]
    #[serde(default)]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(default)]
    pub category: Option<CategoryDto>,

    #[serde(default)]
    pub is_prime: bool,
}

impl ProductRequest {
    /// 요청이 참조하는 카테고리 식별자
    pub fn category_id(&self) -> Option<Uuid> {
        self.category.as_ref().and_then(|c| c.id)
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price")
            .with_message("가격은 0 이상이어야 합니다".into()));
    }
    Ok(())
}
