use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 카테고리 DTO
///
/// 카테고리 응답 본문이자, 상품 요청/응답 안에 중첩되는 카테고리 참조입니다.
/// 상품 요청에서는 `id`만 의미가 있으며, 식별자만 알려진 경우 나머지 필드는 생략됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryDto {
    /// 식별자만 담은 참조
    pub fn reference(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
