use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /categories`, `PUT /categories/{id}` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "카테고리명은 1-100자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(length(max = 500, message = "설명은 500자를 넘을 수 없습니다"))]
    #[serde(default)]
    pub description: Option<String>,
}
