//! JWT 클레임 구조체
//!
//! HMAC(HS256)으로 서명된 베어러 토큰의 페이로드입니다.
//! `sub`, `roles`, `exp`는 필수이며 하나라도 없으면 검증에 실패합니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 주체 식별자
    pub sub: String,
    /// 접두사 없는 역할 목록 (`["ADMIN"]`)
    pub roles: Vec<String>,
    /// 발급 시각. 발급자에 따라 생략될 수 있습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    pub exp: i64,
}
