use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::JwtConfig;
use crate::domain::models::auth::authentication_request::RequiredRole;
use crate::errors::AppError;

/// 베어러 토큰에서 추출된 주체(principal) 정보
///
/// 인증 미들웨어가 토큰 검증에 성공하면 Request Extensions에 저장하고,
/// 핸들러는 이 타입을 인자로 받아 인증을 강제합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 `sub` 클레임
    pub subject: String,

    /// `ROLE_` 접두사가 붙은 권한 목록
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    /// `roles` 클레임 값에 역할 접두사를 붙여 주체를 만듭니다.
    pub fn from_claims(subject: String, roles: &[String]) -> Self {
        let authorities = roles
            .iter()
            .map(|role| format!("{}{}", JwtConfig::ROLE_PREFIX, role))
            .collect();

        Self { subject, authorities }
    }

    /// 특정 역할을 보유하고 있는지 확인 (`"ADMIN"`처럼 접두사 없이 전달)
    pub fn has_role(&self, role: &str) -> bool {
        let authority = format!("{}{}", JwtConfig::ROLE_PREFIX, role);
        self.authorities.contains(&authority)
    }

    /// 요구 역할을 충족하지 못하면 403 에러를 반환합니다.
    pub fn require(&self, required: &RequiredRole) -> Result<(), AppError> {
        if required.is_satisfied(self) {
            return Ok(());
        }

        log::warn!(
            "권한 부족: 주체 {} ({:?}), 필요 권한: {:?}",
            self.subject, self.authorities, required
        );
        Err(AppError::AuthorizationError(format!(
            "Access denied for {}",
            self.subject
        )))
    }
}

/// 인증되지 않은 요청이면 401 응답으로 거절합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Full authentication is required to access this resource".to_string(),
            )
            .into())),
        }
    }
}
