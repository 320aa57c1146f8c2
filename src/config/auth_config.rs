//! 인증 관련 설정 관리 모듈
//!
//! 베어러 토큰 검증에 필요한 JWT 설정과 역할 접두사 상수를 제공합니다.

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

/// JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 권한(authority) 문자열에 붙는 역할 접두사. `ADMIN` → `ROLE_ADMIN`
    pub const ROLE_PREFIX: &'static str = "ROLE_";

    /// HMAC 서명 검증에 사용하는 공유 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - production 환경에서 `JWT_SECRET`이 설정되지 않은 경우
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for_env(&Environment::current())
    }

    pub fn secret_for_env(environment: &Environment) -> Result<String, AppError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(secret),
            _ if environment.is_production() => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok("your-secret-key".to_string())
            }
        }
    }
}
