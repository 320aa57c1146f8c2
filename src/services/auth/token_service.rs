//! JWT 토큰 검증 서비스 구현
//!
//! HMAC(HS256) 공유 비밀키로 서명된 베어러 토큰을 검증하고
//! `sub` / `roles` 클레임을 [`AuthenticatedUser`]로 변환합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    domain::models::auth::AuthenticatedUser,
    domain::models::token::TokenClaims,
    errors::{AppError, AppResult, ErrorContext},
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// 공유 비밀키로 서비스를 생성합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let tokens = Arc::new(TokenService::new(&JwtConfig::secret()?));
    /// ```
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// `Authorization` 헤더 값에서 베어러 토큰을 꺼냅니다.
    ///
    /// Bearer 스킴이 아니면 `None`을 반환하며, 이 경우 요청은 익명으로 처리됩니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Option<&'a str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
    }

    /// 서명과 만료 시각을 검증하고 클레임을 반환합니다.
    ///
    /// # 에러
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 형식 오류, 만료 등 모든 검증 실패
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// 토큰을 검증하고 역할 접두사가 붙은 주체 정보를 만듭니다.
    pub fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.verify_token(token)?;
        Ok(AuthenticatedUser::from_claims(claims.sub, &claims.roles))
    }

    /// 같은 클레임 구조의 토큰을 발급합니다. 로컬 개발과 테스트에서 사용합니다.
    pub fn issue_token(&self, subject: &str, roles: &[&str], ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            iat: Some(now.timestamp()),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .with_context(|| format!("JWT 토큰 생성 실패 ({})", subject))
    }
}
