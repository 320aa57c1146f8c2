//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB, Redis 캐시 관련 설정을 관리합니다.

use std::env;
use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 바인딩 호스트 (`HOST`, 기본값 0.0.0.0)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(4)
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "product_catalog_dev".to_string())
    }

    /// 드라이버에 전달되는 애플리케이션 이름
    pub fn app_name() -> String {
        "product_service".to_string()
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// 상품 캐시 키 구분자. 최종 키는 `<namespace>~<productId>` 형태입니다.
    pub const KEY_SEPARATOR: &'static str = "~";

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 상품 캐시 네임스페이스 (`PRODUCT_ID_CACHE_KEY`, 기본값 "product")
    pub fn product_namespace() -> String {
        env::var("PRODUCT_ID_CACHE_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "product".to_string())
    }
}

/// 피어 IP 기준, 응답에 남은 할당량 헤더를 포함하는 Governor 설정
pub type RateLimiterConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    /// 환경변수에서 설정을 읽습니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱할 수 없거나 0인 값은 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            per_second: positive_env("RATE_LIMIT_PER_SECOND", defaults.per_second),
            burst_size: positive_env("RATE_LIMIT_BURST_SIZE", defaults.burst_size),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    /// Governor 미들웨어 설정을 만듭니다. 값 중 하나라도 0이면 `None`입니다.
    pub fn governor(&self) -> Option<RateLimiterConfig> {
        if self.per_second == 0 {
            return None;
        }

        GovernorConfigBuilder::default()
            .requests_per_second(self.per_second)
            .burst_size(self.burst_size)
            .use_headers()
            .finish()
    }
}

fn positive_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default + std::fmt::Display,
{
    match env::var(key) {
        Err(_) => default,
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) if value != T::default() => value,
            _ => {
                log::error!("{} 값이 올바르지 않습니다 ({}). 기본값 {} 사용", key, raw, default);
                default
            }
        },
    }
}
