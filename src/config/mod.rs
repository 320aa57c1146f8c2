//! # Configuration Module
//!
//! 상품 카탈로그 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 따라
//! `.env.dev` / `.env.prod` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, MongoDB, Redis 캐시 설정
//! - [`auth_config`] - JWT 검증 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{CacheConfig, Environment, JwtConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let namespace = CacheConfig::product_namespace();
//! let secret = JwtConfig::secret()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="product_catalog_dev"
//! export REDIS_URL="redis://localhost:6379"
//! export PRODUCT_ID_CACHE_KEY="product"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # JWT 설정 (production 환경에서는 필수)
//! export JWT_SECRET="your-super-secret-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
