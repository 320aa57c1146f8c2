//! 캐싱 계층 모듈
//!
//! Redis 해시를 백엔드로 하는 상품 캐시를 제공합니다.
//!
//! # 구성
//!
//! - [`redis`] - 해시 필드 단위 JSON 읽기/쓰기/삭제를 제공하는 클라이언트
//! - [`product_cache`] - `ProductCache` 포트와 Redis 구현
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::caching::{redis::RedisClient, RedisProductCache, ProductCache};
//!
//! let redis = Arc::new(RedisClient::new("redis://localhost:6379").await?);
//! let cache = RedisProductCache::new(redis, "product");
//!
//! cache.put(&product).await?;                 // HSET product~<id> <id> <json>
//! let hit = cache.get(product.id()).await?;   // HGET product~<id> <id>
//! cache.evict(product.id()).await?;           // HDEL product~<id> <id>
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! PRODUCT_ID_CACHE_KEY=product      # 키 네임스페이스
//! ```

pub mod redis;
pub mod product_cache;

pub use product_cache::{ProductCache, RedisProductCache, cache_key};
