//! 상품 캐시
//!
//! 상품 스냅샷을 Redis 해시에 보관합니다.
//!
//! ```text
//! key   = "<namespace>~<productId>"
//! field = "<productId>"
//! value = Product JSON
//! ```
//!
//! 만료 시간은 없으며, 항목은 서비스의 쓰기(교체/삭제)에 의해서만 갱신되거나 제거됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::caching::redis::RedisClient;
use crate::config::CacheConfig;
use crate::domain::entities::Product;
use crate::errors::AppResult;

/// 상품 캐시 포트
///
/// 구현체는 저장소 에러를 그대로 돌려주고, 에러를 삼킬지 여부는 호출자(서비스)가 정합니다.
#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn get(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn put(&self, product: &Product) -> AppResult<()>;

    async fn evict(&self, id: Uuid) -> AppResult<()>;
}

/// 네임스페이스와 상품 식별자로 캐시 키를 만듭니다.
pub fn cache_key(namespace: &str, id: Uuid) -> String {
    format!("{}{}{}", namespace, CacheConfig::KEY_SEPARATOR, id)
}

/// Redis 해시 기반 [`ProductCache`] 구현
pub struct RedisProductCache {
    redis: Arc<RedisClient>,
    namespace: String,
}

impl RedisProductCache {
    pub fn new(redis: Arc<RedisClient>, namespace: impl Into<String>) -> Self {
        Self {
            redis,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl ProductCache for RedisProductCache {
    async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        let key = cache_key(&self.namespace, id);
        Ok(self.redis.hget::<Product>(&key, &id.to_string()).await?)
    }

    async fn put(&self, product: &Product) -> AppResult<()> {
        let id = product.id();
        let key = cache_key(&self.namespace, id);
        Ok(self.redis.hset(&key, &id.to_string(), product).await?)
    }

    async fn evict(&self, id: Uuid) -> AppResult<()> {
        let key = cache_key(&self.namespace, id);
        Ok(self.redis.hdel(&key, &id.to_string()).await?)
    }
}
