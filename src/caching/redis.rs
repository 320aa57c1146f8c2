//! Redis 클라이언트 래퍼
//!
//! 해시 필드 단위의 JSON 읽기/쓰기/삭제만 제공합니다.
//! 연결은 `ConnectionManager`가 관리하며 끊어지면 자동으로 재연결합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use log::info;

#[derive(Clone)]
pub struct RedisClient {
    connection: ConnectionManager,
}

impl RedisClient {
    /// Redis에 연결하고 `PING`으로 가용성을 확인합니다.
    ///
    /// # 인자
    ///
    /// * `redis_url` - `redis://host:port` 형식의 접속 주소
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        let mut connection = ConnectionManager::new(client).await?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut connection).await?;

        info!("✅ Redis 연결 성공: {}", redis_url);

        Ok(Self { connection })
    }

    /// 해시 `key`의 `field` 값을 JSON으로 읽어 역직렬화합니다.
    pub async fn hget<T: DeserializeOwned>(&self, key: &str, field: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.hget(key, field).await?;

        match value {
            Some(json) if !json.is_empty() => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            _ => Ok(None),
        }
    }

    /// 해시 `key`의 `field`에 값을 JSON으로 기록합니다. 기존 값은 덮어씁니다.
    pub async fn hset<T: Serialize>(&self, key: &str, field: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        let _: () = conn.hset(key, field, json).await?;
        Ok(())
    }

    /// 해시 `key`의 `field`를 삭제합니다. 없는 필드를 지워도 에러가 아닙니다.
    pub async fn hdel(&self, key: &str, field: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.connection.clone();
        let _: () = conn.hdel(key, field).await?;
        Ok(())
    }
}
