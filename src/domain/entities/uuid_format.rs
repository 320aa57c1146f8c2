//! UUID 직렬화 포맷
//!
//! BSON 직렬화기는 `Uuid`를 바이너리로 기록하기 때문에 `doc! { "_id": id.to_string() }`
//! 형태의 필터와 일치하지 않습니다. 저장소와 캐시 모두에서 하이픈 포함 문자열로
//! 고정하기 위해 `#[serde(with = "...")]`로 사용합니다.

use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.hyphenated().to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
}

/// `Option<Uuid>` 필드용
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.serialize_some(&id.hyphenated().to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Uuid>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| Uuid::parse_str(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
