//! 엔티티 공통 메타데이터
//!
//! 모든 영속 엔티티가 값으로 포함하는 식별자, 타임스탬프, 상태 필드입니다.
//! 엔티티 쪽에서는 `#[serde(flatten)]`으로 포함하므로 저장 문서에는
//! `_id`, `created_at`, `last_updated_at`, `state`가 최상위 필드로 기록됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 엔티티 생명주기 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityState {
    #[default]
    Active,
    Inactive,
}

/// 식별자 + 생성/수정 시각 + 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMeta {
    #[serde(rename = "_id", with = "super::uuid_format")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub state: EntityState,
}

impl EntityMeta {
    /// 새 식별자를 발급하고 두 타임스탬프를 현재 시각으로 설정합니다.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            last_updated_at: now,
            state: EntityState::Active,
        }
    }

    /// 기존 레코드를 교체할 때 호출합니다.
    ///
    /// 식별자와 생성 시각은 저장된 레코드의 값을 유지하고 수정 시각만 갱신합니다.
    pub fn replacing(&self, previous: &EntityMeta) -> Self {
        Self {
            id: previous.id,
            created_at: previous.created_at,
            last_updated_at: Utc::now(),
            state: self.state,
        }
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}
