//! # 카테고리 리포지토리 구현
//!
//! MongoDB `categories` 컬렉션에 대한 데이터 액세스 계층입니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;
use crate::{
    db::Database,
    domain::entities::Category,
    errors::{AppError, AppResult},
};

/// 카테고리 영속성 게이트웨이
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    async fn find_all(&self) -> AppResult<Vec<Category>>;

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool>;

    async fn save(&self, category: &Category) -> AppResult<Category>;

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

const COLLECTION: &str = "categories";

pub struct MongoCategoryRepository {
    db: Arc<Database>,
}

impl MongoCategoryRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Category> {
        self.db.collection::<Category>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_idx".to_string())
                .build())
            .build();

        self.collection()
            .create_index(name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, category: &Category) -> AppResult<Category> {
        self.collection()
            .replace_one(doc! { "_id": category.id().to_string() }, category)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(category.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.collection()
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
