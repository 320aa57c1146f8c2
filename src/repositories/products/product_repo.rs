//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층입니다. MongoDB `products` 컬렉션을 사용하며,
//! 식별자는 `_id`에 하이픈 포함 UUID 문자열로 저장됩니다.
//! 캐시는 이 계층이 아닌 `ProductService`가 관리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;
use crate::{
    db::Database,
    domain::entities::Product,
    errors::{AppError, AppResult},
    repositories::id_strings,
};

/// 상품 영속성 게이트웨이
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 특정 카테고리를 참조하는 상품 목록
    async fn find_by_category_id(&self, category_id: Uuid) -> AppResult<Vec<Product>>;

    /// 식별자 집합에 해당하는 상품들. 존재하지 않는 식별자는 결과에서 빠집니다.
    async fn find_all_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Product>>;

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool>;

    /// 기본 키 기준 insert-or-update
    async fn save(&self, product: &Product) -> AppResult<Product>;

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

const COLLECTION: &str = "products";

pub struct MongoProductRepository {
    db: Arc<Database>,
}

impl MongoProductRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.collection::<Product>(COLLECTION)
    }

    /// 카테고리별 조회와 이름 검색에 사용하는 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let category_index = IndexModel::builder()
            .keys(doc! { "category_id": 1 })
            .options(IndexOptions::builder()
                .name("category_id_idx".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_idx".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([category_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_many(&self, filter: mongodb::bson::Document) -> AppResult<Vec<Product>> {
        self.collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> AppResult<Vec<Product>> {
        self.find_many(doc! { "category_id": category_id.to_string() }).await
    }

    async fn find_all_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.find_many(doc! { "_id": { "$in": id_strings(ids) } }).await
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, product: &Product) -> AppResult<Product> {
        self.collection()
            .replace_one(doc! { "_id": product.id().to_string() }, product)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(product.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.collection()
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
