use std::sync::Arc;
use log::{error, info};
use uuid::Uuid;
use crate::{
    domain::entities::Category,
    errors::{AppError, AppResult},
    repositories::CategoryRepository,
};

/// 카테고리 CRUD
///
/// 카테고리는 캐시하지 않습니다. 삭제된 카테고리를 참조하던 상품은
/// 식별자를 그대로 유지하며, 해당 상품을 다시 교체할 때 존재 검사에서 걸립니다.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn create_category(&self, category: Category) -> AppResult<Category> {
        let saved = self.categories.save(&category).await?;
        info!("Category is created with ID: {}", saved.id());
        Ok(saved)
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    pub async fn get_category(&self, id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))
    }

    /// 카테고리를 교체합니다. 식별자와 생성 시각은 저장된 값을 유지합니다.
    pub async fn update_category(&self, id: Uuid, mut category: Category) -> AppResult<Category> {
        let Some(stored) = self.categories.find_by_id(id).await? else {
            error!("Category with ID {} not found, failed to update", id);
            return Err(category_not_found(id));
        };

        category.meta = category.meta.replacing(&stored.meta);

        let updated = self.categories.save(&category).await?;
        info!("Category is updated with ID: {}", id);
        Ok(updated)
    }

    pub async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        if !self.categories.exists_by_id(id).await? {
            error!("Category with ID {} not found, cannot delete", id);
            return Err(category_not_found(id));
        }

        self.categories.delete_by_id(id).await?;
        info!("Category is deleted with ID: {}", id);
        Ok(())
    }
}

fn category_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Category does not exist with ID: {}", id))
}
