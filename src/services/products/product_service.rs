use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use log::{error, info, warn};
use uuid::Uuid;
use crate::{
    caching::ProductCache,
    domain::entities::{Category, Product},
    errors::{AppError, AppResult},
    repositories::{CategoryRepository, ProductRepository},
};

/// 상품 비즈니스 로직
///
/// 협력 객체는 모두 생성자로 주입받습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let service = ProductService::new(
///     Arc::new(MongoProductRepository::new(db.clone())),
///     Arc::new(MongoCategoryRepository::new(db.clone())),
///     Arc::new(RedisProductCache::new(redis, CacheConfig::product_namespace())),
/// );
/// let product = service.get_product(id).await?;
/// ```
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
    cache: Arc<dyn ProductCache>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        cache: Arc<dyn ProductCache>,
    ) -> Self {
        Self {
            products,
            categories,
            cache,
        }
    }

    /// 식별자로 상품을 조회합니다.
    ///
    /// 캐시에 있으면 저장소를 건드리지 않고 반환합니다. 캐시 미스이면 저장소에서
    /// 읽고, 찾은 경우에만 캐시를 채웁니다.
    ///
    /// # 에러
    ///
    /// * `AppError::NotFound` - 저장소에 상품이 없는 경우 (캐시는 변경되지 않음)
    /// * `AppError::DatabaseError` - 저장소 조회 실패
    pub async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        if let Some(cached) = self.cached(id).await {
            info!("Cache hit for product ID: {}", id);
            return Ok(cached);
        }

        match self.products.find_by_id(id).await? {
            Some(product) => {
                self.write_through(&product).await;
                Ok(product)
            }
            None => {
                error!("Product with ID {} not found", id);
                Err(product_not_found(id))
            }
        }
    }

    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let products = self.products.find_all().await?;
        info!("Fetched {} products", products.len());
        Ok(products)
    }

    pub async fn list_products_by_category(&self, category_id: Uuid) -> AppResult<Vec<Product>> {
        self.products.find_by_category_id(category_id).await
    }

    /// 여러 상품을 한 번에 조회합니다.
    ///
    /// 중복 식별자는 한 번만 조회하며 결과는 요청 순서를 따릅니다.
    /// 하나라도 없으면 없는 식별자들을 나열한 `NotFound`를 반환합니다.
    pub async fn get_products_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Product>> {
        let mut seen = HashSet::with_capacity(ids.len());
        let requested: Vec<Uuid> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

        let mut found: HashMap<Uuid, Product> = self
            .products
            .find_all_by_ids(&requested)
            .await?
            .into_iter()
            .map(|product| (product.id(), product))
            .collect();

        let missing: Vec<String> = requested
            .iter()
            .filter(|id| !found.contains_key(*id))
            .map(|id| id.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::NotFound(format!(
                "Products not found for IDs: [{}]",
                missing.join(", ")
            )));
        }

        Ok(requested.iter().filter_map(|id| found.remove(id)).collect())
    }

    /// 새 상품을 저장합니다.
    ///
    /// 상품은 이미 존재하는 카테고리를 참조해야 합니다. 캐시는 첫 조회 시 채워집니다.
    ///
    /// # 반환값
    ///
    /// 저장된 상품과 참조 카테고리
    ///
    /// # 에러
    ///
    /// * `AppError::ValidationError` - 카테고리 참조가 없는 경우
    /// * `AppError::NotFound` - 참조한 카테고리가 없는 경우
    pub async fn create_product(&self, product: Product) -> AppResult<(Product, Category)> {
        let category_id = product.category_id.ok_or_else(|| {
            AppError::ValidationError("Product category must not be null".to_string())
        })?;
        let category = self.existing_category(category_id).await?;

        let saved = self.products.save(&product).await?;
        info!("Product is created with ID: {}", saved.id());

        Ok((saved, category))
    }

    /// 기존 상품을 교체합니다.
    ///
    /// 요청 값의 식별자는 무시되고 `id`로 고정되며, 생성 시각은 저장된 값을 유지합니다.
    /// 저장 후 캐시 항목을 새 값으로 덮어씁니다.
    ///
    /// # 에러
    ///
    /// * `AppError::NotFound` - 상품 또는 참조한 카테고리가 없는 경우 (캐시는 변경되지 않음)
    pub async fn replace_product(&self, id: Uuid, mut product: Product) -> AppResult<Product> {
        let Some(stored) = self.products.find_by_id(id).await? else {
            error!("Product with ID {} not found, failed to replace", id);
            return Err(product_not_found(id));
        };

        product.meta = product.meta.replacing(&stored.meta);

        if let Some(category_id) = product.category_id {
            self.existing_category(category_id).await?;
        }

        let updated = self.products.save(&product).await?;
        info!("Product is updated with ID: {}", id);

        self.write_through(&updated).await;
        Ok(updated)
    }

    /// 상품을 삭제하고 캐시 항목을 제거합니다.
    ///
    /// # 에러
    ///
    /// * `AppError::NotFound` - 상품이 없는 경우 (캐시는 변경되지 않음)
    pub async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        if !self.products.exists_by_id(id).await? {
            error!("Product with ID {} not found, cannot delete", id);
            return Err(product_not_found(id));
        }

        self.products.delete_by_id(id).await?;
        info!("Product is deleted with ID: {}", id);

        if let Err(e) = self.cache.evict(id).await {
            warn!("캐시 항목 삭제 실패 (product {}): {}", id, e);
        }
        Ok(())
    }

    async fn existing_category(&self, category_id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with ID: {} not found", category_id)))
    }

    async fn cached(&self, id: Uuid) -> Option<Product> {
        match self.cache.get(id).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!("캐시 조회 실패, 저장소에서 조회합니다 (product {}): {}", id, e);
                None
            }
        }
    }

    async fn write_through(&self, product: &Product) {
        if let Err(e) = self.cache.put(product).await {
            warn!("캐시 기록 실패 (product {}): {}", product.id(), e);
        }
    }
}

fn product_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Product with ID: {} not available.", id))
}
