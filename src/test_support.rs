//! 테스트용 인메모리 구현
//!
//! 리포지토리와 캐시 포트를 `HashMap`으로 구현하고, 호출 횟수를 세어
//! 캐시 적중/미스 시 저장소 접근 여부를 검증할 수 있게 합니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;
use crate::caching::ProductCache;
use crate::domain::entities::{Category, Product};
use crate::errors::{AppError, AppResult};
use crate::repositories::{CategoryRepository, ProductRepository};
use crate::routes::AppState;
use crate::services::{CategoryService, ProductService, TokenService};
use actix_web::web;
use chrono::Duration;

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<HashMap<Uuid, Product>>,
    pub find_by_id_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn insert(&self, product: Product) {
        self.rows.lock().unwrap().insert(product.id(), product);
    }

    pub fn get(&self, id: Uuid) -> Option<Product> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn find_by_id_count(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> AppResult<Vec<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn find_all_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn save(&self, product: &Product) -> AppResult<Product> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.insert(product.clone());
        Ok(product.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    rows: Mutex<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn insert(&self, category: Category) {
        self.rows.lock().unwrap().insert(category.id(), category);
    }

    pub fn get(&self, id: Uuid) -> Option<Category> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn save(&self, category: &Category) -> AppResult<Category> {
        self.insert(category.clone());
        Ok(category.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// 인메모리 캐시. `failing()`으로 만들면 모든 연산이 `RedisError`를 반환합니다.
#[derive(Default)]
pub struct InMemoryProductCache {
    entries: Mutex<HashMap<Uuid, Product>>,
    failing: bool,
    pub put_calls: AtomicUsize,
    pub evict_calls: AtomicUsize,
}

impl InMemoryProductCache {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn entry(&self, id: Uuid) -> Option<Product> {
        self.entries.lock().unwrap().get(&id).cloned()
    }

    pub fn seed(&self, product: Product) {
        self.entries.lock().unwrap().insert(product.id(), product);
    }

    pub fn put_count(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn evict_count(&self) -> usize {
        self.evict_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        if self.failing {
            return Err(AppError::RedisError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCache for InMemoryProductCache {
    async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.check()?;
        Ok(self.entry(id))
    }

    async fn put(&self, product: &Product) -> AppResult<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.seed(product.clone());
        Ok(())
    }

    async fn evict(&self, id: Uuid) -> AppResult<()> {
        self.evict_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// 서비스와 그 뒤의 인메모리 저장소 묶음
pub struct Fixture {
    pub products: Arc<InMemoryProductRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub cache: Arc<InMemoryProductCache>,
    pub product_service: Arc<ProductService>,
    pub category_service: Arc<CategoryService>,
    pub tokens: Arc<TokenService>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_cache(InMemoryProductCache::default())
    }

    pub fn with_cache(cache: InMemoryProductCache) -> Self {
        let products = Arc::new(InMemoryProductRepository::default());
        let categories = Arc::new(InMemoryCategoryRepository::default());
        let cache = Arc::new(cache);

        let product_service = Arc::new(ProductService::new(
            products.clone(),
            categories.clone(),
            cache.clone(),
        ));
        let category_service = Arc::new(CategoryService::new(categories.clone()));

        Self {
            products,
            categories,
            cache,
            product_service,
            category_service,
            tokens: Arc::new(TokenService::new("fixture-secret")),
        }
    }

    /// 지정한 역할을 가진 `Authorization` 헤더 값
    pub fn bearer(&self, roles: &[&str]) -> String {
        let token = self
            .tokens
            .issue_token("tester", roles, Duration::hours(1))
            .unwrap();
        format!("Bearer {}", token)
    }

    /// 운영 서버와 같은 방식으로 공유되는 서비스 묶음
    pub fn state(&self) -> AppState {
        AppState {
            products: web::Data::from(self.product_service.clone()),
            categories: web::Data::from(self.category_service.clone()),
            tokens: self.tokens.clone(),
        }
    }

    /// 카테고리 하나와 그 카테고리를 참조하는 상품 하나를 저장합니다.
    pub fn seed_product(&self, name: &str) -> (Category, Product) {
        let category = Category::new("Tools", Some("hand tools".to_string()));
        self.categories.insert(category.clone());

        let mut product = Product::new(name, Decimal::new(999, 2));
        product.category_id = Some(category.id());
        self.products.insert(product.clone());

        (category, product)
    }
}
