//! # Repository Layer
//!
//! 상품/카테고리 레코드에 대한 영속성 게이트웨이입니다.
//! 서비스 계층은 trait 객체(`Arc<dyn ProductRepository>`)만 알고,
//! 실제 구현은 `main`에서 MongoDB 구현을 만들어 생성자로 넘겨줍니다.
//!
//! | 연산 | 상품 | 카테고리 |
//! |------|------|----------|
//! | `find_by_id` | ✅ | ✅ |
//! | `find_all` | ✅ | ✅ |
//! | `find_by_category_id` | ✅ | - |
//! | `find_all_by_ids` | ✅ | - |
//! | `exists_by_id` | ✅ | ✅ |
//! | `save` (upsert) | ✅ | ✅ |
//! | `delete_by_id` | ✅ | ✅ |
//!
//! "없음"은 `Ok(None)` / `Ok(false)`로 표현하며, `NotFound` 변환은 서비스가 담당합니다.

pub mod products;
pub mod categories;

pub use products::{MongoProductRepository, ProductRepository};
pub use categories::{CategoryRepository, MongoCategoryRepository};

use uuid::Uuid;

/// `$in` 필터에 사용할 문자열 식별자 목록
pub(crate) fn id_strings(ids: &[Uuid]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
