//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 객체입니다.
//! 엔티티와의 변환은 [`crate::domain::mapping`]에 모여 있습니다.
//!
//! ```text
//! dto/
//! ├── products/     - ProductRequest, ProductDto
//! └── categories/   - CategoryRequest, CategoryDto
//! ```

pub mod products;
pub mod categories;

pub use products::*;
pub use categories::*;
