//! 엔티티 ↔ DTO 변환
//!
//! 모든 함수는 부수 효과가 없으며 입력이 없으면(`None`) 출력도 `None`입니다.
//! 중첩 카테고리는 필드 단위로 복사한 새 [`CategoryDto`]로 만들어
//! 엔티티와 응답이 같은 값을 공유하지 않도록 합니다.
//!
//! 요청 → 엔티티 변환은 항상 새 식별자와 `ACTIVE` 상태를 가진 엔티티를 만듭니다.
//! 교체(PUT)에서 식별자/생성 시각을 유지하는 일은 서비스 계층이 담당합니다.

use crate::domain::dto::{CategoryDto, CategoryRequest, ProductDto, ProductRequest};
use crate::domain::entities::{Category, EntityMeta, Product};

pub fn product_from_request(request: Option<ProductRequest>) -> Option<Product> {
    let request = request?;
    let category_id = request.category_id();

    Some(Product {
        meta: EntityMeta::new(),
        name: request.name,
        description: request.description,
        image_url: request.image_url,
        price: request.price,
        category_id,
        is_prime: request.is_prime,
    })
}

/// 상품을 응답 DTO로 변환합니다.
///
/// # 인자
///
/// * `product` - 변환할 상품
/// * `category` - 이미 조회된 카테고리. 없으면 `category_id`만 담은 참조를 만듭니다.
pub fn product_to_dto(product: Option<&Product>, category: Option<&Category>) -> Option<ProductDto> {
    let product = product?;

    let category = match category {
        Some(category) if Some(category.id()) == product.category_id => category_to_dto(Some(category)),
        _ => product.category_id.map(CategoryDto::reference),
    };

    Some(ProductDto {
        id: product.id(),
        name: product.name.clone(),
        description: product.description.clone(),
        image_url: product.image_url.clone(),
        price: product.price,
        category,
        is_prime: product.is_prime,
        state: product.meta.state,
    })
}

pub fn products_to_dtos(products: &[Product]) -> Vec<ProductDto> {
    products
        .iter()
        .filter_map(|product| product_to_dto(Some(product), None))
        .collect()
}

pub fn category_from_request(request: Option<CategoryRequest>) -> Option<Category> {
    let request = request?;

    Some(Category {
        meta: EntityMeta::new(),
        name: request.name,
        description: request.description,
    })
}

pub fn category_to_dto(category: Option<&Category>) -> Option<CategoryDto> {
    let category = category?;

    Some(CategoryDto {
        id: Some(category.id()),
        name: Some(category.name.clone()),
        description: category.description.clone(),
    })
}

pub fn categories_to_dtos(categories: &[Category]) -> Vec<CategoryDto> {
    categories
        .iter()
        .filter_map(|category| category_to_dto(Some(category)))
        .collect()
}
