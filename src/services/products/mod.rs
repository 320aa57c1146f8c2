//! 상품 서비스 모듈
//!
//! 단일 상품 조회/교체/삭제에 캐시 어사이드(cache-aside) 정책을 적용합니다.
//!
//! # 캐시 정책
//!
//! - 조회: 캐시 적중 시 DB 접근 없음, 미스 시 DB 조회 후 캐시 채움
//! - 교체: DB 저장 후 캐시 덮어쓰기 (write-through)
//! - 삭제: DB 삭제 후 캐시 항목 제거
//!
//! 캐시 에러는 경고 로그만 남기고 무시하며, DB 쓰기를 되돌리지 않습니다.

pub mod product_service;

pub use product_service::ProductService;
