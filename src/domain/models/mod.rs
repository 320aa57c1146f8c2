//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델들입니다.
//!
//! - [`auth`] - 토큰에서 추출한 주체와 역할 조건
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;
