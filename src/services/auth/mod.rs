//! 인증 서비스 모듈
//!
//! 베어러 토큰 검증을 담당합니다. 토큰 발급/갱신은 별도 인증 서버의 책임이며,
//! 이 서비스는 같은 비밀키로 서명을 확인하고 클레임만 읽습니다.

pub mod token_service;

pub use token_service::TokenService;
