//! 사용자 비즈니스 로직 모듈
//!
//! [`UserService`](user_service::UserService)가 핸들러와 리포지토리 사이에서
//! 사용자 CRUD 규칙을 적용합니다.

pub mod user_service;

pub use user_service::UserService;
