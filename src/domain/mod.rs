//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 모델을 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 User 문서
//! └── dto       - 요청/응답 DTO
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod dto;
pub mod entities;
