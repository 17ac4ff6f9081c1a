//! 사용자 관리 서비스 백엔드
//!
//! 정적 Bearer 토큰으로 보호되는 단일 `User` 리소스 CRUD API입니다.
//! Actix-web 위에서 동작하며 MongoDB를 저장소로 사용합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   TokenGuard    │ ← 모든 요청의 Authorization 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 결과/에러 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::MongoUserRepository;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MongoUserRepository::new(&database)));
//! let users = service.list_users().await?;
//! ```

pub mod app;
pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
