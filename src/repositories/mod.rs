//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 [`users::UserRepository`] trait 객체에 의존하므로,
//! 운영 환경에서는 MongoDB 구현을, 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let users = repo.find_all().await?;
//! ```

pub mod users;
