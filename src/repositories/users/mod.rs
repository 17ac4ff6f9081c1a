//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait이 서비스 계층이 의존하는 영속성 계약이며,
//! 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//! - `InMemoryUserRepository` - 프로세스 메모리. MongoDB 없이 HTTP 계층을 검증하는 테스트 지원용이며
//!   공개 문서에서는 숨깁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

#[doc(hidden)]
pub mod memory_repo;
pub mod user_repo;

#[doc(hidden)]
pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;
use crate::domain::entities::users::User;

/// 사용자 영속성 계약
///
/// 식별자 생성, `email` 유일성 보장은 구현체의 책임입니다.
///
/// ## 에러 규칙
///
/// - ObjectId 형식이 아닌 `id` → `AppError::InvalidId`
/// - `email` 중복 → `AppError::ConflictError`
/// - 그 밖의 저장소 오류 → `AppError::DatabaseError`
/// - 해당 문서 없음 → `Ok(None)`
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 `id`가 채워진 문서를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 모든 사용자를 저장소 순서대로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 포함된 필드만 덮어쓰고 변경 후 문서를 반환합니다.
    async fn update(&self, id: &str, changes: &UserRequest) -> AppResult<Option<User>>;

    /// 사용자를 삭제하고 삭제된 문서를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<Option<User>>;
}

/// 경로에서 받은 ID 문자열을 ObjectId로 해석합니다.
///
/// # Errors
///
/// * `AppError::InvalidId` - 24자리 16진수 문자열이 아닌 경우
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = parse_object_id("5da1fd003688ac19e6d60e73").unwrap();
        assert_eq!(id.to_hex(), "5da1fd003688ac19e6d60e73");
    }

    #[test]
    fn test_parse_object_id_rejects_malformed() {
        assert_eq!(
            parse_object_id("not-an-id"),
            Err(AppError::InvalidId("not-an-id".to_string()))
        );
        assert!(parse_object_id("5da1fd003688ac19e6d60e7").is_err());
    }
}
