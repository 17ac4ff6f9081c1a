//! 프로세스 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 HTTP 계층을 검증할 때 사용하는 테스트 지원 구현입니다.
//! 운영 바이너리는 사용하지 않으며 공개 문서에서 숨겨집니다.
//! `MongoUserRepository`와 같은 에러 규칙(잘못된 ID, 이메일 중복)을 따릅니다.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{parse_object_id, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;
use crate::domain::entities::users::User;

/// 삽입 순서를 유지하는 메모리 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::ConflictError(format!(
        "E11000 duplicate key error collection: users index: email_unique dup key: {{ email: \"{}\" }}",
        email
    ))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.lock()?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(duplicate_email(&user.email));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        Ok(self.lock()?
            .iter()
            .find(|user| user.id == Some(object_id))
            .cloned())
    }

    async fn update(&self, id: &str, changes: &UserRequest) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let mut users = self.lock()?;

        if let Some(email) = &changes.email {
            let taken = users
                .iter()
                .any(|user| user.id != Some(object_id) && &user.email == email);
            if taken {
                return Err(duplicate_email(email));
            }
        }

        Ok(users
            .iter_mut()
            .find(|user| user.id == Some(object_id))
            .map(|user| {
                user.apply(changes);
                user.clone()
            }))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let mut users = self.lock()?;

        let position = users.iter().position(|user| user.id == Some(object_id));

        Ok(position.map(|index| users.remove(index)))
    }
}
