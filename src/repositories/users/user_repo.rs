//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! `users` 컬렉션에 대한 CRUD 연산을 담당합니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `email_unique` 인덱스로 이메일 중복을 저장소에서 차단
//! - **원자적 수정/삭제**: `find_one_and_update`, `find_one_and_delete` 사용
//! - **에러 변환**: 드라이버 에러를 `AppError`로 변환 (중복 키 → `ConflictError`)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use super::{parse_object_id, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::users::request::UserRequest;
use crate::domain::entities::users::User;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
///
/// ## 저장소 구성
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let created = repo.create(user).await?;
/// let found = repo.find_by_id(&created.id_string().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// 데이터베이스 연결에서 `users` 컬렉션 핸들을 얻습니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// - **이메일 유니크 인덱스** (`email_unique`): 중복 이메일 방지 및 조회 최적화
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있는 경우 인덱스 생성이 실패합니다
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!("Unexpected inserted id: {}", result.inserted_id))
        })?;
        user.id = Some(id);

        debug!("사용자 저장 완료: {}", id);
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: &str, changes: &UserRequest) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let update_doc = set_document(changes);

        // 변경할 필드가 없으면 $set 연산자가 거부되므로 현재 문서를 그대로 반환
        if update_doc.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 요청에 포함된 필드만으로 `$set` 문서를 만듭니다.
fn set_document(changes: &UserRequest) -> Document {
    let mut document = Document::new();

    if let Some(name) = &changes.name {
        document.insert("name", name.as_str());
    }
    if let Some(email) = &changes.email {
        document.insert("email", email.as_str());
    }
    if let Some(mobile) = &changes.mobile {
        document.insert("mobile", mobile.as_str());
    }
    if let Some(gender) = &changes.gender {
        document.insert("gender", gender.as_str());
    }
    if let Some(age) = changes.age {
        document.insert("age", age);
    }

    document
}

/// 쓰기 연산 에러를 변환합니다. 중복 키는 `ConflictError`가 됩니다.
fn map_write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(error.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_contains_only_provided_fields() {
        let changes = UserRequest {
            email: Some("new@gmail.com".to_string()),
            age: Some(40),
            ..UserRequest::default()
        };

        let document = set_document(&changes);

        assert_eq!(document.len(), 2);
        assert_eq!(document.get_str("email").unwrap(), "new@gmail.com");
        assert_eq!(document.get_i32("age").unwrap(), 40);
        assert!(!document.contains_key("name"));
    }

    #[test]
    fn test_set_document_empty_for_empty_request() {
        assert!(set_document(&UserRequest::default()).is_empty());
    }
}
