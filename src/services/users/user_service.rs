//! # 사용자 서비스 구현
//!
//! 사용자 CRUD의 비즈니스 규칙을 담당합니다.
//! 리포지토리 결과를 API 계약에 맞는 결과와 에러 메시지로 변환합니다.
//!
//! ## 에러 변환 규칙
//!
//! | 연산 | 문서 없음 / 잘못된 ID | 그 밖의 실패 |
//! |------|------------------------|--------------|
//! | 생성 | - | 원본 메시지 (없으면 대체 메시지) |
//! | 목록 | - | 원본 메시지 (없으면 대체 메시지) |
//! | 조회 | `User not found with given id: {id}` | `Error occured while retrieving user with id: {id}` |
//! | 수정 | `User not found with given id: {id}` | `Error occured while updating user with id: {id}` |
//! | 삭제 | `User not found with given id: {id}` | `Error occured while deleting user with id: {id}` |
//!
//! ID 기반 연산의 실패 원인은 응답에 노출하지 않고 로그로만 남깁니다.

use std::sync::Arc;

use log::{error, info, warn};
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;

const CREATE_FALLBACK: &str = "Some error occurred while creating the user";
const LIST_FALLBACK: &str = "Some error occurred while retrieving users";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 리포지토리를 `Arc<dyn UserRepository>`로 보관하므로 `web::Data`로 감싸
/// 워커 스레드 간에 공유할 수 있습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
///
/// let created = service.create_user(request).await?;
/// let fetched = service.get_user(&created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

/// ID 기반 연산 종류 (에러 메시지 생성용)
#[derive(Debug, Clone, Copy)]
enum Operation {
    Retrieve,
    Update,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Retrieve => "retrieving",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        }
    }
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 새 사용자 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `name`/`email` 누락 또는 빈 값
    /// * `AppError::ConflictError` - 이메일 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    ///
    /// 모두 500으로 응답되며, 메시지는 원본을 그대로 사용합니다.
    pub async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        let result = match User::from_request(request) {
            Ok(user) => self.repository.create(user).await,
            Err(e) => Err(e),
        };

        let created = result.map_err(|e| {
            warn!("사용자 생성 실패: {}", e);
            e.or_message(CREATE_FALLBACK)
        })?;

        info!("사용자 생성 완료: {}", created.id_string().unwrap_or_default());
        Ok(UserResponse::from(created))
    }

    /// 요청 본문 필드 맵으로 사용자를 생성합니다.
    ///
    /// 타입 변환 실패(`"age": "abc"` 등)는 검증 실패와 같이 500으로 응답됩니다.
    pub async fn create_user_fields(&self, fields: Map<String, Value>) -> AppResult<UserResponse> {
        match UserRequest::from_fields(fields) {
            Ok(request) => self.create_user(request).await,
            Err(e) => {
                warn!("사용자 생성 실패: {}", e);
                Err(e)
            }
        }
    }

    /// 전체 사용자 목록 조회
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repository.find_all().await.map_err(|e| {
            error!("사용자 목록 조회 실패: {}", e);
            e.or_message(LIST_FALLBACK)
        })?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let found = self.repository.find_by_id(id).await;
        resolve(id, Operation::Retrieve, found)
    }

    /// 사용자 정보 수정
    ///
    /// 빈 요청 여부는 핸들러에서 먼저 확인합니다.
    /// `name`/`email`을 빈 문자열로 바꾸려는 요청은 저장소에 도달하지 않고
    /// 수정 실패로 처리됩니다.
    pub async fn update_user(&self, id: &str, changes: &UserRequest) -> AppResult<UserResponse> {
        let updated = match changes.validate_fields() {
            Ok(()) => self.repository.update(id, changes).await,
            Err(e) => Err(e),
        };

        let response = resolve(id, Operation::Update, updated)?;
        info!("사용자 수정 완료: {}", id);
        Ok(response)
    }

    /// 요청 본문 필드 맵으로 사용자를 수정합니다.
    ///
    /// 타입 변환 실패는 다른 수정 실패와 같은 고정 메시지로 응답됩니다.
    pub async fn update_user_fields(&self, id: &str, fields: Map<String, Value>) -> AppResult<UserResponse> {
        match UserRequest::from_fields(fields) {
            Ok(changes) => self.update_user(id, &changes).await,
            Err(e) => resolve(id, Operation::Update, Err(e)),
        }
    }

    /// 사용자 삭제. 삭제된 문서를 반환합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<UserResponse> {
        let removed = self.repository.delete(id).await;

        let response = resolve(id, Operation::Delete, removed)?;
        info!("사용자 삭제 완료: {}", id);
        Ok(response)
    }
}

/// ID 기반 연산 결과를 응답 또는 API 에러로 변환합니다.
fn resolve(id: &str, operation: Operation, result: AppResult<Option<User>>) -> AppResult<UserResponse> {
    match result {
        Ok(Some(user)) => Ok(UserResponse::from(user)),
        Ok(None) | Err(AppError::InvalidId(_)) => Err(not_found(id)),
        Err(e) => {
            error!("Failed while {} user {}: {}", operation.verb(), id, e);
            Err(AppError::DatabaseError(format!(
                "Error occured while {} user with id: {}",
                operation.verb(),
                id
            )))
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User not found with given id: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;
    use async_trait::async_trait;

    /// 모든 연산이 실패하는 저장소
    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn create(&self, _user: User) -> AppResult<User> {
            Err(AppError::DatabaseError(String::new()))
        }

        async fn find_all(&self) -> AppResult<Vec<User>> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }

        async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }

        async fn update(&self, _id: &str, _changes: &UserRequest) -> AppResult<Option<User>> {
            Err(AppError::ConflictError("duplicate key".to_string()))
        }

        async fn delete(&self, _id: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }
    }

    fn john() -> UserRequest {
        UserRequest {
            name: Some("John".to_string()),
            email: Some("john@gmail.com".to_string()),
            mobile: Some("+919877887733".to_string()),
            gender: Some("Male".to_string()),
            age: Some(35),
        }
    }

    fn memory_service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn failing_service() -> UserService {
        UserService::new(Arc::new(FailingRepository))
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let service = memory_service();

        let created = service.create_user(john()).await.unwrap();
        let fetched = service.get_user(&created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.email, "john@gmail.com");
    }

    #[actix_web::test]
    async fn test_malformed_and_unknown_ids_are_not_found() {
        let service = memory_service();

        for id in ["5da1fd003688ac19e6d60e73", "not-an-object-id"] {
            let expected = not_found(id);
            assert_eq!(service.get_user(id).await.unwrap_err(), expected);
            assert_eq!(service.update_user(id, &john()).await.unwrap_err(), expected);
            assert_eq!(service.delete_user(id).await.unwrap_err(), expected);
        }
    }

    #[actix_web::test]
    async fn test_update_with_empty_name_fails_as_update_error() {
        let service = memory_service();
        let created = service.create_user(john()).await.unwrap();
        let changes = UserRequest {
            name: Some(String::new()),
            ..UserRequest::default()
        };

        let err = service.update_user(&created.id, &changes).await.unwrap_err();

        assert_eq!(
            err,
            AppError::DatabaseError(format!("Error occured while updating user with id: {}", created.id))
        );
    }

    #[actix_web::test]
    async fn test_create_uses_fallback_for_blank_errors() {
        let err = failing_service().create_user(john()).await.unwrap_err();
        assert_eq!(err, AppError::DatabaseError(CREATE_FALLBACK.to_string()));
    }

    #[actix_web::test]
    async fn test_list_keeps_underlying_message() {
        let err = failing_service().list_users().await.unwrap_err();
        assert_eq!(err, AppError::DatabaseError("connection reset".to_string()));
    }

    #[actix_web::test]
    async fn test_by_id_failures_use_operation_messages() {
        let service = failing_service();
        let id = "5da1fd003688ac19e6d60e73";

        assert_eq!(
            service.get_user(id).await.unwrap_err().to_string(),
            format!("Error occured while retrieving user with id: {}", id)
        );
        assert_eq!(
            service.update_user(id, &john()).await.unwrap_err().to_string(),
            format!("Error occured while updating user with id: {}", id)
        );
        assert_eq!(
            service.delete_user(id).await.unwrap_err().to_string(),
            format!("Error occured while deleting user with id: {}", id)
        );
    }

    #[actix_web::test]
    async fn test_create_from_mistyped_fields_is_validation_error() {
        let service = memory_service();
        let fields = match serde_json::json!({ "name": "John", "email": "j@g.com", "age": "abc" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let err = service.create_user_fields(fields).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("age")));
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_from_fields_keeps_id_and_reports_mistyped_values() {
        let service = memory_service();
        let created = service.create_user(john()).await.unwrap();
        let object = |value: Value| match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let updated = service
            .update_user_fields(&created.id, object(serde_json::json!({ "id": "other", "age": "36" })))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, Some(36));

        let err = service
            .update_user_fields(&created.id, object(serde_json::json!({ "age": "abc" })))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::DatabaseError(format!("Error occured while updating user with id: {}", created.id))
        );
    }
}
