//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서의 모델입니다.
//! 필수 필드 검증과 부분 업데이트 적용 규칙을 함께 정의합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;

/// 사용자 엔티티
///
/// `name`과 `email`은 비어 있을 수 없으며, `email`은 컬렉션 전체에서 유일합니다.
/// `id`는 저장 시점에 한 번 할당된 뒤 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (필수)
    pub name: String,
    /// 사용자 이메일 (필수, unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl User {
    /// 요청 DTO로부터 아직 저장되지 않은 사용자를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `name` 또는 `email`이 없거나 비어 있는 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let user = User::from_request(request)?;
    /// assert!(user.id.is_none());
    /// ```
    pub fn from_request(request: UserRequest) -> AppResult<Self> {
        request.validate_fields()?;

        let UserRequest {
            name,
            email,
            mobile,
            gender,
            age,
        } = request;

        let missing: Vec<&str> = [("name", name.is_none()), ("email", email.is_none())]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();

        match (name, email) {
            (Some(name), Some(email)) => Ok(Self {
                id: None,
                name,
                email,
                mobile,
                gender,
                age,
            }),
            _ => Err(AppError::ValidationError(format!(
                "User validation failed: {} is required",
                missing.join(", ")
            ))),
        }
    }

    /// 요청에 포함된 필드만 덮어씁니다. `id`는 변경되지 않습니다.
    pub fn apply(&mut self, changes: &UserRequest) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(email) = &changes.email {
            self.email = email.clone();
        }
        if let Some(mobile) = &changes.mobile {
            self.mobile = Some(mobile.clone());
        }
        if let Some(gender) = &changes.gender {
            self.gender = Some(gender.clone());
        }
        if let Some(age) = changes.age {
            self.age = Some(age);
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
