//! 사용자 생성/수정 요청 DTO
//!
//! `POST /api/user`와 `PUT /api/user/{id}`가 공유하는 요청 본문 구조입니다.
//! 모든 필드는 선택적이며, 알 수 없는 키는 무시됩니다.
//!
//! 본문은 JSON 또는 `application/x-www-form-urlencoded`로 들어오므로 핸들러는 먼저
//! 필드 맵(`serde_json::Map`)으로 받고, [`UserRequest::from_fields`]로 타입을 입힙니다.
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};

/// 사용자 필드 요청 DTO
///
/// 생성 시에는 `name`, `email`이 필수이며([`User::from_request`] 참고),
/// 수정 시에는 포함된 필드만 덮어씁니다.
/// JSON `null`은 필드가 없는 것으로 취급합니다.
///
/// [`User::from_request`]: crate::domain::entities::users::User::from_request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, message = "name can not be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "email can not be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,
}

/// 요청 본문에서 인식하는 필드 이름
pub const USER_FIELDS: [&str; 5] = ["name", "email", "mobile", "gender", "age"];

/// `age`는 숫자 또는 숫자 문자열을 받습니다. 폼 본문의 값은 모두 문자열입니다.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAge {
        Number(i32),
        Text(String),
    }

    match Option::<RawAge>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAge::Number(age)) => Ok(Some(age)),
        Some(RawAge::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawAge::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("age: cast to number failed for value \"{}\"", text))),
    }
}

impl UserRequest {
    /// 필드 맵에 값이 있는(`null`이 아닌) 인식 필드가 하나라도 있는지 확인합니다.
    pub fn has_known_field(fields: &Map<String, Value>) -> bool {
        USER_FIELDS
            .iter()
            .any(|field| fields.get(*field).is_some_and(|value| !value.is_null()))
    }

    /// 필드 맵을 요청 DTO로 변환합니다. 알 수 없는 키(`id`, `_id` 포함)는 버립니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 타입이 맞지 않는 경우 (예: `"age": "abc"`)
    pub fn from_fields(fields: Map<String, Value>) -> AppResult<Self> {
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::ValidationError(format!("User validation failed: {}", e)))
    }

    /// 포함된 필드의 형식을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `name` 또는 `email`이 빈 문자열인 경우
    pub fn validate_fields(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::ValidationError(format!("User validation failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_known_field_detection() {
        assert!(!UserRequest::has_known_field(&fields(json!({}))));
        assert!(!UserRequest::has_known_field(&fields(json!({ "nickname": "jj", "id": "x" }))));
        assert!(!UserRequest::has_known_field(&fields(json!({ "name": null }))));
        assert!(UserRequest::has_known_field(&fields(json!({ "age": "abc" }))));
    }

    #[test]
    fn test_from_fields_casts_numeric_age_text() {
        let request = UserRequest::from_fields(fields(json!({ "name": "John", "age": "35" }))).unwrap();

        assert_eq!(request.age, Some(35));
        assert_eq!(request.name.as_deref(), Some("John"));
    }

    #[test]
    fn test_from_fields_rejects_mistyped_values() {
        for body in [json!({ "age": "abc" }), json!({ "name": 123 }), json!({ "age": 35.5 })] {
            let err = UserRequest::from_fields(fields(body)).unwrap_err();
            assert!(matches!(err, AppError::ValidationError(ref msg) if msg.starts_with("User validation failed")));
        }
    }

    #[test]
    fn test_from_fields_drops_identifier_keys() {
        let request =
            UserRequest::from_fields(fields(json!({ "id": "abc", "_id": "def", "gender": "Male" }))).unwrap();

        assert_eq!(
            request,
            UserRequest {
                gender: Some("Male".to_string()),
                ..UserRequest::default()
            }
        );
    }

    #[test]
    fn test_unknown_and_null_fields_are_ignored() {
        let request: UserRequest =
            serde_json::from_str(r#"{"nickname": "jj", "mobile": null}"#).unwrap();
        assert_eq!(request, UserRequest::default());
    }

    #[test]
    fn test_numeric_age() {
        let request: UserRequest = serde_json::from_str(r#"{"age": 35}"#).unwrap();
        assert_eq!(request.age, Some(35));
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let request = UserRequest {
            email: Some(String::new()),
            ..UserRequest::default()
        };

        let err = request.validate_fields().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("email")));
    }

    #[test]
    fn test_validate_accepts_absent_fields() {
        assert!(UserRequest::default().validate_fields().is_ok());
    }
}
