//! # User Management HTTP Handlers
//!
//! 사용자 CRUD HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 엔드포인트는 [`TokenGuard`](crate::middlewares::TokenGuard)를 통과한 요청만 받습니다.
//!
//! ## RESTful API
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `POST` | `/api/user` | 사용자 생성 | 201 Created | 400, 500 |
//! | `GET` | `/api/users` | 사용자 목록 | 200 OK | 500 |
//! | `GET` | `/api/user/{id}` | 사용자 조회 | 200 OK | 404, 500 |
//! | `PUT` | `/api/user/{id}` | 사용자 수정 | 200 OK | 400, 404, 500 |
//! | `DELETE` | `/api/user/{id}` | 사용자 삭제 | 200 OK (삭제된 문서) | 404, 500 |
//!
//! ## 요청 본문
//!
//! `application/json`과 `application/x-www-form-urlencoded` 본문을 모두 받습니다.
//! 본문이 없거나, 두 형식 모두로 해석할 수 없거나, 값이 있는 인식 필드가 하나도 없으면
//! 400 `{"message": "Request body can not be empty"}`로 응답합니다.
//! 필드 타입이 맞지 않는 본문은 비어 있지 않으므로 검증 실패(500)로 처리됩니다.
//!
//! ```json
//! {
//!   "name": "John",
//!   "email": "john@gmail.com",
//!   "mobile": "+919877887733",
//!   "gender": "Male",
//!   "age": 35
//! }
//! ```

use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, Either, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::services::users::UserService;

const EMPTY_BODY_MESSAGE: &str = "Request body can not be empty";

/// JSON 객체 또는 URL 인코딩 폼으로 받은 요청 본문
pub type UserPayload = Either<web::Json<Map<String, Value>>, web::Form<HashMap<String, String>>>;

/// 요청 본문을 필드 맵으로 꺼내고, 비어 있으면 400으로 거부합니다.
fn require_body(payload: Option<UserPayload>) -> Result<Map<String, Value>, AppError> {
    let fields = match payload {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => form
            .into_inner()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
        None => Map::new(),
    };

    if UserRequest::has_known_field(&fields) {
        Ok(fields)
    } else {
        Err(AppError::BadRequest(EMPTY_BODY_MESSAGE.to_string()))
    }
}

/// 사용자 생성 핸들러
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "5da1fd003688ac19e6d60e73",
///   "name": "John",
///   "email": "john@gmail.com",
///   "mobile": "+919877887733",
///   "gender": "Male",
///   "age": 35
/// }
/// ```
///
/// ## 실패 (500 Internal Server Error)
/// 필수 필드 누락, 이메일 중복, 저장소 오류 모두 원본 메시지로 응답합니다.
/// ```json
/// { "message": "User validation failed: name is required" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/user \
///   -H "Authorization: Bearer $AUTH_TOKEN" \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John","email":"john@gmail.com"}'
/// ```
#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: Option<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let fields = require_body(payload)?;
    let response = service.create_user_fields(fields).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// 사용자가 없으면 빈 배열을 반환합니다.
#[get("/users")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// 존재하지 않는 ID와 ObjectId 형식이 아닌 ID 모두 404로 응답합니다.
/// ```json
/// { "message": "User not found with given id: 5da1fd003688ac19e6d60e73" }
/// ```
#[get("/user/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// 요청에 포함된 필드만 덮어쓰고 수정 후 문서를 반환합니다.
/// 빈 본문은 사용자 조회 전에 400으로 거부합니다.
/// 본문의 `id`/`_id` 키는 무시되므로 식별자는 바뀌지 않습니다.
#[put("/user/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    payload: Option<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let fields = require_body(payload)?;
    let user = service.update_user_fields(&id, fields).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제이며, 삭제된 문서를 200으로 반환합니다.
#[delete("/user/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let removed = service.delete_user(&id).await?;

    Ok(HttpResponse::Ok().json(removed))
}

/// 등록되지 않은 경로에 대한 기본 핸들러
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "Route not found: {} {}",
        req.method(),
        req.path()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_payload(value: Value) -> Option<UserPayload> {
        match value {
            Value::Object(map) => Some(Either::Left(web::Json(map))),
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_require_body_rejects_missing_and_empty() {
        let expected = AppError::BadRequest(EMPTY_BODY_MESSAGE.to_string());

        assert_eq!(require_body(None).unwrap_err(), expected);
        assert_eq!(require_body(json_payload(json!({}))).unwrap_err(), expected);
        assert_eq!(require_body(json_payload(json!({ "id": "x" }))).unwrap_err(), expected);
    }

    #[test]
    fn test_require_body_keeps_mistyped_fields_for_validation() {
        let fields = require_body(json_payload(json!({ "age": "abc" }))).unwrap();
        assert_eq!(fields.get("age"), Some(&json!("abc")));
    }

    #[test]
    fn test_require_body_accepts_form_fields() {
        let form = HashMap::from([
            ("name".to_string(), "John".to_string()),
            ("age".to_string(), "35".to_string()),
        ]);

        let fields = require_body(Some(Either::Right(web::Form(form)))).unwrap();

        assert_eq!(fields.get("name"), Some(&json!("John")));
        assert_eq!(fields.get("age"), Some(&json!("35")));
    }
}
