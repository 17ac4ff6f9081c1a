//! # Application Error Handling System
//!
//! 사용자 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 모든 에러가 `{"message": ...}` 형태의 JSON 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MissingToken` | 403 Forbidden | Authorization 헤더 없음 |
//! | `InvalidToken` | 401 Unauthorized | 토큰 불일치 |
//! | `BadRequest` | 400 Bad Request | 비어 있는 요청 본문 |
//! | `NotFound` | 404 Not Found | 사용자 또는 라우트 없음 |
//! | `InvalidId` | 404 Not Found | ObjectId 형식이 아닌 ID |
//! | `ValidationError` | 500 Internal Server Error | 필수 필드 누락 |
//! | `ConflictError` | 500 Internal Server Error | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 검증 실패와 중복 키 에러는 인프라 장애와 구분하지 않고 500으로 응답합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn load(repo: &dyn UserRepository, id: &str) -> AppResult<User> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User not found with given id: {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 구현이 그대로 응답 본문의 `message` 필드가 됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Authorization 헤더가 없거나 비어 있음 (403 Forbidden)
    #[error("Authorization token is not supplied")]
    MissingToken,

    /// 토큰이 설정된 비밀 값과 일치하지 않음 (401 Unauthorized)
    #[error("Invalid authorization token")]
    InvalidToken,

    /// 잘못된 요청 (400 Bad Request)
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// ObjectId로 해석할 수 없는 식별자 (404 Not Found)
    ///
    /// 서비스 계층에서 `NotFound`로 접히지만, 직접 응답되더라도 404가 됩니다.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// 모델 검증 실패 (500 Internal Server Error)
    #[error("{0}")]
    ValidationError(String),

    /// 유니크 제약 위반 (500 Internal Server Error)
    #[error("{0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("{0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("{0}")]
    InternalError(String),
}

/// 모든 에러 응답의 본문
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// 빈 메시지를 가진 에러를 대체 메시지로 채웁니다.
    ///
    /// 하위 계층이 메시지 없이 실패한 경우에도 응답의 `message`가 비지 않도록 합니다.
    pub fn or_message(self, fallback: &str) -> Self {
        if !self.to_string().trim().is_empty() {
            return self;
        }

        match self {
            AppError::BadRequest(_) => AppError::BadRequest(fallback.to_string()),
            AppError::NotFound(_) => AppError::NotFound(fallback.to_string()),
            AppError::ValidationError(_) => AppError::ValidationError(fallback.to_string()),
            AppError::ConflictError(_) => AppError::ConflictError(fallback.to_string()),
            AppError::DatabaseError(_) => AppError::DatabaseError(fallback.to_string()),
            _ => AppError::InternalError(fallback.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::FORBIDDEN,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::InvalidId(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.to_string(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(AppError::MissingToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_request_error_status_codes() {
        assert_eq!(
            AppError::BadRequest("Request body can not be empty".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("User not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidId("abc".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_persistence_errors_are_server_errors() {
        let errors = [
            AppError::ValidationError("name is required".to_string()),
            AppError::ConflictError("duplicate key".to_string()),
            AppError::DatabaseError("connection refused".to_string()),
            AppError::InternalError("boom".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[actix_web::test]
    async fn test_error_body_carries_message() {
        let response = AppError::InvalidToken.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.message, "Invalid authorization token");
    }

    #[test]
    fn test_or_message_fills_blank_messages() {
        let error = AppError::DatabaseError(String::new()).or_message("fallback");
        assert_eq!(error, AppError::DatabaseError("fallback".to_string()));

        let kept = AppError::ConflictError("duplicate".to_string()).or_message("fallback");
        assert_eq!(kept, AppError::ConflictError("duplicate".to_string()));
    }
}
