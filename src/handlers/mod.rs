//! # HTTP Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고, 결과를 JSON 응답으로 변환합니다.
//!
//! ```text
//! HTTP Request → TokenGuard → Handler → UserService → UserRepository
//!                                 │
//!                                 ▼
//!                  HttpResponse / AppError(ResponseError)
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `ResponseError` 구현에 의해 `{"message": ...}` 응답으로 자동 변환됩니다.

pub mod users;
