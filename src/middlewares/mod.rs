//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 토큰 가드 (TokenGuard)
//! - `Authorization` 헤더의 정적 토큰 검증 (`Bearer ` 접두사 선택)
//! - 실패 시 핸들러에 도달하기 전에 403/401 JSON 응답으로 종료
//! - 모든 경로에 예외 없이 적용
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::TokenGuard;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(TokenGuard::new(auth_config.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod token_guard;
mod token_inner;

pub use token_guard::TokenGuard;
pub use token_inner::check_token;
