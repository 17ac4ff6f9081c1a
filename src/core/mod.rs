//! # Core Module
//!
//! 서비스 전반에서 공유되는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 변환

pub mod errors;

pub use errors::*;
