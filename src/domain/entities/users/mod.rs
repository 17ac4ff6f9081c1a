//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::from_request(request)?;
//! ```

pub mod user;

pub use user::User;
