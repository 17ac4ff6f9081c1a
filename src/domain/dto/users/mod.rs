//! # Users DTO Module
//!
//! 사용자 API의 요청/응답 데이터 전송 객체입니다.
//!
//! ```text
//! users/
//! ├── request/   - UserRequest (생성/수정 공용)
//! └── response/  - UserResponse
//! ```

pub mod request;
pub mod response;
