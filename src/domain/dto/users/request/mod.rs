//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 객체 또는 URL 인코딩 폼 (`serde`)
//! 2. **존재 검증**: 값이 있는 인식 필드가 하나라도 있는지 ([`UserRequest::has_known_field`])
//! 3. **타입 변환**: 필드 맵 → [`UserRequest`] (`age`는 숫자 문자열 허용)
//! 4. **형식 검증**: 빈 문자열 거부 (`validator`)
//!
//! 필수 필드 누락은 엔티티 생성 단계에서 검사합니다.

pub mod user_request;

pub use user_request::UserRequest;
