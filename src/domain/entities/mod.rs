//! # Domain Entities
//!
//! MongoDB에 저장되는 도메인 엔티티 모듈입니다.

pub mod users;
