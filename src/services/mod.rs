//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 서비스는 생성 시 리포지토리를 명시적으로 주입받으며,
//! 핸들러에는 `web::Data`로 전달됩니다.
//!
//! ```rust,ignore
//! let service = web::Data::new(UserService::new(repository));
//! App::new().app_data(service.clone());
//! ```

pub mod users;
