//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트를 `/api` 스코프 아래에 등록합니다.
//! 토큰 가드와 기본(404) 서비스는 `App` 단위로 적용되므로 여기서는 다루지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .wrap(TokenGuard::new(config.auth.clone()))
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes)
//!     .default_service(web::to(handlers::users::route_not_found));
//! ```

use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/user` - 사용자 생성
/// - `GET /api/users` - 사용자 목록
/// - `GET /api/user/{id}` - 사용자 조회
/// - `PUT /api/user/{id}` - 사용자 수정
/// - `DELETE /api/user/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/users \
///   -H "Authorization: Bearer $AUTH_TOKEN"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}
