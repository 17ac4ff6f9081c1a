//! # HTTP 애플리케이션 조립
//!
//! 미들웨어 스택과 라우트를 하나의 `App`으로 구성합니다.
//! `main`의 `HttpServer`와 테스트가 같은 조립 함수를 사용합니다.
//!
//! ## 미들웨어 실행 순서
//!
//! `wrap`은 나중에 등록한 것이 바깥쪽에서 먼저 실행됩니다.
//!
//! ```text
//! NormalizePath → Logger → CORS → TokenGuard → Governor → 라우팅 / 기본 404
//! ```
//!
//! `Governor`는 헤더 모드(`use_headers`)에서 내부 서비스의 Future가 `Unpin`이어야 하므로
//! 라우팅 바로 바깥, 가장 안쪽에 둡니다.

use actix_cors::Cors;
use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{middleware, web, App};

use crate::config::{AuthConfig, RateLimitConfig};
use crate::handlers::users::route_not_found;
use crate::middlewares::TokenGuard;
use crate::routes::configure_all_routes;
use crate::services::users::UserService;

/// 피어 IP 기준, 응답에 `x-ratelimit-*` 헤더를 붙이는 Rate Limiting 설정
pub type RateLimiterConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate Limiting 설정으로 governor 설정을 만듭니다
///
/// 초당 요청 수나 버스트 크기가 0이면 `None`을 반환합니다.
pub fn rate_limiter_config(rate_limit: &RateLimitConfig) -> Option<RateLimiterConfig> {
    if rate_limit.per_second == 0 {
        return None;
    }

    GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
}

/// 사용자 서비스 애플리케이션을 구성합니다
///
/// # Examples
///
/// ```rust,ignore
/// HttpServer::new(move || {
///     build_app(user_service.clone(), auth.clone(), rate_limiter.clone())
/// })
/// ```
pub fn build_app(
    user_service: web::Data<UserService>,
    auth: AuthConfig,
    rate_limiter: RateLimiterConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(user_service)
        .wrap(Governor::new(&rate_limiter))
        .wrap(TokenGuard::new(auth))
        .wrap(configure_cors())
        .wrap(middleware::Logger::default())
        .wrap(middleware::NormalizePath::trim())
        .configure(configure_all_routes)
        .default_service(web::to(route_not_found))
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발용 프론트엔드 Origin과 사용자 API가 쓰는 메서드/헤더만 허용합니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
