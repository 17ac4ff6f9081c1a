//! 정적 Bearer 토큰 가드 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 모든 요청의 `Authorization` 헤더를 검사합니다.
//! 라우팅보다 먼저 실행되므로 존재하지 않는 경로도 예외 없이 검사됩니다.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::config::AuthConfig;
use crate::middlewares::token_inner::TokenGuardService;

/// 정적 토큰 가드
///
/// | 요청 | 결과 |
/// |------|------|
/// | `Authorization` 없음 또는 빈 값 | 403 `Authorization token is not supplied` |
/// | 토큰 불일치 | 401 `Invalid authorization token` |
/// | `Authorization: <token>` / `Authorization: Bearer <token>` | 다음 서비스로 전달 |
///
/// ```rust,ignore
/// App::new()
///     .wrap(TokenGuard::new(config.auth.clone()))
///     .configure(configure_all_routes)
/// ```
#[derive(Clone, Debug)]
pub struct TokenGuard {
    auth: Arc<AuthConfig>,
}

impl TokenGuard {
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for TokenGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = TokenGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenGuardService {
            service,
            auth: Arc::clone(&self.auth),
        }))
    }
}
