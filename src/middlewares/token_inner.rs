//! TokenGuard 검사 로직의 핵심적인 기능
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::config::AuthConfig;
use crate::core::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// 실제 토큰 검사를 수행하는 서비스
pub struct TokenGuardService<S> {
    pub service: S,
    pub auth: Arc<AuthConfig>,
}

impl<S, B> Service<ServiceRequest> for TokenGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = check_token(req.headers(), &self.auth) {
            log::warn!("토큰 검사 실패: {} {} ({})", req.method(), req.path(), err);
            let res = req.error_response(err).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더를 설정된 토큰과 비교합니다.
///
/// `"Bearer "` 접두사는 선택이며, 있으면 제거한 뒤 비교합니다.
///
/// # Errors
///
/// * `AppError::MissingToken` - 헤더가 없거나 값이 비어 있음
/// * `AppError::InvalidToken` - 토큰 불일치 또는 ASCII가 아닌 헤더 값
pub fn check_token(headers: &HeaderMap, auth: &AuthConfig) -> AppResult<()> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::MissingToken),
    };

    let raw = value.to_str().map_err(|_| AppError::InvalidToken)?;
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);

    if auth.matches(token) {
        Ok(())
    } else {
        Err(AppError::InvalidToken)
    }
}
