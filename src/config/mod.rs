//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수를 시작 시 한 번 읽어 불변 [`AppConfig`]를 만들고,
//! 이를 토큰 가드와 데이터베이스 연결에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, MongoDB, Rate Limiting 설정
//! - [`auth_config`] - 정적 인증 토큰 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export AUTH_TOKEN="your-secret-token"
//!
//! # 선택 (괄호 안은 기본값)
//! export DB_HOST="localhost:27017"   # (localhost:27017)
//! export DB_NAME="users"             # (users)
//! export HOST="0.0.0.0"              # (0.0.0.0)
//! export PORT="8080"                 # (8080)
//! export RATE_LIMIT_PER_SECOND="100" # (100)
//! export RATE_LIMIT_BURST_SIZE="200" # (200)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_service_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;
use thiserror::Error;

/// 설정 키로 값을 조회하는 함수
///
/// 실제 실행에서는 `std::env::var`, 테스트에서는 고정된 맵을 사용합니다.
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 설정 로드 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    /// 값을 해석할 수 없음
    #[error("environment variable {key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 읽습니다.
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            database: DatabaseConfig::from_lookup(lookup)?,
            auth: AuthConfig::from_lookup(lookup)?,
            rate_limit: RateLimitConfig::from_lookup(lookup)?,
        })
    }
}

/// 값이 있으면 파싱하고, 없으면 기본값을 사용합니다.
fn parse_or<T: FromStr>(key: &'static str, lookup: &Lookup<'_>, default: T) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
