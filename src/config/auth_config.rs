//! 인증 설정 관리 모듈
//!
//! 모든 요청이 제시해야 하는 정적 Bearer 토큰을 관리합니다.

use std::fmt;

use super::{ConfigError, Lookup};

/// 토큰 가드가 비교에 사용하는 비밀 값
///
/// 시작 시 한 번 만들어진 뒤 변경되지 않습니다.
#[derive(Clone, PartialEq)]
pub struct AuthConfig {
    token: String,
}

impl AuthConfig {
    /// 주어진 토큰으로 설정을 만듭니다.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// `AUTH_TOKEN` 값을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 값이 없거나 공백뿐인 경우
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        match lookup("AUTH_TOKEN") {
            Some(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(ConfigError::Missing("AUTH_TOKEN")),
        }
    }

    /// 제시된 토큰이 설정값과 일치하는지 확인합니다.
    pub fn matches(&self, candidate: &str) -> bool {
        self.token == candidate
    }
}

// 비밀 값이 로그에 남지 않도록 Debug 출력에서 가립니다.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig").field("token", &"***").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let result = AuthConfig::from_lookup(&|_| None);
        assert!(matches!(result, Err(ConfigError::Missing("AUTH_TOKEN"))));

        let blank = AuthConfig::from_lookup(&|_| Some("   ".to_string()));
        assert!(blank.is_err());
    }

    #[test]
    fn test_matches_exact_token_only() {
        let config = AuthConfig::new("s3cret");

        assert!(config.matches("s3cret"));
        assert!(!config.matches("s3cret "));
        assert!(!config.matches("Bearer s3cret"));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = AuthConfig::new("s3cret");
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
