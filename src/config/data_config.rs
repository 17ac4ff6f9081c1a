//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, Rate Limiting 관련 설정을 관리합니다.

use super::{ConfigError, Lookup};

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    /// `HOST`, `PORT` 값을 읽어 서버 설정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Invalid` - `PORT`가 u16으로 파싱되지 않는 경우
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = super::parse_or("PORT", lookup, Self::DEFAULT_PORT)?;

        Ok(Self { host, port })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// 호스트명 또는 `host:port`. 기본값: "localhost:27017"
    pub host: String,
    /// 사용할 데이터베이스 이름. 기본값: "users"
    pub name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_HOST: &'static str = "localhost:27017";
    pub const DEFAULT_NAME: &'static str = "users";

    /// `DB_HOST`, `DB_NAME` 값을 읽어 데이터베이스 설정을 만듭니다.
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let host = lookup("DB_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let name = lookup("DB_NAME").unwrap_or_else(|| Self::DEFAULT_NAME.to_string());

        if name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "DB_NAME",
                value: name,
            });
        }

        Ok(Self { host, name })
    }

    /// MongoDB 연결 URI (`mongodb://<host>/<name>`)
    pub fn uri(&self) -> String {
        format!("mongodb://{}/{}", self.host, self.name)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (기본값: 100)
    pub per_second: u64,
    /// 버스트 허용량 (기본값: 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` 값을 읽습니다.
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self, ConfigError> {
        let per_second = super::parse_or("RATE_LIMIT_PER_SECOND", lookup, 100)?;
        let burst_size = super::parse_or("RATE_LIMIT_BURST_SIZE", lookup, 200)?;

        if per_second == 0 || burst_size == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_PER_SECOND",
                value: format!("{}/{}", per_second, burst_size),
            });
        }

        Ok(Self {
            per_second,
            burst_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(&lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_config_rejects_bad_port() {
        let result = ServerConfig::from_lookup(&lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }

    #[test]
    fn test_database_uri() {
        let config = DatabaseConfig::from_lookup(&lookup_from(&[
            ("DB_HOST", "mongo:27017"),
            ("DB_NAME", "crud"),
        ]))
        .unwrap();

        assert_eq!(config.uri(), "mongodb://mongo:27017/crud");
    }

    #[test]
    fn test_rate_limit_defaults() {
        let config = RateLimitConfig::from_lookup(&lookup_from(&[])).unwrap();

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 200);
    }
}
