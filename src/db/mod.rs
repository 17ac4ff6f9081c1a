//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]로 명시적으로 전달받습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use user_service_backend::config::AppConfig;
//! use user_service_backend::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에 `mongodb::Database` 핸들을 제공합니다.
#[derive(Clone, Debug)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 연결 풀을 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정에 따라 MongoDB에 연결하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&config.database).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 클라이언트 생성 실패, ping 실패
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let uri = config.uri();

        let mut client_options = ClientOptions::parse(&uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Invalid MongoDB URI {}: {}", uri, e)))?;

        // 서버 측 모니터링에서 식별할 수 있도록 애플리케이션 이름 설정
        client_options.app_name = Some("user_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to reach MongoDB at {}: {}", uri, e)))?;

        info!("✅ MongoDB 연결 성공: {}", uri);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users_collection = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
