//! 사용자 관리 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 설정 오류나 데이터베이스 연결 실패 시 즉시 종료합니다.

use std::process;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::app::{build_app, rate_limiter_config};
use user_service_backend::config::AppConfig;
use user_service_backend::db::Database;
use user_service_backend::repositories::users::MongoUserRepository;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!("설정 로드 실패: {}", e);
        process::exit(1);
    });

    let user_service = initialize_user_service(&config).await;

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 스택은 [`build_app`]이 구성합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, user_service: UserService) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    let rate_limiter = rate_limiter_config(&config.rate_limit).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "RATE_LIMIT_PER_SECOND, RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
        )
    })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let user_service = web::Data::new(user_service);
    let auth = config.auth;

    HttpServer::new(move || build_app(user_service.clone(), auth.clone(), rate_limiter.clone()))
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 그 외 또는 미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            if dotenv().is_ok() {
                info!("기본 .env 파일 로드");
            }
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB에 연결하고 인덱스를 보장한 뒤 사용자 서비스를 만듭니다
///
/// 연결이나 인덱스 생성에 실패하면 프로세스를 종료합니다.
async fn initialize_user_service(config: &AppConfig) -> UserService {
    info!("📡 데이터베이스 연결 중... ({})", config.database.uri());

    let database = Database::connect(&config.database).await.unwrap_or_else(|e| {
        error!("MongoDB 연결 실패: {}", e);
        process::exit(1);
    });

    let repository = MongoUserRepository::new(&database);
    if let Err(e) = repository.create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
        process::exit(1);
    }

    info!("✅ {} 데이터베이스 준비 완료", database.database_name());

    UserService::new(Arc::new(repository))
}
