//! 사용자 서비스 메인 애플리케이션
//!
//! MongoDB 연결을 설정하고 Actix-web 기반의 사용자 CRUD REST API를 구동합니다.
//! 기동 중 실패하면 오류를 출력하고 종료 코드 1로 끝납니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{DatabaseConfig, RateLimitConfig, ServerConfig};
use user_service_backend::db::{init_db, Database};
use user_service_backend::errors::{AppError, AppResult};
use user_service_backend::repositories::users::MongoUserRepository;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::{StoreUserService, UserService};

#[actix_web::main]
async fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    if let Err(e) = run().await {
        error!("❌ 서비스 실행 실패: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// 저장소를 연결하고 HTTP 서버를 실행한 뒤, 종료 시 연결을 닫습니다.
async fn run() -> AppResult<()> {
    let database = initialize_data_store().await?;

    let user_repo = Arc::new(MongoUserRepository::new(&database));
    let user_service: Arc<dyn UserService> = Arc::new(StoreUserService::new(user_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let served = start_http_server(user_service).await;

    database.close().await;
    served
}

/// MongoDB 연결을 초기화하고 도달 가능한지 확인합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - `DATABASE_URL`이 비었거나 형식이 잘못됨
/// * `AppError::StoreError` - ping 실패
async fn initialize_data_store() -> AppResult<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = init_db(&DatabaseConfig::url()).await?;
    database.ping().await?;

    info!("✅ MongoDB 연결 성공");
    Ok(database)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 종료 신호를 받으면 진행 중인 요청을 마친 뒤 반환합니다.
///
/// # Errors
///
/// * `AppError::ServerError` - 포트 바인딩 실패 또는 서버 실행 오류
/// * `AppError::ConfigError` - Rate Limiting 설정 오류
async fn start_http_server(user_service: Arc<dyn UserService>) -> AppResult<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/apis/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| AppError::ConfigError("invalid rate limit configuration".to_string()))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let service_data = web::Data::from(user_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service_data.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)
        .map_err(|e| AppError::ServerError(format!("failed to bind {}: {}", bind_address, e)))?
        .run()
        .await
        .map_err(|e| AppError::ServerError(e.to_string()))
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    // 로거 초기화 전이므로 eprintln 사용
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_service_backend::handlers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
