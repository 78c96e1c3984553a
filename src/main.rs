//! 블로그 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB 에 연결한 뒤 서비스를 조립하여 actix-web 서버를 구동합니다.
//! 서버가 종료(SIGINT/SIGTERM)되면 데이터베이스 연결을 닫습니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use blog_service_backend::config::{AppConfig, CorsConfig};
use blog_service_backend::core::container::Services;
use blog_service_backend::db::Database;
use blog_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let config = AppConfig::from_env();
    info!("🚀 블로그 서비스 시작중... ({:?})", config.environment);

    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::connect(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);

    let services = Services::from_database(database.clone(), &config)
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(&config, services).await;

    // 서버 종료 후 연결 정리
    database.shutdown().await;

    info!("👋 블로그 서비스 종료");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
/// actix-web 이 SIGINT/SIGTERM 을 받으면 진행 중인 요청을 마친 뒤 반환합니다.
async fn start_http_server(config: &AppConfig, services: Services) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    // Rate Limiting 설정
    let rate_limit = &config.rate_limit;
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("rate limit values must be greater than zero"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );
    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        let services = services.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| services.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.server.workers)
    .shutdown_timeout(30)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

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
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
