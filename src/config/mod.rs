//! # Configuration Module
//!
//! 블로그 API 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`] 하나로 모아 시작 시점에 로드합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 데이터베이스
//! export MONGO_URI="mongodb://localhost:27017"   # MONGODB_URI 도 허용
//! export DATABASE_NAME="blog_api"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # 환경 / 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="10"          # 4-31 범위
//!
//! # Rate Limiting / CORS
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;

pub use data_config::*;
