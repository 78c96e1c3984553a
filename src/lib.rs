//! 블로그 서비스 백엔드
//!
//! 사용자, 블로그, 댓글을 다루는 REST API 입니다.
//! 핵심은 유스케이스 계층의 필수 필드 검증과 에러 전파이며,
//! 저장소는 MongoDB, HTTP 계층은 actix-web 을 사용합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/users, /api/blogs, /api/comments, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, not-found 변환, 비밀번호 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← async trait + MongoDB 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users, blogs, comments
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blog_service_backend::config::AppConfig;
//! use blog_service_backend::core::container::Services;
//! use blog_service_backend::db::Database;
//!
//! let config = AppConfig::from_env();
//! let database = Arc::new(Database::connect(&config.database).await?);
//! let services = Services::from_database(database, &config).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
