//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀은 드라이버의 [`Client`]가 관리하며, 이 모듈은 연결 수립, 핑 검증,
//! 컬렉션 핸들 제공, 종료 처리만 담당합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//! use crate::db::Database;
//!
//! let config = AppConfig::from_env();
//! let database = Database::connect(&config.database).await?;
//! let blogs = database.collection::<Blog>(Database::BLOGS);
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{Client, Collection, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 시작 시 한 번 생성되어 리포지토리 생성자에 전달됩니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub const USERS: &'static str = "users";
    pub const BLOGS: &'static str = "blogs";
    pub const COMMENTS: &'static str = "comments";

    /// MongoDB에 연결하고 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// 드라이버 레벨 타임아웃은 연결 문자열의 옵션을 따릅니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("blog_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 진행 중인 커서/세션이 정리되기를 기다린 뒤 연결 풀을 닫습니다.
    pub async fn shutdown(&self) {
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
        self.client.clone().shutdown().await;
    }
}
