//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 패스워드 해싱, Rate Limiting, CORS 설정을 관리합니다.
//! 모든 값은 시작 시점에 [`AppConfig::from_env`]로 한 번만 읽어 타입이 있는 구조체로 보관합니다.

use std::env;

/// 환경 변수 조회 함수 타입
///
/// 테스트에서는 프로세스 환경 대신 고정된 맵을 주입합니다.
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_or<T: std::str::FromStr>(lookup: Lookup<'_>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            log::error!("{} 파싱 실패: {:?}. 기본값 사용", key, raw);
            default
        }),
        None => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 빠른 해싱
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::detect(&process_env)
    }

    fn detect(lookup: Lookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 연결 URI (`MONGO_URI`, 없으면 `MONGODB_URI`)
    pub uri: String,
    /// 데이터베이스 이름 (`DATABASE_NAME`)
    pub database_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "blog_api";

    fn load(lookup: Lookup<'_>) -> Self {
        Self {
            uri: lookup("MONGO_URI")
                .or_else(|| lookup("MONGODB_URI"))
                .unwrap_or_else(|| Self::DEFAULT_URI.to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE.to_string()),
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// actix-web 워커 스레드 수
    pub workers: usize,
}

impl ServerConfig {
    fn load(lookup: Lookup<'_>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 3000),
            workers: parse_or::<usize>(lookup, "WORKERS", 4).max(1),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// bcrypt cost (4-31)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    fn load(lookup: Lookup<'_>, environment: Environment) -> Self {
        let fallback = Self::bcrypt_cost_for_env(environment);

        let bcrypt_cost = match lookup("BCRYPT_COST").map(|raw| raw.trim().parse::<u32>()) {
            Some(Ok(cost)) if (Self::MIN_COST..=Self::MAX_COST).contains(&cost) => cost,
            Some(_) => {
                log::warn!(
                    "BCRYPT_COST 는 {}-{} 범위여야 합니다. 기본값 {} 사용",
                    Self::MIN_COST,
                    Self::MAX_COST,
                    fallback
                );
                fallback
            }
            None => fallback,
        };

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 기본 bcrypt cost를 반환합니다.
    ///
    /// - Test: 4 (빠른 처리)
    /// - 그 외: 10
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Test => Self::MIN_COST,
            _ => 10,
        }
    }
}

/// 요청 Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    fn load(lookup: Lookup<'_>) -> Self {
        Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    fn load(lookup: Lookup<'_>) -> Self {
        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => [
                "http://localhost:3000",
                "http://127.0.0.1:3000",
                "http://localhost:8080",
                "http://127.0.0.1:8080",
            ]
            .iter()
            .map(|origin| origin.to_string())
            .collect(),
        };

        Self { allowed_origins }
    }
}

/// 애플리케이션 전체 설정
///
/// `main`에서 한 번 생성되어 데이터베이스 연결, 서비스 컨테이너,
/// HTTP 서버 구성에 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        let environment = Environment::detect(lookup);

        Self {
            environment,
            database: DatabaseConfig::load(lookup),
            server: ServerConfig::load(lookup),
            password: PasswordConfig::load(lookup, environment),
            rate_limit: RateLimitConfig::load(lookup),
            cors: CorsConfig::load(lookup),
        }
    }
}
