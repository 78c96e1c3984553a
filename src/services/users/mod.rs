//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 ([`password_hasher::BcryptHasher`])
//! - 읽기 결과에서 비밀번호 제외
//! - 사용자명/이메일 중복은 저장소의 유니크 인덱스로 방지

pub mod password_hasher;
pub mod user_service;

pub use password_hasher::{BcryptHasher, PasswordHasher};
pub use user_service::UserService;
