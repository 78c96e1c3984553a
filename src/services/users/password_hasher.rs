//! 비밀번호 해싱 추상화
//!
//! 서비스는 [`PasswordHasher`] trait 에만 의존하고, 운영 환경에서는
//! 설정된 cost 를 쓰는 [`BcryptHasher`]를 주입합니다.

use std::time::Instant;

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// 단방향 비밀번호 해싱
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해싱합니다. 호출마다 새 솔트가 사용됩니다.
    ///
    /// CPU 를 오래 점유하므로 async 컨텍스트에서는 블로킹 풀에서 호출해야 합니다.
    fn hash(&self, plain: &str) -> AppResult<String>;
}

/// bcrypt 기반 [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        let started = Instant::now();

        let hashed = bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);

        Ok(hashed)
    }
}
