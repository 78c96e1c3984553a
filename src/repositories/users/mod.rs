//! 사용자 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo = MongoUserRepository::new(database.clone());
//! let profile = repo.find_by_id(id).await?;
//! ```

pub mod user_repo;

#[cfg(test)]
pub use user_repo::MockUserRepository;
pub use user_repo::{MongoUserRepository, UserRepository};
