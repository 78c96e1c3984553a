//! 블로그 데이터 액세스 계층

pub mod blog_repo;

#[cfg(test)]
pub use blog_repo::MockBlogRepository;
pub use blog_repo::{BlogRepository, MongoBlogRepository};
