//! 댓글 데이터 액세스 계층

pub mod comment_repo;

#[cfg(test)]
pub use comment_repo::MockCommentRepository;
pub use comment_repo::{CommentRepository, MongoCommentRepository};
