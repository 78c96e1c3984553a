//! # 댓글 DTO 모듈

pub mod request;
pub mod response;

pub use request::CreateCommentRequest;
pub use response::{CommentDetailResponse, CommentResponse};
