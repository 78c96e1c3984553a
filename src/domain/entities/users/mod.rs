//! Users Entity Module
//!
//! 사용자 문서와 비밀번호가 제외된 읽기 투영을 정의합니다.

pub mod user;

pub use user::{AuthorSummary, User, UserBlogs, UserProfile};
