//! # 블로그 DTO 모듈
//!
//! 쓰기 응답은 저장된 최소 형태(원시 작성자 id)를, 읽기 응답은 작성자가
//! `{_id, username}`으로 해석된 형태를 반환합니다.

pub mod request;
pub mod response;

pub use request::CreateBlogRequest;
pub use response::{BlogDetailResponse, BlogResponse};
