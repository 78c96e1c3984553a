//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티(BSON 문서)와 HTTP JSON 계약을 분리합니다.
//!
//! | 구분 | 역할 |
//! |------|------|
//! | `request` | HTTP 요청 본문 매핑 + `validator` 필드 선언 |
//! | `response` | HTTP 응답 본문 매핑 (`_id`, `createdAt`, `updatedAt`) |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/      # RegisterUserRequest, UserResponse, AuthorResponse
//! ├── blogs/      # CreateBlogRequest, BlogResponse, BlogDetailResponse
//! └── comments/   # CreateCommentRequest, CommentResponse, CommentDetailResponse
//! ```

pub mod blogs;
pub mod comments;
pub mod users;

pub use blogs::{BlogDetailResponse, BlogResponse, CreateBlogRequest};
pub use comments::{CommentDetailResponse, CommentResponse, CreateCommentRequest};
pub use users::{AuthorResponse, RegisterUserRequest, UserResponse};
