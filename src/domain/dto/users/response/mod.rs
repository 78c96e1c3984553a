//! # 사용자 관련 응답 DTO 모듈
//!
//! 응답 필드명은 문서 형식을 그대로 따릅니다 (`_id`, `createdAt`, `updatedAt`).
//! id 는 16진수 문자열, 타임스탬프는 RFC 3339 문자열로 직렬화됩니다.
//!
//! ```json
//! {
//!   "_id": "665f1c2e9b1e8a3d4c5b6a70",
//!   "username": "alice",
//!   "email": "alice@example.com",
//!   "createdAt": "2024-06-04T12:00:00Z",
//!   "updatedAt": "2024-06-04T12:00:00Z"
//! }
//! ```
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

pub mod user_response;

pub use user_response::{AuthorResponse, UserResponse};
