//! # 사용자 DTO 모듈
//!
//! ```text
//! users/
//! ├── request/
//! │   └── register_user.rs   # POST /api/users
//! └── response/
//!     └── user_response.rs   # UserResponse, AuthorResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
