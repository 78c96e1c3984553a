//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조와, 참조 해석(`$lookup`) 결과를
//! 담는 읽기 뷰를 정의합니다.
//!
//! ```text
//! users ◄──── blogs.author
//!   ▲           ▲
//!   │           │
//! comments.author   comments.blog
//! ```
//!
//! 참조 무결성은 저장 시점에 검사하지 않습니다. 끊어진 작성자 참조는 읽기
//! 뷰에서 `author: None`으로 나타납니다.
//!
//! | 컬렉션 | 문서 | 읽기 뷰 |
//! |--------|------|---------|
//! | `users` | [`User`] | [`UserProfile`], [`UserBlogs`] |
//! | `blogs` | [`Blog`] | [`BlogView`] |
//! | `comments` | [`Comment`] | [`CommentView`] |

pub mod blogs;
pub mod comments;
pub mod users;

pub use blogs::*;
pub use comments::*;
pub use users::*;
