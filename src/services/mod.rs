//! 비즈니스 로직을 담당하는 서비스(유스케이스) 계층 모듈
//!
//! 필수 필드 검증, "찾을 수 없음"의 타입 에러 변환, 비밀번호 해싱 조율을 담당합니다.
//! 서비스는 가변 상태를 갖지 않으며 `Arc`로 주입된 저장소만 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::blogs::BlogService;
//!
//! let blog_service = BlogService::new(blog_repo);
//! let blog = blog_service.get_blog(&id).await?;
//! ```

pub mod blogs;
pub mod comments;
pub mod users;
