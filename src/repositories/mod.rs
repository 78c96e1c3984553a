//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티마다 async trait 하나와 MongoDB 구현체 하나를 둡니다.
//! 서비스는 trait 객체(`Arc<dyn ...Repository>`)에만 의존하므로 테스트에서는
//! `mockall`이 생성한 `Mock*Repository`로 교체합니다.
//!
//! | Trait | 구현체 | 컬렉션 |
//! |-------|--------|--------|
//! | [`UserRepository`](users::UserRepository) | `MongoUserRepository` | `users` |
//! | [`BlogRepository`](blogs::BlogRepository) | `MongoBlogRepository` | `blogs` |
//! | [`CommentRepository`](comments::CommentRepository) | `MongoCommentRepository` | `comments` |
//!
//! 드라이버 에러는 `?`로 `AppError`에 한 번만 변환됩니다.

pub mod blogs;
pub mod comments;
pub mod pipelines;
pub mod users;
