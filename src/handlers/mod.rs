//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 유스케이스 호출로 매핑하고, 결과를 상태 코드와 JSON 본문으로
//! 변환합니다. 에러는 `AppError`를 그대로 반환하여 `ResponseError` 구현이
//! 로깅과 직렬화를 한 곳에서 처리하도록 합니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB
//! ```
//!
//! 서비스는 `web::Data<...Service>`로 주입받습니다
//! ([`Services::register`](crate::core::container::Services::register) 참고).

pub mod blogs;
pub mod comments;
pub mod payload;
pub mod users;
