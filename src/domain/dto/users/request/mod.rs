//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//! 필드 존재 여부 검증은 `validator` 크레이트로 선언하고, 실제 검증 호출은
//! 서비스 계층에서 수행합니다. 검증 실패는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod register_user;

pub use register_user::RegisterUserRequest;
