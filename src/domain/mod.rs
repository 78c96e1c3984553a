//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/  - MongoDB 문서와 참조 해석 읽기 뷰
//! └── dto/       - HTTP 요청/응답 계약
//! ```
//!
//! 엔티티는 BSON 타입(`ObjectId`, `DateTime`)을 그대로 사용하고,
//! DTO 는 이를 16진수 id 와 RFC 3339 문자열로 변환합니다.

pub mod dto;
pub mod entities;
