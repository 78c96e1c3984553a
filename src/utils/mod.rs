//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`bson_utils`] - ObjectId 파싱, 타임스탬프 포맷팅

pub mod bson_utils;
