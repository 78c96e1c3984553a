//! # BSON 유틸리티
//!
//! ObjectId 파싱과 타임스탬프 포맷팅 등 BSON 타입 변환 함수들입니다.

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::errors::AppError;

/// 24자리 16진수 문자열을 ObjectId 로 파싱합니다.
///
/// 형식이 맞지 않으면 `None`을 반환합니다. 읽기 경로에서는 이 결과를
/// "존재하지 않음"으로 취급합니다.
///
/// ```rust,ignore
/// assert!(parse_object_id("507f1f77bcf86cd799439011").is_some());
/// assert!(parse_object_id("not-an-id").is_none());
/// ```
pub fn parse_object_id(value: &str) -> Option<ObjectId> {
    ObjectId::parse_str(value.trim()).ok()
}

/// 쓰기 페이로드의 참조 id 를 파싱합니다.
///
/// 형식이 맞지 않으면 `ValidationError(message)`를 반환합니다.
pub fn require_object_id(value: &str, message: &str) -> Result<ObjectId, AppError> {
    parse_object_id(value).ok_or_else(|| AppError::ValidationError(message.to_string()))
}

/// BSON DateTime 을 RFC 3339 문자열로 변환합니다.
///
/// RFC 3339 로 표현할 수 없는 범위의 값은 epoch 밀리초 문자열로 대체합니다.
pub fn to_rfc3339(value: &DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()), Some(id));
        assert_eq!(parse_object_id("abc"), None);
        assert_eq!(parse_object_id(""), None);
    }

    #[test]
    fn test_require_object_id_maps_to_validation_error() {
        match require_object_id("zzz", "Invalid author id") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Invalid author id"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_to_rfc3339() {
        let dt = DateTime::from_millis(0);

        assert_eq!(to_rfc3339(&dt), "1970-01-01T00:00:00Z");
    }
}
