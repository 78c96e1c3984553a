//! 사용자 등록 요청 DTO
//!
//! 모든 필드는 `Option`으로 받아 누락과 빈 문자열을 같은 검증 실패로 다룹니다.
//! 형식(이메일 패턴, 비밀번호 강도 등) 검사는 하지 않습니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 사용자 등록 요청 DTO
///
/// `username`, `email`, `password` 모두 존재하고 비어 있지 않아야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "alice")]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    /// 평문 비밀번호. 서비스 계층에서 해싱 후 폐기됩니다.
    #[validate(required, length(min = 1))]
    #[schema(example = "secret")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(request(Some("alice"), Some("a@x.com"), Some("secret")).validate().is_ok());
    }

    #[test]
    fn test_missing_or_empty_fields_are_rejected() {
        assert!(request(None, Some("a@x.com"), Some("secret")).validate().is_err());
        assert!(request(Some("alice"), Some(""), Some("secret")).validate().is_err());
        assert!(request(Some("alice"), Some("a@x.com"), None).validate().is_err());
        assert!(RegisterUserRequest::default().validate().is_err());
    }

    #[test]
    fn test_deserializes_partial_json() {
        let parsed: RegisterUserRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();

        assert_eq!(parsed.username.as_deref(), Some("alice"));
        assert!(parsed.email.is_none());
    }
}
