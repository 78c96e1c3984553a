use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 댓글 생성 요청 DTO
///
/// 세 필드 모두 존재하고 비어 있지 않아야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(required, length(min = 1))]
    pub content: Option<String>,

    /// 작성자 `users._id`
    #[validate(required, length(min = 1))]
    pub author: Option<String>,

    /// 대상 `blogs._id`
    #[validate(required, length(min = 1))]
    pub blog: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_only_is_invalid() {
        let request: CreateCommentRequest = serde_json::from_str(r#"{"content":"nice"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_complete_request_is_valid() {
        let request = CreateCommentRequest {
            content: Some("nice".to_string()),
            author: Some("a".to_string()),
            blog: Some("b".to_string()),
        };

        assert!(request.validate().is_ok());
    }
}
