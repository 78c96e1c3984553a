use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 블로그 생성 요청 DTO
///
/// `title`과 `content`만 선언적으로 검증합니다. `author`는 페이로드에서
/// 그대로 전달되며 서비스 계층에서 ObjectId 형식만 확인합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBlogRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub content: Option<String>,

    /// 작성자 `users._id` (16진수 문자열)
    #[serde(default)]
    #[schema(example = "665f1c2e9b1e8a3d4c5b6a70")]
    pub author: Option<String>,
}

impl CreateBlogRequest {
    /// 작성자 id 를 분리합니다. 나머지 필드는 그대로 남습니다.
    pub fn take_author(&mut self) -> String {
        self.author.take().unwrap_or_default()
    }
}
