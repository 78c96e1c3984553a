use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dto::users::AuthorResponse;
use crate::domain::entities::blogs::{Blog, BlogView};
use crate::utils::bson_utils::to_rfc3339;

/// 블로그 응답 DTO (작성자는 원시 id)
///
/// 생성 결과와 사용자별 블로그 목록에 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: blog.title,
            content: blog.content,
            author: blog.author.to_hex(),
            created_at: to_rfc3339(&blog.created_at),
            updated_at: to_rfc3339(&blog.updated_at),
        }
    }
}

/// 작성자가 해석된 블로그 응답 DTO
///
/// 작성자 참조가 끊어진 경우 `author`는 `null`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogDetailResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Option<AuthorResponse>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<BlogView> for BlogDetailResponse {
    fn from(view: BlogView) -> Self {
        Self {
            id: view.id.to_hex(),
            title: view.title,
            content: view.content,
            author: view.author.map(AuthorResponse::from),
            created_at: to_rfc3339(&view.created_at),
            updated_at: to_rfc3339(&view.updated_at),
        }
    }
}
