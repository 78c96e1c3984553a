use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dto::users::AuthorResponse;
use crate::domain::entities::comments::{Comment, CommentView};
use crate::utils::bson_utils::to_rfc3339;

/// 댓글 생성 응답 DTO (참조는 원시 id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: String,
    pub blog: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            content: comment.content,
            author: comment.author.to_hex(),
            blog: comment.blog.to_hex(),
            created_at: to_rfc3339(&comment.created_at),
            updated_at: to_rfc3339(&comment.updated_at),
        }
    }
}

/// 작성자가 해석된 댓글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDetailResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: Option<AuthorResponse>,
    pub blog: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<CommentView> for CommentDetailResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id.to_hex(),
            content: view.content,
            author: view.author.map(AuthorResponse::from),
            blog: view.blog.to_hex(),
            created_at: to_rfc3339(&view.created_at),
            updated_at: to_rfc3339(&view.updated_at),
        }
    }
}
