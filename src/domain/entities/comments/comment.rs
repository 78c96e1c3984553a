//! Comment Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::AuthorSummary;

/// 댓글 엔티티 (`comments` 컬렉션 문서)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content: String,
    /// `users._id` 참조
    pub author: ObjectId,
    /// `blogs._id` 참조
    pub blog: ObjectId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(content: String, author: ObjectId, blog: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            content,
            author,
            blog,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 작성자가 해석된 댓글 읽기 뷰. `blog`는 원시 id 로 남습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
    pub blog: ObjectId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}
