//! Blog Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::AuthorSummary;

/// 블로그 엔티티 (`blogs` 컬렉션 문서)
///
/// `author`는 `users._id` 참조이며 존재 여부는 저장 시점에 검사하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub author: ObjectId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl Blog {
    pub fn new(title: String, content: String, author: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 작성자가 `{_id, username}`으로 해석된 블로그 읽기 뷰
///
/// 참조가 끊어진 작성자는 `None`(JSON `null`)으로 남습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}
