//! User Entity Implementation
//!
//! `users` 컬렉션 문서와 그 읽기 전용 투영(projection)을 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::blogs::Blog;

/// 사용자 엔티티 (`users` 컬렉션 문서)
///
/// `password`는 bcrypt 해시이며 읽기 경로에서는 절대 반환되지 않습니다.
/// 읽기 결과는 항상 [`UserProfile`]로 투영됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 문서 생성
    ///
    /// `password_hash`는 이미 해싱된 값이어야 합니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password: password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// 비밀번호를 제외한 프로필로 변환합니다.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 비밀번호가 제외된 사용자 투영
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

/// 참조 해석(populate)된 작성자 요약 `{_id, username}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
}

/// 사용자와 작성한 블로그 목록
///
/// `users` 에서 시작해 `blogs`를 `$lookup` 한 집계 결과입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBlogs {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub blogs: Vec<Blog>,
}
