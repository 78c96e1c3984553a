use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::users::{AuthorSummary, UserProfile};
use crate::utils::bson_utils::to_rfc3339;

/// 사용자 응답 DTO (비밀번호 제외)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            username,
            email,
            created_at,
            updated_at,
        } = profile;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            created_at: to_rfc3339(&created_at),
            updated_at: to_rfc3339(&updated_at),
        }
    }
}

/// 참조 해석된 작성자 응답 `{_id, username}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.to_hex(),
            username: author.username,
        }
    }
}
