//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//!
//! - 읽기 경로는 `{ password: 0 }` 투영으로 해시를 제외합니다.
//! - `username`, `email` 유니크 인덱스가 중복을 막으며, 위반은
//!   `AppError::ConflictError`(409)로 변환됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::blogs::Blog;
use crate::domain::entities::users::{User, UserBlogs, UserProfile};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// 사용자 저장소 추상화
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// id 로 사용자를 조회합니다. 비밀번호는 포함되지 않습니다.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<UserProfile>>;

    /// 사용자 문서를 저장하고 비밀번호가 제외된 결과를 반환합니다.
    async fn create(&self, user: User) -> AppResult<UserProfile>;

    /// 사용자가 작성한 블로그 목록.
    ///
    /// 사용자가 존재하지 않으면 `None`, 블로그가 없으면 `Some(vec![])`입니다.
    async fn find_blogs_of(&self, id: ObjectId) -> AppResult<Option<Vec<Blog>>>;
}

/// MongoDB 기반 [`UserRepository`] 구현체
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.collection::<T>(Database::USERS)
    }

    /// `username`, `email` 유니크 인덱스를 생성합니다.
    ///
    /// 이미 중복 데이터가 있는 컬렉션에서는 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection::<User>()
            .create_indexes([username_index, email_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<UserProfile>> {
        let user = self
            .collection::<UserProfile>()
            .find_one(doc! { "_id": id })
            .projection(doc! { "password": 0 })
            .await?;

        Ok(user)
    }

    async fn create(&self, mut user: User) -> AppResult<UserProfile> {
        let result = self.collection::<User>().insert_one(&user).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted user id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        debug!("사용자 저장 완료: {}", id);

        Ok(user.into_profile())
    }

    async fn find_blogs_of(&self, id: ObjectId) -> AppResult<Option<Vec<Blog>>> {
        let pipeline = vec![
            doc! { "$match": { "_id": id } },
            doc! {
                "$lookup": {
                    "from": Database::BLOGS,
                    "localField": "_id",
                    "foreignField": "author",
                    "as": "blogs",
                }
            },
            doc! { "$project": { "blogs": 1 } },
        ];

        let mut found: Vec<UserBlogs> = self
            .collection::<User>()
            .aggregate(pipeline)
            .await?
            .with_type::<UserBlogs>()
            .try_collect()
            .await?;

        Ok(found.pop().map(|user| user.blogs))
    }
}
