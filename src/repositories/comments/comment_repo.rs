//! # 댓글 리포지토리 구현

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::comments::{Comment, CommentView};
use crate::errors::{AppError, AppResult};
use crate::repositories::pipelines;

#[cfg(test)]
use mockall::automock;

/// 댓글 저장소 추상화
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 댓글을 저장하고 원시 참조를 가진 문서를 반환합니다.
    async fn create(&self, comment: Comment) -> AppResult<Comment>;

    /// `blog` 필드가 일치하는 모든 댓글을 작성자 해석과 함께 조회합니다.
    async fn find_by_blog(&self, blog_id: ObjectId) -> AppResult<Vec<CommentView>>;
}

/// MongoDB 기반 [`CommentRepository`] 구현체
pub struct MongoCommentRepository {
    db: Arc<Database>,
}

impl MongoCommentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Comment> {
        self.db.collection::<Comment>(Database::COMMENTS)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let blog_index = IndexModel::builder()
            .keys(doc! { "blog": 1 })
            .options(IndexOptions::builder().name("blog_idx".to_string()).build())
            .build();

        self.collection().create_index(blog_index).await?;

        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn create(&self, mut comment: Comment) -> AppResult<Comment> {
        let result = self.collection().insert_one(&comment).await?;

        comment.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted comment id is not an ObjectId".to_string())
        })?);

        Ok(comment)
    }

    async fn find_by_blog(&self, blog_id: ObjectId) -> AppResult<Vec<CommentView>> {
        let comments = self
            .collection()
            .aggregate(pipelines::match_with_author(doc! { "blog": blog_id }))
            .await?
            .with_type::<CommentView>()
            .try_collect()
            .await?;

        Ok(comments)
    }
}
