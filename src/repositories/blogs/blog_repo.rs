//! # 블로그 리포지토리 구현
//!
//! `blogs` 컬렉션에 대한 데이터 액세스 계층입니다. 읽기 경로는
//! [`pipelines::resolve_author`](crate::repositories::pipelines::resolve_author)로
//! 작성자를 해석한 [`BlogView`]를 반환합니다.

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
use crate::domain::entities::blogs::{Blog, BlogView};
use crate::errors::{AppError, AppResult};
use crate::repositories::pipelines;

#[cfg(test)]
use mockall::automock;

/// 블로그 저장소 추상화
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// 블로그를 저장하고 원시 작성자 id 를 가진 문서를 반환합니다.
    async fn create(&self, blog: Blog) -> AppResult<Blog>;

    /// 작성자가 해석된 블로그 단건 조회
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<BlogView>>;

    /// 모든 블로그를 저장 순서대로 조회
    async fn find_all(&self) -> AppResult<Vec<BlogView>>;
}

/// MongoDB 기반 [`BlogRepository`] 구현체
pub struct MongoBlogRepository {
    db: Arc<Database>,
}

impl MongoBlogRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Blog> {
        self.db.collection::<Blog>(Database::BLOGS)
    }

    /// 사용자별 블로그 조회(`$lookup` on `author`)를 위한 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let author_index = IndexModel::builder()
            .keys(doc! { "author": 1 })
            .options(IndexOptions::builder().name("author_idx".to_string()).build())
            .build();

        self.collection().create_index(author_index).await?;

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn create(&self, mut blog: Blog) -> AppResult<Blog> {
        let result = self.collection().insert_one(&blog).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted blog id is not an ObjectId".to_string())
        })?;
        blog.id = Some(id);

        debug!("블로그 저장 완료: {} (author: {})", id, blog.author);

        Ok(blog)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<BlogView>> {
        let mut found: Vec<BlogView> = self
            .collection()
            .aggregate(pipelines::match_with_author(doc! { "_id": id }))
            .await?
            .with_type::<BlogView>()
            .try_collect()
            .await?;

        Ok(found.pop())
    }

    async fn find_all(&self) -> AppResult<Vec<BlogView>> {
        let blogs = self
            .collection()
            .aggregate(pipelines::resolve_author())
            .await?
            .with_type::<BlogView>()
            .try_collect()
            .await?;

        Ok(blogs)
    }
}
