//! 댓글 유스케이스

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::comments::{CommentDetailResponse, CommentResponse, CreateCommentRequest};
use crate::domain::entities::comments::Comment;
use crate::errors::{AppError, AppResult};
use crate::repositories::comments::CommentRepository;
use crate::utils::bson_utils::{parse_object_id, require_object_id};

const ALL_FIELDS_REQUIRED: &str = "Content, author, and blog are required";

/// 댓글 작성/조회 서비스
pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// 댓글을 생성합니다. 참조(author, blog)의 존재 여부는 확인하지 않으며
    /// 응답은 원시 id 를 그대로 담습니다.
    pub async fn create_comment(&self, request: CreateCommentRequest) -> AppResult<CommentResponse> {
        if request.validate().is_err() {
            return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string()));
        }
        let (Some(content), Some(author), Some(blog)) =
            (request.content, request.author, request.blog)
        else {
            return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string()));
        };

        let author = require_object_id(&author, "Invalid author id")?;
        let blog = require_object_id(&blog, "Invalid blog id")?;

        let comment = self.comment_repo.create(Comment::new(content, author, blog)).await?;
        log::debug!("댓글 생성: blog {}", blog);

        Ok(CommentResponse::from(comment))
    }

    /// 블로그의 댓글 목록
    ///
    /// 블로그 존재 여부는 확인하지 않습니다. 없는 블로그나 형식이 잘못된 id 는 빈 목록입니다.
    pub async fn get_blog_comments(&self, blog_id: &str) -> AppResult<Vec<CommentDetailResponse>> {
        let Some(blog_id) = parse_object_id(blog_id) else {
            return Ok(Vec::new());
        };

        let comments = self.comment_repo.find_by_blog(blog_id).await?;

        Ok(comments.into_iter().map(CommentDetailResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::comments::CommentView;
    use crate::domain::entities::users::AuthorSummary;
    use crate::repositories::comments::MockCommentRepository;
    use mockall::predicate::eq;
    use mongodb::bson::{oid::ObjectId, DateTime};

    fn full_request(author: &ObjectId, blog: &ObjectId) -> CreateCommentRequest {
        CreateCommentRequest {
            content: Some("nice".to_string()),
            author: Some(author.to_hex()),
            blog: Some(blog.to_hex()),
        }
    }

    #[actix_web::test]
    async fn test_create_comment_content_only_is_rejected() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create().never();

        let request = CreateCommentRequest {
            content: Some("nice".to_string()),
            ..Default::default()
        };
        let result = CommentService::new(Arc::new(repo)).create_comment(request).await;

        match result {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "Content, author, and blog are required")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_create_comment_returns_raw_references() {
        let author = ObjectId::new();
        let blog = ObjectId::new();
        let mut repo = MockCommentRepository::new();
        repo.expect_create()
            .withf(move |comment| comment.author == author && comment.blog == blog)
            .times(1)
            .returning(|mut comment| {
                comment.id = Some(ObjectId::new());
                Ok(comment)
            });

        let created = CommentService::new(Arc::new(repo))
            .create_comment(full_request(&author, &blog))
            .await
            .unwrap();

        assert_eq!(created.content, "nice");
        assert_eq!(created.author, author.to_hex());
        assert_eq!(created.blog, blog.to_hex());
    }

    #[actix_web::test]
    async fn test_create_comment_malformed_blog_reference() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create().never();

        let mut request = full_request(&ObjectId::new(), &ObjectId::new());
        request.blog = Some("nope".to_string());

        let result = CommentService::new(Arc::new(repo)).create_comment(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(msg)) if msg == "Invalid blog id"));
    }

    #[actix_web::test]
    async fn test_get_blog_comments_without_comments_is_empty() {
        let blog = ObjectId::new();
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_blog().with(eq(blog)).returning(|_| Ok(vec![]));

        let comments = CommentService::new(Arc::new(repo))
            .get_blog_comments(&blog.to_hex())
            .await
            .unwrap();

        assert!(comments.is_empty());
    }

    #[actix_web::test]
    async fn test_get_blog_comments_malformed_id_is_empty() {
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_blog().never();

        let comments = CommentService::new(Arc::new(repo))
            .get_blog_comments("garbage")
            .await
            .unwrap();

        assert!(comments.is_empty());
    }

    #[actix_web::test]
    async fn test_get_blog_comments_resolves_author() {
        let blog = ObjectId::new();
        let author = ObjectId::new();
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_blog().returning(move |blog| {
            Ok(vec![CommentView {
                id: ObjectId::new(),
                content: "nice".to_string(),
                author: Some(AuthorSummary {
                    id: author,
                    username: "bob".to_string(),
                }),
                blog,
                created_at: DateTime::now(),
                updated_at: DateTime::now(),
            }])
        });

        let comments = CommentService::new(Arc::new(repo))
            .get_blog_comments(&blog.to_hex())
            .await
            .unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].blog, blog.to_hex());
        assert_eq!(comments[0].author.as_ref().unwrap().username, "bob");
    }
}
