//! 블로그 유스케이스

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::blogs::{BlogDetailResponse, BlogResponse, CreateBlogRequest};
use crate::domain::entities::blogs::Blog;
use crate::errors::{AppError, AppResult};
use crate::repositories::blogs::BlogRepository;
use crate::utils::bson_utils::{parse_object_id, require_object_id};

const TITLE_AND_CONTENT_REQUIRED: &str = "Title and content are required";
const INVALID_AUTHOR: &str = "A valid author id is required";
const BLOG_NOT_FOUND: &str = "Blog not found";

/// 블로그 작성/조회 서비스
pub struct BlogService {
    blog_repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(blog_repo: Arc<dyn BlogRepository>) -> Self {
        Self { blog_repo }
    }

    /// 블로그를 생성합니다.
    ///
    /// `author_id`는 요청 페이로드에서 그대로 전달된 값이며 사용자 존재 여부는
    /// 확인하지 않습니다. 응답의 `author`는 해석되지 않은 원시 id 입니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError("Title and content are required")` - 제목 또는 본문 누락
    /// * `ValidationError("A valid author id is required")` - 작성자 id 누락 또는 형식 오류
    pub async fn create_blog(
        &self,
        request: CreateBlogRequest,
        author_id: &str,
    ) -> AppResult<BlogResponse> {
        if request.validate().is_err() {
            return Err(AppError::ValidationError(TITLE_AND_CONTENT_REQUIRED.to_string()));
        }
        let (Some(title), Some(content)) = (request.title, request.content) else {
            return Err(AppError::ValidationError(TITLE_AND_CONTENT_REQUIRED.to_string()));
        };

        let author = require_object_id(author_id, INVALID_AUTHOR)?;

        let blog = self.blog_repo.create(Blog::new(title, content, author)).await?;

        log::info!(
            "블로그 생성: {} (author: {})",
            blog.id.map(|id| id.to_hex()).unwrap_or_default(),
            author
        );

        Ok(BlogResponse::from(blog))
    }

    /// 작성자가 `{_id, username}`으로 해석된 블로그를 조회합니다.
    pub async fn get_blog(&self, id: &str) -> AppResult<BlogDetailResponse> {
        let object_id =
            parse_object_id(id).ok_or_else(|| AppError::NotFound(BLOG_NOT_FOUND.to_string()))?;

        self.blog_repo
            .find_by_id(object_id)
            .await?
            .map(BlogDetailResponse::from)
            .ok_or_else(|| AppError::NotFound(BLOG_NOT_FOUND.to_string()))
    }

    /// 모든 블로그를 저장 순서대로 조회합니다. 페이지네이션은 없습니다.
    pub async fn get_all_blogs(&self) -> AppResult<Vec<BlogDetailResponse>> {
        let blogs = self.blog_repo.find_all().await?;

        Ok(blogs.into_iter().map(BlogDetailResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::blogs::BlogView;
    use crate::domain::entities::users::AuthorSummary;
    use crate::repositories::blogs::MockBlogRepository;
    use mockall::predicate::eq;
    use mongodb::bson::{oid::ObjectId, DateTime};

    fn request(title: Option<&str>, content: Option<&str>) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.map(String::from),
            content: content.map(String::from),
            author: None,
        }
    }

    fn view(id: ObjectId, author: Option<AuthorSummary>) -> BlogView {
        BlogView {
            id,
            title: "T".to_string(),
            content: "C".to_string(),
            author,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    #[actix_web::test]
    async fn test_create_blog_requires_title_and_content() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create().never();
        let service = BlogService::new(Arc::new(repo));
        let author = ObjectId::new().to_hex();

        for request in [request(Some("T"), None), request(None, Some("C")), request(Some(""), Some("C"))] {
            match service.create_blog(request, &author).await {
                Err(AppError::ValidationError(msg)) => {
                    assert_eq!(msg, "Title and content are required")
                }
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }

    #[actix_web::test]
    async fn test_create_blog_stores_given_author_exactly() {
        let author = ObjectId::new();
        let mut repo = MockBlogRepository::new();
        repo.expect_create()
            .withf(move |blog| blog.author == author && blog.title == "T" && blog.content == "C")
            .times(1)
            .returning(|mut blog| {
                blog.id = Some(ObjectId::new());
                Ok(blog)
            });

        let created = BlogService::new(Arc::new(repo))
            .create_blog(request(Some("T"), Some("C")), &author.to_hex())
            .await
            .unwrap();

        assert_eq!(created.author, author.to_hex());
        assert_eq!(created.title, "T");
    }

    #[actix_web::test]
    async fn test_create_blog_rejects_malformed_author() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create().never();
        let service = BlogService::new(Arc::new(repo));

        for author in ["", "123"] {
            let result = service.create_blog(request(Some("T"), Some("C")), author).await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[actix_web::test]
    async fn test_get_blog_unknown_is_not_found() {
        let id = ObjectId::new();
        let mut repo = MockBlogRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        match BlogService::new(Arc::new(repo)).get_blog(&id.to_hex()).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Blog not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_get_blog_resolves_author() {
        let id = ObjectId::new();
        let author_id = ObjectId::new();
        let mut repo = MockBlogRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(Some(view(
                id,
                Some(AuthorSummary {
                    id: author_id,
                    username: "alice".to_string(),
                }),
            )))
        });

        let blog = BlogService::new(Arc::new(repo)).get_blog(&id.to_hex()).await.unwrap();
        let author = blog.author.unwrap();

        assert_eq!(blog.id, id.to_hex());
        assert_eq!(author.id, author_id.to_hex());
        assert_eq!(author.username, "alice");
    }

    #[actix_web::test]
    async fn test_get_all_blogs_empty_store() {
        let mut repo = MockBlogRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let blogs = BlogService::new(Arc::new(repo)).get_all_blogs().await.unwrap();

        assert!(blogs.is_empty());
    }

    #[actix_web::test]
    async fn test_get_all_blogs_keeps_store_order_and_dangling_authors() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let mut repo = MockBlogRepository::new();
        repo.expect_find_all()
            .returning(move || Ok(vec![view(first, None), view(second, None)]));

        let blogs = BlogService::new(Arc::new(repo)).get_all_blogs().await.unwrap();

        assert_eq!(blogs[0].id, first.to_hex());
        assert_eq!(blogs[1].id, second.to_hex());
        assert!(blogs.iter().all(|blog| blog.author.is_none()));
    }

    #[actix_web::test]
    async fn test_store_failure_is_propagated() {
        let mut repo = MockBlogRepository::new();
        repo.expect_find_all()
            .returning(|| Err(AppError::DatabaseError("connection reset".to_string())));

        let result = BlogService::new(Arc::new(repo)).get_all_blogs().await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
