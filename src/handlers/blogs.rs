//! # 블로그 HTTP 핸들러
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/api/blogs` | 201 블로그 (원시 author) | 400 |
//! | `GET` | `/api/blogs` | 200 `[Blog]` (author 해석) | - |
//! | `GET` | `/api/blogs/{id}` | 200 블로그 (author 해석) | 404 |
//!
//! 작성자 id 는 요청 본문의 `author` 필드에서 그대로 가져옵니다.
//! 인증 계층이 없으므로 호출자가 임의의 사용자를 작성자로 지정할 수 있습니다.

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::blogs::{BlogDetailResponse, BlogResponse, CreateBlogRequest};
use crate::errors::AppError;
use crate::handlers::payload::JsonBody;
use crate::services::blogs::BlogService;

/// 블로그 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:3000/api/blogs \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Hello","content":"First post","author":"665f1c2e9b1e8a3d4c5b6a70"}'
/// ```
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "Blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "블로그 생성 (원시 author)", body = BlogResponse),
        (status = 400, description = "제목/내용 누락 또는 잘못된 author")
    )
)]
#[post("")]
pub async fn create_blog(
    service: web::Data<BlogService>,
    payload: JsonBody<CreateBlogRequest>,
) -> Result<HttpResponse, AppError> {
    let mut request = payload.into_inner();
    let author_id = request.take_author();

    let blog = service.create_blog(request, &author_id).await?;

    Ok(HttpResponse::Created().json(blog))
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "Blogs",
    responses(
        (status = 200, description = "모든 블로그 (author 해석)", body = [BlogDetailResponse])
    )
)]
#[get("")]
pub async fn get_all_blogs(service: web::Data<BlogService>) -> Result<HttpResponse, AppError> {
    let blogs = service.get_all_blogs().await?;

    Ok(HttpResponse::Ok().json(blogs))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "Blogs",
    params(("id" = String, Path, description = "블로그 ObjectId")),
    responses(
        (status = 200, description = "블로그 (author 해석)", body = BlogDetailResponse),
        (status = 404, description = "블로그 없음")
    )
)]
#[get("/{id}")]
pub async fn get_blog(
    service: web::Data<BlogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blog = service.get_blog(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(blog))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::{oid::ObjectId, DateTime};
    use serde_json::{json, Value};

    use crate::core::container::test_support::ServicesBuilder;
    use crate::domain::entities::blogs::{Blog, BlogView};
    use crate::domain::entities::users::AuthorSummary;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_create_blog_returns_raw_author() {
        let author = ObjectId::new();
        let mut builder = ServicesBuilder::new();
        builder
            .blogs
            .expect_create()
            .withf(move |blog: &Blog| blog.author == author)
            .returning(|mut blog| {
                blog.id = Some(ObjectId::new());
                Ok(blog)
            });
        let services = builder.build();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.register(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({"title": "T", "content": "C", "author": author.to_hex()}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["author"], author.to_hex());
        assert_eq!(body["title"], "T");
    }

    #[actix_web::test]
    async fn test_create_blog_without_content_is_bad_request() {
        let mut builder = ServicesBuilder::new();
        builder.blogs.expect_create().never();
        let services = builder.build();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.register(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({"title": "T", "author": ObjectId::new().to_hex()}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Title and content are required");
    }

    #[actix_web::test]
    async fn test_create_blog_with_non_json_body_reports_missing_fields() {
        let mut builder = ServicesBuilder::new();
        builder.blogs.expect_create().never();
        let services = builder.build();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.register(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("Content-Type", "text/plain"))
            .set_payload("title=T&content=C")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Title and content are required");
    }

    #[actix_web::test]
    async fn test_get_all_blogs_resolves_authors() {
        let author_id = ObjectId::new();
        let mut builder = ServicesBuilder::new();
        builder.blogs.expect_find_all().returning(move || {
            Ok(vec![BlogView {
                id: ObjectId::new(),
                title: "T".to_string(),
                content: "C".to_string(),
                author: Some(AuthorSummary {
                    id: author_id,
                    username: "alice".to_string(),
                }),
                created_at: DateTime::now(),
                updated_at: DateTime::now(),
            }])
        });
        let services = builder.build();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.register(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["author"]["_id"], author_id.to_hex());
        assert_eq!(body[0]["author"]["username"], "alice");
    }

    #[actix_web::test]
    async fn test_get_blog_malformed_id_is_not_found() {
        let mut builder = ServicesBuilder::new();
        builder.blogs.expect_find_by_id().never();
        let services = builder.build();
        let app = test::init_service(
            App::new()
                .configure(|cfg| services.register(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blogs/not-an-id").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Blog not found");
    }
}
