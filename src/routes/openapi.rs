//! OpenAPI 문서 설정
//!
//! `/api-docs/index.html`에서 Swagger UI 를, `/api-docs/openapi.json`에서
//! 문서 원본을 제공합니다.

use utoipa::OpenApi;

use crate::domain::dto::{
    AuthorResponse, BlogDetailResponse, BlogResponse, CommentDetailResponse, CommentResponse,
    CreateBlogRequest, CreateCommentRequest, RegisterUserRequest, UserResponse,
};
use crate::handlers::{blogs, comments, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        description = "사용자, 블로그, 댓글을 관리하는 블로그 REST API"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        super::health_check,
        users::register_user,
        users::get_user,
        users::get_user_blogs,
        blogs::create_blog,
        blogs::get_all_blogs,
        blogs::get_blog,
        comments::create_comment,
        comments::get_blog_comments,
    ),
    components(
        schemas(
            RegisterUserRequest,
            UserResponse,
            AuthorResponse,
            CreateBlogRequest,
            BlogResponse,
            BlogDetailResponse,
            CreateCommentRequest,
            CommentResponse,
            CommentDetailResponse,
        )
    ),
    tags(
        (name = "Users", description = "사용자 등록 및 조회"),
        (name = "Blogs", description = "블로그 작성 및 조회"),
        (name = "Comments", description = "댓글 작성 및 블로그별 조회"),
        (name = "Health", description = "서비스 상태")
    )
)]
pub struct ApiDoc;
