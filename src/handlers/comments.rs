//! # 댓글 HTTP 핸들러
//!
//! - `POST /api/comments` - 201 댓글 (원시 참조) / 400
//! - `GET /api/comments/blog/{blog_id}` - 200 `[Comment]` (author 해석)

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::comments::{
    CommentDetailResponse, CommentResponse, CreateCommentRequest,
};
use crate::errors::AppError;
use crate::handlers::payload::JsonBody;
use crate::services::comments::CommentService;

#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "Comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "댓글 생성 (원시 참조)", body = CommentResponse),
        (status = 400, description = "필수 필드 누락 또는 잘못된 참조")
    )
)]
#[post("")]
pub async fn create_comment(
    service: web::Data<CommentService>,
    payload: JsonBody<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let comment = service.create_comment(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// 블로그별 댓글 목록. 블로그가 없어도 빈 배열과 200 을 반환합니다.
#[utoipa::path(
    get,
    path = "/api/comments/blog/{blogId}",
    tag = "Comments",
    params(("blogId" = String, Path, description = "블로그 ObjectId")),
    responses(
        (status = 200, description = "블로그의 댓글 목록 (author 해석)", body = [CommentDetailResponse])
    )
)]
#[get("/blog/{blog_id}")]
pub async fn get_blog_comments(
    service: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let comments = service.get_blog_comments(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comments))
}
