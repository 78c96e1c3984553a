//! # 사용자 HTTP 핸들러
//!
//! `/api/users` 스코프의 엔드포인트입니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/api/users` | 201 사용자 (비밀번호 제외) | 400, 409 |
//! | `GET` | `/api/users/{id}` | 200 사용자 (비밀번호 제외) | 404 |
//! | `GET` | `/api/users/{id}/blogs` | 200 `[Blog]` | 404 |

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::blogs::BlogResponse;
use crate::domain::dto::users::{RegisterUserRequest, UserResponse};
use crate::errors::AppError;
use crate::handlers::payload::JsonBody;
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "secret" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","email":"alice@example.com","password":"secret"}'
/// ```
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "사용자 생성", body = UserResponse),
        (status = 400, description = "필수 필드 누락"),
        (status = 409, description = "사용자명 또는 이메일 중복")
    )
)]
#[post("")]
pub async fn register_user(
    service: web::Data<UserService>,
    payload: JsonBody<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "사용자 ObjectId")),
    responses(
        (status = 200, description = "사용자 (비밀번호 제외)", body = UserResponse),
        (status = 404, description = "사용자 없음")
    )
)]
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자가 작성한 블로그 목록 핸들러
#[utoipa::path(
    get,
    path = "/api/users/{id}/blogs",
    tag = "Users",
    params(("id" = String, Path, description = "사용자 ObjectId")),
    responses(
        (status = 200, description = "사용자의 블로그 목록", body = [BlogResponse]),
        (status = 404, description = "사용자 없음")
    )
)]
#[get("/{id}/blogs")]
pub async fn get_user_blogs(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blogs = service.get_user_blogs(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(blogs))
}
