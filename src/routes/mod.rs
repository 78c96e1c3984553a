//! API 라우트 설정 모듈
//!
//! 기능별 스코프를 `/api` 아래에 등록하고 헬스체크 엔드포인트를 제공합니다.
//! 인증 계층이 없으므로 모든 라우트는 공개입니다.
//!
//! | Method & Path | Handler |
//! |---------------|---------|
//! | `POST /api/users` | [`handlers::users::register_user`] |
//! | `GET /api/users/{id}` | [`handlers::users::get_user`] |
//! | `GET /api/users/{id}/blogs` | [`handlers::users::get_user_blogs`] |
//! | `POST /api/blogs` | [`handlers::blogs::create_blog`] |
//! | `GET /api/blogs` | [`handlers::blogs::get_all_blogs`] |
//! | `GET /api/blogs/{id}` | [`handlers::blogs::get_blog`] |
//! | `POST /api/comments` | [`handlers::comments::create_comment`] |
//! | `GET /api/comments/blog/{blogId}` | [`handlers::comments::get_blog_comments`] |
//! | `GET /health` | [`health_check`] |
//! | `GET /api-docs/*` | Swagger UI ([`openapi::ApiDoc`]) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| services.register(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod openapi;

use actix_web::{error, web, HttpRequest};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::AppError;
use crate::handlers;
use openapi::ApiDoc;

/// 모든 라우트를 설정합니다
///
/// 경로 추출 실패도 `AppError::ValidationError`로 변환하여
/// 다른 에러와 같은 `{error: {message, status}}` 형태로 응답합니다.
/// 본문은 [`JsonBody`](crate::handlers::payload::JsonBody)가 같은 방식으로 처리합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    // API 문서 (NormalizePath::trim 때문에 `/api-docs/`도 이 리다이렉트로 들어옴)
    cfg.service(web::redirect("/api-docs", "/api-docs/index.html"))
        .service(
            SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

    cfg.service(
        web::scope("/api")
            .configure(configure_user_routes)
            .configure(configure_blog_routes)
            .configure(configure_comment_routes),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::register_user)
            .service(handlers::users::get_user_blogs)
            .service(handlers::users::get_user),
    );
}

fn configure_blog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blogs")
            .service(handlers::blogs::create_blog)
            .service(handlers::blogs::get_all_blogs)
            .service(handlers::blogs::get_blog),
    );
}

fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .service(handlers::comments::create_comment)
            .service(handlers::comments::get_blog_comments),
    );
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid path parameter: {}", err)).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "blog_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "서비스 정상"))
)]
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_api_docs_are_served() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["paths"]["/api/users"]["post"]["responses"]["409"].is_object());

        let req = test::TestRequest::get().uri("/api-docs/index.html").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_api_docs_root_redirects_to_ui() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api-docs").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_redirection());
        assert_eq!(
            resp.headers().get(actix_web::http::header::LOCATION).unwrap(),
            "/api-docs/index.html"
        );
    }
}
