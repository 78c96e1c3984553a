//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 블로그 API 를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 잘못된 참조 ID |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 사용자명/이메일 중복 (duplicate key) |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": {
//!     "message": "Blog not found",
//!     "status": 404
//!   }
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_blog(&self, id: &str) -> Result<BlogView, AppError> {
//!     let not_found = || AppError::NotFound("Blog not found".to_string());
//!     let id = parse_object_id(id).ok_or_else(not_found)?;
//!
//!     self.blog_repo.find_by_id(id).await?.ok_or_else(not_found)
//! }
//! ```

use actix_web::http::StatusCode;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;

/// MongoDB 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 애플리케이션 전역 에러 타입
///
/// 유스케이스 계층에서 발생하는 모든 실패를 태그된 변형으로 표현합니다.
/// HTTP 상태 코드는 변형별 고정 테이블([`AppError::status`])로 결정됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 변형에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// MongoDB 에러 변환
///
/// 유니크 인덱스 위반(11000)은 409 로, 나머지는 모두 `DatabaseError`로 변환합니다.
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            return AppError::ConflictError("Username or email already exists".to_string());
        }
        AppError::DatabaseError(err.to_string())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    message: &'a str,
    status: u16,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 는 error 레벨로, 4xx 는 warn 레벨로 기록한 뒤
    /// `{ "error": { "message", "status" } }` 형태로 직렬화합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            log::error!("{}", message);
        } else {
            log::warn!("{} ({})", message, status.as_u16());
        }

        actix_web::HttpResponse::build(status).json(ErrorBody {
            error: ErrorDetail {
                message: &message,
                status: status.as_u16(),
            },
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
