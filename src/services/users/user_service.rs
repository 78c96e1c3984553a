//! 사용자 유스케이스
//!
//! 등록, 단건 조회, 사용자별 블로그 조회를 담당합니다.
//! 모든 흐름은 검증 → 저장소 위임 → 결과/에러 매핑 한 번으로 끝나며 재시도는 없습니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use validator::Validate;

use crate::domain::dto::blogs::BlogResponse;
use crate::domain::dto::users::{RegisterUserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::users::password_hasher::PasswordHasher;
use crate::utils::bson_utils::parse_object_id;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const USER_NOT_FOUND: &str = "User not found";

/// 사용자 관리 서비스
///
/// 저장소와 해셔는 생성자로 주입되며 이후 변경되지 않습니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError("All fields are required")` - 필드 누락 또는 빈 문자열.
    ///   이 경우 저장소는 호출되지 않습니다.
    /// * `ConflictError` - 사용자명 또는 이메일 중복
    /// * `InternalError` - 해싱 실패
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        let start_time = Instant::now();

        if request.validate().is_err() {
            return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string()));
        }
        let (Some(username), Some(email), Some(password)) =
            (request.username, request.email, request.password)
        else {
            return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string()));
        };

        // bcrypt 는 워커 스레드를 막지 않도록 블로킹 풀에서 실행
        let hasher = Arc::clone(&self.hasher);
        let password_hash = web::block(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

        let profile = self
            .user_repo
            .create(User::new(username, email, password_hash))
            .await?;

        log::info!(
            "사용자 등록 완료: {} ({:?})",
            profile.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(profile))
    }

    /// id 로 사용자를 조회합니다. 형식이 잘못된 id 는 존재하지 않는 것으로 취급합니다.
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let object_id =
            parse_object_id(id).ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        self.user_repo
            .find_by_id(object_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 사용자가 작성한 블로그 목록. 작성자는 원시 id 로 반환됩니다.
    pub async fn get_user_blogs(&self, id: &str) -> AppResult<Vec<BlogResponse>> {
        let object_id =
            parse_object_id(id).ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let blogs = self
            .user_repo
            .find_blogs_of(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        log::debug!("사용자 {} 블로그 {}건 조회", id, blogs.len());

        Ok(blogs.into_iter().map(BlogResponse::from).collect())
    }
}
