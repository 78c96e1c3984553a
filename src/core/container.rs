//! # Service Container
//!
//! 시작 시점에 저장소와 서비스를 한 번 조립하여 actix `app_data`로 등록합니다.
//! 전역 레지스트리 없이 생성자 주입만 사용합니다.
//!
//! ```text
//! Database ─► Mongo*Repository ─► *Service ─► web::Data<*Service>
//!                    ▲
//! PasswordConfig ─► BcryptHasher
//! ```

use std::sync::Arc;

use actix_web::web;
use log::info;

use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::blogs::{BlogRepository, MongoBlogRepository};
use crate::repositories::comments::{CommentRepository, MongoCommentRepository};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::services::blogs::BlogService;
use crate::services::comments::CommentService;
use crate::services::users::{BcryptHasher, PasswordHasher, UserService};

/// 애플리케이션 서비스 묶음
///
/// 워커마다 `clone()`되며 내부는 모두 `Arc`이므로 서비스 인스턴스는 공유됩니다.
#[derive(Clone)]
pub struct Services {
    pub users: web::Data<UserService>,
    pub blogs: web::Data<BlogService>,
    pub comments: web::Data<CommentService>,
}

impl Services {
    /// 주어진 저장소와 해셔로 서비스들을 생성합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        blog_repo: Arc<dyn BlogRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users: web::Data::new(UserService::new(user_repo, hasher)),
            blogs: web::Data::new(BlogService::new(blog_repo)),
            comments: web::Data::new(CommentService::new(comment_repo)),
        }
    }

    /// MongoDB 저장소를 만들고 인덱스를 보장한 뒤 서비스들을 조립합니다.
    pub async fn from_database(db: Arc<Database>, config: &AppConfig) -> AppResult<Self> {
        let user_repo = Arc::new(MongoUserRepository::new(db.clone()));
        let blog_repo = Arc::new(MongoBlogRepository::new(db.clone()));
        let comment_repo = Arc::new(MongoCommentRepository::new(db));

        futures_util::future::try_join3(
            user_repo.create_indexes(),
            blog_repo.create_indexes(),
            comment_repo.create_indexes(),
        )
        .await?;
        info!("✅ 인덱스 준비 완료");

        let hasher = Arc::new(BcryptHasher::from_config(&config.password));
        info!("🔐 bcrypt cost: {}", hasher.cost());

        Ok(Self::new(user_repo, blog_repo, comment_repo, hasher))
    }

    /// 서비스들을 actix `app_data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.blogs.clone())
            .app_data(self.comments.clone());
    }
}
