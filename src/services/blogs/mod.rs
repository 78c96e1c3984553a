//! 블로그 서비스 모듈

pub mod blog_service;

pub use blog_service::BlogService;
