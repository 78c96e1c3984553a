//! Blogs Entity Module

pub mod blog;

pub use blog::{Blog, BlogView};
