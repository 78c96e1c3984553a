//! Comments Entity Module

pub mod comment;

pub use comment::{Comment, CommentView};
