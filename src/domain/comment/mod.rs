// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId};
pub use repository::{CommentQuery, CommentRepository};
