// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryTitle};
pub use repository::CategoryRepository;
