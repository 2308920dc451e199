// src/domain/user/mod.rs
pub mod entity;
pub mod principal;
pub mod repository;
pub mod value_objects;

pub use entity::User;
pub use principal::{Principal, UserPrincipal};
pub use repository::{UserQuery, UserRepository};
pub use value_objects::{Email, PasswordHash, Role, UserId};
