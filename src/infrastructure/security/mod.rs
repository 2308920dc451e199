// src/infrastructure/security/mod.rs
pub mod claims;
pub mod password;
pub mod password_list;
pub mod token;
