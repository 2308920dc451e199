// src/application/ports/mod.rs
pub mod password_policy;
pub mod security;
pub mod time;
