// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::FlakyUserRepo;
pub use security::{LeakedPasswords, StrictPasswordHasher};
pub use time::{FixedClock, at, fixed_now};
