pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod users;

use crate::domain::pagination::PageRequest;
use serde::Deserialize;

/// `?page=N`. Anything that is not a positive integer means page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageParams {
    pub fn request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}
