// src/application/queries/users.rs
use crate::{
    application::{
        dto::{PaginatedResult, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::{PageRequest, paginate},
        user::{Principal, User, UserQuery, UserRepository},
    },
};
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

pub struct ListUsersQuery {
    pub page: PageRequest,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_paginated_list(
        &self,
        principal: &Principal,
        query: ListUsersQuery,
    ) -> ApplicationResult<PaginatedResult<UserDto>> {
        if !principal.is_admin() {
            return Err(ApplicationError::access_denied());
        }

        let page = paginate::<_, User, _>(self.user_repo.as_ref(), &UserQuery, query.page).await?;
        Ok(PaginatedResult::from_page(page))
    }
}
