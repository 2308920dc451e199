// src/presentation/http/controllers/users.rs
use super::PageParams;
use crate::application::{
    dto::{PaginatedResult, UserDto},
    queries::users::ListUsersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<UserDto>>> {
    state
        .services
        .user_queries
        .get_paginated_list(
            &principal,
            ListUsersQuery {
                page: params.request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}
