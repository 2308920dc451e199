// src/presentation/http/controllers/comments.rs
use super::PageParams;
use crate::application::{
    commands::comments::CreateCommentCommand,
    dto::{CommentDto, PaginatedResult},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<CommentDto>>> {
    state
        .services
        .comment_queries
        .get_paginated_list(
            &principal,
            ListCommentsQuery {
                page: params.request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            email: payload.email,
            nickname: payload.nickname,
            content: payload.content,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&principal, id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
