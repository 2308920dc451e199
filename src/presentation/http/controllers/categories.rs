// src/presentation/http/controllers/categories.rs
use crate::application::{commands::categories::CreateCategoryCommand, dto::CategoryDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleCountResponse {
    pub category_id: i64,
    pub articles: u64,
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let category = state
        .services
        .category_commands
        .create_category(
            &principal,
            CreateCategoryCommand {
                title: payload.title,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn count_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleCountResponse>> {
    let articles = state
        .services
        .category_queries
        .count_articles(id)
        .await
        .into_http()?;

    Ok(Json(ArticleCountResponse {
        category_id: id,
        articles,
    }))
}
