// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{ChangePasswordCommand, LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginUserCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(principal): MaybeAuthenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        email: payload.email,
        password: payload.password,
        role: payload.role,
    };

    let user = state
        .services
        .user_commands
        .register(&principal, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<StatusCode> {
    let command = ChangePasswordCommand {
        current_password: payload.current_password,
        new_password: payload.new_password,
        new_password_confirmation: payload.new_password_confirmation,
    };

    state
        .services
        .user_commands
        .change_password(&principal, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
