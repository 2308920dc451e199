// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::user::Principal,
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A request that must carry a valid bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

/// Resolves to [`Principal::Anonymous`] when no `Authorization` header is sent.
/// A header that is present but invalid is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Principal);

async fn resolve_principal(parts: &mut Parts) -> Result<Principal, HttpError> {
    let Some(app_state) = parts.extensions.get::<HttpState>().cloned() else {
        return Err(HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        )));
    };

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(Principal::Anonymous);
    };

    let user = app_state
        .services
        .token_manager()
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)?;
    Ok(user.into())
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match resolve_principal(parts).await? {
            Principal::Anonymous => Err(HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))),
            principal => Ok(Self(principal)),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_principal(parts).await.map(Self)
    }
}
