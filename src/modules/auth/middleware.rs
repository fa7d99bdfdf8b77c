use super::service::token;
use crate::modules::user::{self, repository::User};
use crate::types::Context;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

fn get_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return None;
    }

    Some(token.trim())
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(json!({ "error": "Could not validate credentials" })),
    )
        .into_response()
}

/// The signed-in user, resolved from an `Authorization: Bearer` access token.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Auth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        let access_token = get_bearer_token(&parts.headers).ok_or_else(unauthorized)?;

        let user_id = token::verify_access_token(&ctx.auth, access_token).map_err(|err| {
            tracing::debug!("Invalid access token: {:?}", err);
            unauthorized()
        })?;

        user::repository::find_by_id(&ctx.db_conn.pool, user_id)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response()
            })?
            .ok_or_else(unauthorized)
            .map(|user| Self { user })
    }
}
