use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{password, token},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    // social-only accounts have no password to check against
    let password_hash = user
        .password_hash
        .clone()
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(payload.password, password_hash)
        .await
        .map_err(|_| response::Error::FailedToSignIn)?
    {
        tracing::info!("Rejected sign in attempt for user {}", user.id);
        return Err(response::Error::InvalidCredentials);
    }

    token::issue(&ctx.auth, user)
        .map_err(|_| response::Error::FailedToSignIn)
        .map(response::Success::SignedIn)
}
