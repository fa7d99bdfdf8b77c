use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{oauth, token},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let profile = oauth::verify(&ctx.auth, payload.provider, &payload.token)
        .await
        .map_err(|err| match err {
            oauth::Error::InvalidToken => response::Error::InvalidToken,
            oauth::Error::ProviderUnavailable => response::Error::ProviderUnavailable,
        })?;

    let existing = user::repository::find_by_social(&ctx.db_conn.pool, profile.provider, &profile.sub)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?;

    let user = match existing {
        Some(user) => user,
        None => {
            let user = user::repository::create(
                &ctx.db_conn.pool,
                user::repository::CreateUserPayload {
                    display_name: profile.display_name,
                    email: profile.email,
                    password_hash: None,
                    social: Some((profile.provider, profile.sub)),
                },
            )
            .await
            .map_err(|err| match err {
                user::repository::Error::Duplicate => response::Error::EmailAlreadyInUse,
                _ => response::Error::FailedToSignIn,
            })?;

            tracing::info!(
                "User {} signed up with {}",
                user.id,
                profile.provider.as_str()
            );

            user
        }
    };

    token::issue(&ctx.auth, user)
        .map_err(|_| response::Error::FailedToSignIn)
        .map(response::Success::SignedIn)
}
