use super::types::{request, response};
use crate::{
    modules::{auth::service::password, user},
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate(&payload).map_err(response::Error::FailedToValidate)?;

    if user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash = password::hash(payload.password)
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            display_name: payload.display_name.trim().to_string(),
            email: Some(payload.email),
            password_hash: Some(password_hash),
            social: None,
        },
    )
    .await
    .map_err(|err| match err {
        // lost a race against a concurrent sign up
        user::repository::Error::Duplicate => response::Error::EmailAlreadyInUse,
        _ => response::Error::SignupFailed,
    })?;

    tracing::info!("User {} signed up with email", user.id);

    Ok(response::Success::SignedUp(user))
}
