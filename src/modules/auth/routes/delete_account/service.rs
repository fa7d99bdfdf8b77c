use super::types::{request, response};
use crate::{modules::user, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;

    // reviews outlive their author, the foreign key nulls out user_id
    user::repository::delete_by_id(&ctx.db_conn.pool, user.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAccount)?;

    tracing::info!("User {} deleted their account", user.id);

    Ok(response::Success::AccountDeleted {
        provider: user.auth_provider,
    })
}
