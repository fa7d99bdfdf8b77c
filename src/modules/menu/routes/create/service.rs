use super::types::{request, response};
use crate::{
    modules::{menu::repository, place},
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate(&payload.body).map_err(response::Error::FailedToValidate)?;

    if !place::repository::exists(&ctx.db_conn.pool, payload.place_id)
        .await
        .map_err(|_| response::Error::FailedToCreateMenu)?
    {
        return Err(response::Error::PlaceNotFound);
    }

    let menu = repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuPayload {
            place_id: payload.place_id,
            name: payload.body.name.trim().to_string(),
            price: payload.body.price,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenu)?;

    tracing::info!(
        "User {} attached menu {} to place {}",
        payload.auth.user.id,
        menu.id,
        menu.place_id
    );

    Ok(response::Success::MenuCreated(menu))
}
