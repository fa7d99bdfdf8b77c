use super::types::{request, response};
use crate::{modules::place::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(&ctx.db_conn.pool, payload.filters.category)
        .await
        .map_err(|_| response::Error::FailedToFetchPlaces)
        .map(response::Success::Places)
}
