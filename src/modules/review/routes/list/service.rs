use super::types::{request, response};
use crate::{
    modules::{place, review::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !place::repository::exists(&ctx.db_conn.pool, payload.place_id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)?
    {
        return Err(response::Error::PlaceNotFound);
    }

    repository::find_many_by_place_id(&ctx.db_conn.pool, payload.place_id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)
        .map(response::Success::Reviews)
}
