use super::types::response;
use crate::{types::Context, utils::database};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    database::ping(&ctx.db_conn)
        .await
        .map_err(|_| response::Error::DatabaseUnreachable)
        .map(|_| response::Success::Healthy)
}
