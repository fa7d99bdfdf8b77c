mod create;
mod delete;
mod list;
mod update;
mod upload_photo;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(upload_photo::get_router())
}
