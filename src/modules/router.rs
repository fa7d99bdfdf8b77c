use super::{auth, health, menu, place, recommendation, review};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(health::get_router())
        .nest("/auth", auth::get_router())
        .nest(
            "/places",
            place::get_router()
                .merge(menu::get_router())
                .merge(review::get_router()),
        )
        .nest("/recommendations", recommendation::get_router())
}
