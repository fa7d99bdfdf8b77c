mod check;
pub mod welcome;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(welcome::get_router())
        .merge(check::get_router())
}
