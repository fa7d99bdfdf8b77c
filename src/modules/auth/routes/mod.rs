mod delete_account;
mod revoke_social;
mod sign_in;
mod sign_up;
mod social_sign_in;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest(
            "/email",
            Router::new()
                .merge(sign_up::get_router())
                .merge(sign_in::get_router()),
        )
        .merge(social_sign_in::get_router())
        .nest(
            "/user",
            Router::new()
                .merge(delete_account::get_router())
                .merge(revoke_social::get_router()),
        )
}
