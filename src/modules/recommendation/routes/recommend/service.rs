use super::types::{request, response};
use crate::{
    modules::recommendation::{repository, selector},
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate(&payload.filters).map_err(response::Error::FailedToValidate)?;

    let snapshot = repository::fetch_snapshot(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::DatabaseUnavailable)?;

    let count = usize::try_from(payload.filters.count).unwrap_or_default();
    let recommendations = {
        let mut rng = rand::rng();
        selector::recommend(&mut rng, count, &snapshot.places, |summary| {
            snapshot.menus_for(summary.place.id)
        })
    };

    tracing::debug!(
        "Recommended {} of {} places",
        recommendations.len(),
        snapshot.places.len()
    );

    Ok(response::Success::Recommendations(recommendations))
}
