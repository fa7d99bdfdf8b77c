use super::types::{request, response};
use crate::{
    modules::{place, review::repository},
    types::Context,
    utils::validation,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate(&payload.body).map_err(response::Error::FailedToValidate)?;

    if !place::repository::exists(&ctx.db_conn.pool, payload.place_id)
        .await
        .map_err(|_| response::Error::FailedToCreateReview)?
    {
        return Err(response::Error::PlaceNotFound);
    }

    let body = payload.body;
    let review = repository::create(
        &ctx.db_conn.pool,
        repository::CreateReviewPayload {
            place_id: payload.place_id,
            user_id: payload.auth.user.id,
            visited_at: body.visited_at,
            menu: body.menu,
            price_text: body.price_text,
            rating: body.rating,
            content: body.content,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateReview)?;

    tracing::info!(
        "User {} reviewed place {} with a rating of {}",
        payload.auth.user.id,
        review.place_id,
        review.rating
    );

    Ok(response::Success::ReviewCreated(review))
}
