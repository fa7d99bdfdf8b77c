use super::types::{request, response};
use crate::{modules::review::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::validate(&payload.body).map_err(response::Error::FailedToValidate)?;

    let review = repository::find_by_id(&ctx.db_conn.pool, payload.review_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if !review.is_owned_by(payload.auth.user.id) {
        tracing::warn!(
            "User {} tried to edit review {} they do not own",
            payload.auth.user.id,
            review.id
        );
        return Err(response::Error::NotReviewOwner);
    }

    let body = payload.body;
    repository::update_by_id(
        &ctx.db_conn.pool,
        review.id,
        repository::UpdateReviewPayload {
            visited_at: body.visited_at,
            menu: body.menu,
            price_text: body.price_text,
            rating: body.rating,
            content: body.content,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateReview)?
    .ok_or(response::Error::ReviewNotFound)
    .map(response::Success::ReviewUpdated)
}
