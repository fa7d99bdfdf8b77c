use super::types::{request, response};
use crate::{
    modules::review::repository::{self, Review},
    types::Context,
    utils::storage::{self, StorageContext},
};
use std::sync::Arc;

/// Keys of the photos this review uploaded itself, other URLs are left alone.
fn stored_photo_keys(storage: &StorageContext, review: &Review) -> Vec<String> {
    let prefix = repository::photo_key_prefix(review.id);

    review
        .photo_urls
        .iter()
        .filter_map(|url| {
            let key = storage.key_under(url, &prefix);
            if key.is_none() {
                tracing::warn!("Not deleting {} which review {} does not own", url, review.id);
            }
            key
        })
        .collect()
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let review = repository::find_by_id(&ctx.db_conn.pool, payload.review_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if !review.is_owned_by(payload.auth.user.id) {
        tracing::warn!(
            "User {} tried to delete review {} they do not own",
            payload.auth.user.id,
            review.id
        );
        return Err(response::Error::NotReviewOwner);
    }

    repository::delete_by_id(&ctx.db_conn.pool, review.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    let keys = stored_photo_keys(&ctx.storage, &review);
    if !keys.is_empty() {
        let ctx = ctx.clone();
        tokio::spawn(async move {
            for key in keys {
                // failures are logged by the storage layer
                let _ = storage::delete_file(&ctx.storage, &key).await;
            }
        });
    }

    Ok(response::Success::ReviewDeleted)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::storage::test::storage_context;
    use chrono::{DateTime, Utc};

    fn review_with_photos(id: i64, photo_urls: &[&str]) -> Review {
        Review {
            id,
            place_id: 1,
            user_id: Some(1),
            visited_at: None,
            menu: None,
            price_text: None,
            rating: 3,
            content: None,
            photo_urls: photo_urls.iter().map(|url| url.to_string()).collect(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn only_photos_uploaded_for_the_review_are_deleted() {
        let review = review_with_photos(
            7,
            &[
                "https://cdn.weeat.site/reviews/7/01J0OWN.jpg",
                "https://cdn.weeat.site/reviews/999/01JOTHER.jpg",
                "https://cdn.weeat.site/reviews/70/01JNEAR.jpg",
                "https://example.com/reviews/7/01JFOREIGN.jpg",
                "not a url",
            ],
        );

        assert_eq!(
            stored_photo_keys(&storage_context(), &review),
            vec!["reviews/7/01J0OWN.jpg"]
        );
    }

    #[test]
    fn reviews_without_photos_delete_nothing() {
        let review = review_with_photos(7, &[]);

        assert!(stored_photo_keys(&storage_context(), &review).is_empty());
    }
}
