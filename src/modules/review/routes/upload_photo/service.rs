use super::types::{request, response};
use crate::{
    modules::review::repository::{self, Review},
    types::Context,
    utils::storage,
};
use std::sync::Arc;

fn is_image(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|content_type| content_type.starts_with("image/"))
}

/// Why an append matched no row, judged from the review as it is now.
fn rejected_append(review: Option<&Review>) -> response::Error {
    match review {
        Some(review) if review.is_full() => response::Error::TooManyPhotos,
        Some(_) => response::Error::FailedToUploadPhoto,
        None => response::Error::ReviewNotFound,
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let photo = payload.body.photo;
    let content_type = photo.metadata.content_type.clone();

    if !is_image(content_type.as_deref()) {
        return Err(response::Error::NotAnImage);
    }

    let review = repository::find_by_id(&ctx.db_conn.pool, payload.review_id)
        .await
        .map_err(|_| response::Error::FailedToUploadPhoto)?
        .ok_or(response::Error::ReviewNotFound)?;

    if !review.is_owned_by(payload.auth.user.id) {
        return Err(response::Error::NotReviewOwner);
    }

    if review.is_full() {
        return Err(response::Error::TooManyPhotos);
    }

    let contents = tokio::fs::read(photo.contents.path()).await.map_err(|err| {
        tracing::error!("Failed to read uploaded photo: {}", err);
        response::Error::FailedToUploadPhoto
    })?;

    let key = storage::object_key(
        &repository::photo_key_prefix(review.id),
        photo.metadata.file_name.as_deref(),
    );

    let url = storage::upload_file(&ctx.storage, key.clone(), content_type, contents)
        .await
        .map_err(|_| response::Error::FailedToUploadPhoto)?;

    // the limit is enforced again by the append, concurrent uploads may have filled the review
    let error = match repository::append_photo_url(&ctx.db_conn.pool, review.id, url.clone()).await
    {
        Ok(Some(review)) => return Ok(response::Success::PhotoUploaded { url, review }),
        Ok(None) => repository::find_by_id(&ctx.db_conn.pool, review.id)
            .await
            .map(|current| rejected_append(current.as_ref()))
            .unwrap_or(response::Error::FailedToUploadPhoto),
        Err(_) => response::Error::FailedToUploadPhoto,
    };

    let _ = storage::delete_file(&ctx.storage, &key).await;

    Err(error)
}

#[cfg(test)]
mod test {
    use super::*;

    fn review(photos: usize) -> Review {
        Review {
            id: 1,
            place_id: 1,
            user_id: Some(1),
            visited_at: None,
            menu: None,
            price_text: None,
            rating: 5,
            content: None,
            photo_urls: (0..photos)
                .map(|n| format!("https://cdn.weeat.site/reviews/1/{}.jpg", n))
                .collect(),
            created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn appends_refused_by_a_full_review_report_the_limit() {
        assert!(matches!(
            rejected_append(Some(&review(repository::MAX_PHOTOS))),
            response::Error::TooManyPhotos
        ));
        assert!(matches!(
            rejected_append(None),
            response::Error::ReviewNotFound
        ));
        assert!(matches!(
            rejected_append(Some(&review(3))),
            response::Error::FailedToUploadPhoto
        ));
    }

    #[test]
    fn only_image_content_types_are_accepted() {
        assert!(is_image(Some("image/jpeg")));
        assert!(is_image(Some("image/webp")));
        assert!(!is_image(Some("application/pdf")));
        assert!(!is_image(None));
    }
}
