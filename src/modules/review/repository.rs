use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

pub const MAX_PHOTOS: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub place_id: i64,
    pub user_id: Option<i64>,
    pub visited_at: Option<NaiveDate>,
    pub menu: Option<String>,
    pub price_text: Option<String>,
    pub rating: i32,
    pub content: Option<String>,
    #[sqlx(json)]
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }

    pub fn is_full(&self) -> bool {
        self.photo_urls.len() >= MAX_PHOTOS
    }
}

/// Storage prefix that every photo uploaded for this review lives under.
pub fn photo_key_prefix(review_id: i64) -> String {
    format!("reviews/{}/", review_id)
}

pub struct CreateReviewPayload {
    pub place_id: i64,
    pub user_id: i64,
    pub visited_at: Option<NaiveDate>,
    pub menu: Option<String>,
    pub price_text: Option<String>,
    pub rating: i32,
    pub content: Option<String>,
}

#[derive(Default)]
pub struct UpdateReviewPayload {
    pub visited_at: Option<NaiveDate>,
    pub menu: Option<String>,
    pub price_text: Option<String>,
    pub rating: Option<i32>,
    pub content: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateReviewPayload) -> Result<Review> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO reviews (
            place_id,
            user_id,
            visited_at,
            menu,
            price_text,
            rating,
            content
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(payload.place_id)
    .bind(payload.user_id)
    .bind(payload.visited_at)
    .bind(payload.menu)
    .bind(payload.price_text)
    .bind(payload.rating)
    .bind(payload.content)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a review: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch review with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_place_id<'e, E: PgExecutor<'e>>(
    e: E,
    place_id: i64,
) -> Result<Vec<Review>> {
    sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE place_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(place_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch reviews of place {}: {}",
            place_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateReviewPayload,
) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>(
        "
        UPDATE reviews SET
            visited_at = COALESCE($2, visited_at),
            menu = COALESCE($3, menu),
            price_text = COALESCE($4, price_text),
            rating = COALESCE($5, rating),
            content = COALESCE($6, content)
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(payload.visited_at)
    .bind(payload.menu)
    .bind(payload.price_text)
    .bind(payload.rating)
    .bind(payload.content)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update review with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Appends `url` unless the review is gone or already holds [`MAX_PHOTOS`].
pub async fn append_photo_url<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    url: String,
) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>(
        "
        UPDATE reviews SET
            photo_urls = photo_urls || jsonb_build_array($2::TEXT)
        WHERE
            id = $1 AND jsonb_array_length(photo_urls) < $3
        RETURNING *
        ",
    )
    .bind(id)
    .bind(url)
    .bind(MAX_PHOTOS as i32)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to attach a photo to review {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete review with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
