pub mod request {
    pub struct Payload {
        pub place_id: i64,
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reviews(Vec<Review>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reviews(reviews) => (StatusCode::OK, Json(json!(reviews))).into_response(),
            }
        }
    }

    pub enum Error {
        PlaceNotFound,
        FailedToFetchReviews,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Place not found" })),
                )
                    .into_response(),
                Self::FailedToFetchReviews => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch reviews" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
