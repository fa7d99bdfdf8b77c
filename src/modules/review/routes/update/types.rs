pub mod request {
    use crate::modules::auth::middleware::Auth;
    use chrono::NaiveDate;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        pub visited_at: Option<NaiveDate>,
        #[validate(length(max = 100))]
        pub menu: Option<String>,
        #[validate(length(max = 50))]
        pub price_text: Option<String>,
        #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
        pub rating: Option<i32>,
        #[validate(length(max = 2000))]
        pub content: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub review_id: i64,
        pub body: Body,
    }

}

pub mod response {
    use crate::{modules::review::repository::Review, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ReviewUpdated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewUpdated(review) => (StatusCode::OK, Json(json!(review))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ReviewNotFound,
        NotReviewOwner,
        FailedToUpdateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::ReviewNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Review not found" })),
                )
                    .into_response(),
                Self::NotReviewOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only edit your own reviews" })),
                )
                    .into_response(),
                Self::FailedToUpdateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
