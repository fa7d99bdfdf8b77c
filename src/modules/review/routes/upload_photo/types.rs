pub mod request {
    use crate::modules::auth::middleware::Auth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub photo: FieldData<NamedTempFile>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub review_id: i64,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PhotoUploaded { url: String, review: Review },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PhotoUploaded { url, review } => (
                    StatusCode::CREATED,
                    Json(json!({ "url": url, "review": review })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NotAnImage,
        ReviewNotFound,
        NotReviewOwner,
        TooManyPhotos,
        FailedToUploadPhoto,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotAnImage => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(json!({ "error": "Only image uploads are allowed" })),
                )
                    .into_response(),
                Self::ReviewNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Review not found" })),
                )
                    .into_response(),
                Self::NotReviewOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only add photos to your own reviews" })),
                )
                    .into_response(),
                Self::TooManyPhotos => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "A review can carry at most 10 photos" })),
                )
                    .into_response(),
                Self::FailedToUploadPhoto => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload photo" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
