pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use crate::modules::place::repository::PlaceSummary;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Place(PlaceSummary),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Place(place) => (StatusCode::OK, Json(json!(place))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPlace,
        PlaceNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Place not found" })),
                )
                    .into_response(),
                Self::FailedToFetchPlace => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch place" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
