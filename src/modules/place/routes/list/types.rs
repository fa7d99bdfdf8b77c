pub mod request {
    use crate::modules::place::repository::Category;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub category: Option<Category>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::place::repository::PlaceSummary;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Places(Vec<PlaceSummary>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Places(places) => (StatusCode::OK, Json(json!(places))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPlaces,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPlaces => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch places" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
