pub mod request {
    pub struct Payload {
        pub place_id: i64,
    }
}

pub mod response {
    use crate::modules::menu::repository::Menu;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Menus(Vec<Menu>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menus(menus) => (StatusCode::OK, Json(json!(menus))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMenus,
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
                Self::FailedToFetchMenus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch menus" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
