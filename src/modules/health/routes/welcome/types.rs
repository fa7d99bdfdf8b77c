pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Welcome,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Welcome => (
                    StatusCode::OK,
                    Json(json!({ "message": "Welcome to WeEat API" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Success;
}
