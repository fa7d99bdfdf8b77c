pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AccountDeleted { provider: Option<String> },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountDeleted {
                    provider: Some(provider),
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Account deleted successfully",
                        "note": format!(
                            "To disconnect your {} account, revoke the app's permissions in {}",
                            provider, provider
                        ),
                    })),
                )
                    .into_response(),
                Self::AccountDeleted { provider: None } => (
                    StatusCode::OK,
                    Json(json!({ "message": "Account deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToDeleteAccount,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToDeleteAccount => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete account" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
