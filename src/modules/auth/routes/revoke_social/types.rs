pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::user::repository::User;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Revoked(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Revoked(user) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Social account disconnected",
                        "note": "You can now sign in with your email and password",
                        "user": user,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NotASocialAccount,
        NoRemainingSignInMethod,
        FailedToRevoke,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotASocialAccount => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Not a social login account" })),
                )
                    .into_response(),
                Self::NoRemainingSignInMethod => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Account has no email and password to sign in with" })),
                )
                    .into_response(),
                Self::FailedToRevoke => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to disconnect social account" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
