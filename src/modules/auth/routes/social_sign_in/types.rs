pub mod request {
    use crate::modules::user::repository::AuthProvider;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct KakaoBody {
        pub access_token: String,
    }

    #[derive(Deserialize)]
    pub struct GoogleBody {
        pub id_token: String,
    }

    pub struct Payload {
        pub provider: AuthProvider,
        pub token: String,
    }
}

pub mod response {
    use crate::modules::auth::service::token::AccessToken;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        SignedIn(AccessToken),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn(token) => (StatusCode::OK, Json(json!(token))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidToken,
        ProviderUnavailable,
        FailedToFetchUser,
        EmailAlreadyInUse,
        FailedToSignIn,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidToken => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid social login token" })),
                )
                    .into_response(),
                Self::ProviderUnavailable => (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "Social login provider unavailable" })),
                )
                    .into_response(),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already registered with another sign in method" })),
                )
                    .into_response(),
                Self::FailedToSignIn => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
