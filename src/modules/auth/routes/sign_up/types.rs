pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 50,
            code = "INVALID_DISPLAY_NAME",
            message = "Display name must be between 1 and 50 characters"
        ))]
        pub display_name: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            code = "INVALID_PASSWORD",
            message = "Password must be at least 8 characters"
        ))]
        pub password: String,
    }

    #[cfg(test)]
    mod test {
        use super::*;

        fn payload(email: &str, password: &str) -> Payload {
            Payload {
                display_name: String::from("위잇"),
                email: email.to_string(),
                password: password.to_string(),
            }
        }

        #[test]
        fn accepts_well_formed_sign_ups() {
            assert!(payload("hello@weeat.site", "12345678").validate().is_ok());
        }

        #[test]
        fn rejects_bad_emails_and_short_passwords() {
            let errors = payload("not-an-email", "short").validate().unwrap_err();
            let fields = errors.field_errors();

            assert!(fields.contains_key("email"));
            assert!(fields.contains_key("password"));
        }
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        SignedUp(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp(user) => (StatusCode::CREATED, Json(json!(user))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
