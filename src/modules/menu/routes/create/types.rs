pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, max = 100, message = "Menu name must not be empty"))]
        pub name: String,
        #[validate(range(min = 0, message = "Price must not be negative"))]
        pub price: Option<i32>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub place_id: i64,
        pub body: Body,
    }

}

pub mod response {
    use crate::{modules::menu::repository::Menu, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MenuCreated(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuCreated(menu) => (StatusCode::CREATED, Json(json!(menu))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateMenu,
        PlaceNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::PlaceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Place not found" })),
                )
                    .into_response(),
                Self::FailedToCreateMenu => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create menu" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
