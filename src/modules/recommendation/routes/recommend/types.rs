pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    fn default_count() -> i64 {
        3
    }

    #[derive(Deserialize, Validate)]
    pub struct Filters {
        #[serde(default = "default_count")]
        #[validate(range(min = 1, max = 10, message = "count must be between 1 and 10"))]
        pub count: i64,
    }

    pub struct Payload {
        pub filters: Filters,
    }

    #[cfg(test)]
    mod test {
        use super::*;
        use serde_json::json;

        #[test]
        fn count_defaults_to_three() {
            let filters: Filters = serde_json::from_value(json!({})).unwrap();

            assert_eq!(filters.count, 3);
            assert!(filters.validate().is_ok());
        }

        #[test]
        fn count_is_bounded() {
            for count in [-1, 0, 11, 100] {
                assert!(Filters { count }.validate().is_err());
            }
            for count in [1, 10] {
                assert!(Filters { count }.validate().is_ok());
            }
        }
    }
}

pub mod response {
    use crate::{
        modules::{
            menu::repository::Menu, place::repository::PlaceSummary,
            recommendation::selector::Recommendation,
        },
        utils::validation,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Recommendations(Vec<Recommendation<PlaceSummary, Menu>>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Recommendations(recommendations) => {
                    (StatusCode::OK, Json(json!(recommendations))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        DatabaseUnavailable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::DatabaseUnavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": "Recommendations are temporarily unavailable" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;

    #[cfg(test)]
    mod test {
        use super::*;
        use crate::modules::place::repository::{Category, Place};

        fn summary() -> PlaceSummary {
            PlaceSummary {
                place: Place {
                    id: 5,
                    name: String::from("라멘집"),
                    category: Category::Japanese,
                    distance_note: Some(String::from("도보 3분")),
                    address: Some(String::from("서울시 마포구")),
                    hero_image_url: None,
                    budget_range: Some(12000),
                },
                rating: 4.3,
                review_count: 7,
            }
        }

        #[test]
        fn entries_flatten_the_place_and_embed_the_menu() {
            let entry = Recommendation {
                place: summary(),
                menu: Some(Menu {
                    id: 11,
                    place_id: 5,
                    name: String::from("돈코츠 라멘"),
                    price: Some(11000),
                }),
                category: Category::Japanese,
            };

            assert_eq!(
                json!(entry),
                json!({
                    "place": {
                        "id": 5,
                        "name": "라멘집",
                        "category": "일식",
                        "distance_note": "도보 3분",
                        "address": "서울시 마포구",
                        "hero_image_url": null,
                        "budget_range": 12000,
                        "rating": 4.3,
                        "review_count": 7,
                    },
                    "menu": {
                        "id": 11,
                        "place_id": 5,
                        "name": "돈코츠 라멘",
                        "price": 11000,
                    },
                    "category": "일식",
                })
            );
        }

        #[test]
        fn places_without_menus_serialize_a_null_menu() {
            let entry: Recommendation<PlaceSummary, Menu> = Recommendation {
                place: summary(),
                menu: None,
                category: Category::Japanese,
            };
            let value = json!(vec![entry]);

            assert_eq!(value[0]["menu"], json!(null));
            assert_eq!(value[0]["category"], json!("일식"));
            assert_eq!(value[0]["place"]["rating"], json!(4.3));
            assert_eq!(value[0]["place"]["review_count"], json!(7));
        }
    }
}
