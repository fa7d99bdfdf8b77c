use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[serde(rename = "양식")]
    Western,
    #[serde(rename = "일식")]
    Japanese,
    #[serde(rename = "중식")]
    Chinese,
    #[serde(rename = "한식")]
    Korean,
    #[serde(rename = "동남아")]
    SoutheastAsian,
    #[serde(rename = "카페")]
    Cafe,
    #[serde(rename = "지중해식")]
    Mediterranean,
    #[serde(rename = "패스트푸드")]
    FastFood,
    #[serde(rename = "그외")]
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Self::Western,
        Self::Japanese,
        Self::Chinese,
        Self::Korean,
        Self::SoutheastAsian,
        Self::Cafe,
        Self::Mediterranean,
        Self::FastFood,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Western => "양식",
            Self::Japanese => "일식",
            Self::Chinese => "중식",
            Self::Korean => "한식",
            Self::SoutheastAsian => "동남아",
            Self::Cafe => "카페",
            Self::Mediterranean => "지중해식",
            Self::FastFood => "패스트푸드",
            Self::Other => "그외",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown place category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Place {
    pub id: i64,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub distance_note: Option<String>,
    pub address: Option<String>,
    pub hero_image_url: Option<String>,
    pub budget_range: Option<i32>,
}

/// A place together with the statistics derived from its reviews.
#[derive(Serialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PlaceSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub place: Place,
    pub rating: f64,
    pub review_count: i64,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

const SELECT_SUMMARIES: &str = "
    SELECT
        places.id,
        places.name,
        places.category,
        places.distance_note,
        places.address,
        places.hero_image_url,
        places.budget_range,
        COALESCE(ROUND(AVG(reviews.rating), 1), 0)::FLOAT8 AS rating,
        COUNT(reviews.id) AS review_count
    FROM
        places
    LEFT JOIN
        reviews
    ON
        reviews.place_id = places.id
";

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    category: Option<Category>,
) -> Result<Vec<PlaceSummary>> {
    let query = format!(
        "{}
        WHERE $1::TEXT IS NULL OR places.category = $1
        GROUP BY places.id
        ORDER BY places.id
        ",
        SELECT_SUMMARIES
    );

    sqlx::query_as::<_, PlaceSummary>(&query)
        .bind(category.map(|category| category.as_str()))
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many places: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<PlaceSummary>> {
    let query = format!(
        "{}
        WHERE places.id = $1
        GROUP BY places.id
        ",
        SELECT_SUMMARIES
    );

    sqlx::query_as::<_, PlaceSummary>(&query)
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch place with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn exists<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM places WHERE id = $1)")
        .bind(id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while checking whether place {} exists: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn categories_parse_from_their_labels() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }

        assert!("피자".parse::<Category>().is_err());
        assert!(Category::try_from(String::from("")).is_err());
    }

    #[test]
    fn categories_serialize_verbatim() {
        assert_eq!(json!(Category::Korean), json!("한식"));
        assert_eq!(
            serde_json::from_value::<Category>(json!("패스트푸드")).unwrap(),
            Category::FastFood
        );
    }

    #[test]
    fn summaries_flatten_place_fields() {
        let summary = PlaceSummary {
            place: Place {
                id: 3,
                name: String::from("스타벅스"),
                category: Category::Cafe,
                distance_note: Some(String::from("도보 5분")),
                address: None,
                hero_image_url: None,
                budget_range: Some(10000),
            },
            rating: 4.5,
            review_count: 2,
        };

        assert_eq!(
            json!(summary),
            json!({
                "id": 3,
                "name": "스타벅스",
                "category": "카페",
                "distance_note": "도보 5분",
                "address": null,
                "hero_image_url": null,
                "budget_range": 10000,
                "rating": 4.5,
                "review_count": 2,
            })
        );
    }
}
