use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Menu {
    pub id: i64,
    pub place_id: i64,
    pub name: String,
    pub price: Option<i32>,
}

pub struct CreateMenuPayload {
    pub place_id: i64,
    pub name: String,
    pub price: Option<i32>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMenuPayload) -> Result<Menu> {
    sqlx::query_as::<_, Menu>(
        "
        INSERT INTO menus (place_id, name, price)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(payload.place_id)
    .bind(payload.name)
    .bind(payload.price)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_place_id<'e, E: PgExecutor<'e>>(
    e: E,
    place_id: i64,
) -> Result<Vec<Menu>> {
    sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE place_id = $1 ORDER BY id")
        .bind(place_id)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menus of place {}: {}",
                place_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Menu>> {
    sqlx::query_as::<_, Menu>("SELECT * FROM menus ORDER BY place_id, id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch all menus: {}", err);
            Error::UnexpectedError
        })
}

pub fn group_by_place(menus: Vec<Menu>) -> HashMap<i64, Vec<Menu>> {
    menus.into_iter().fold(HashMap::new(), |mut groups, menu| {
        groups.entry(menu.place_id).or_insert_with(Vec::new).push(menu);
        groups
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn menu(id: i64, place_id: i64) -> Menu {
        Menu {
            id,
            place_id,
            name: format!("menu {}", id),
            price: Some(9000),
        }
    }

    #[test]
    fn groups_menus_by_their_place() {
        let groups = group_by_place(vec![menu(1, 10), menu(2, 20), menu(3, 10)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&10], vec![menu(1, 10), menu(3, 10)]);
        assert_eq!(groups[&20], vec![menu(2, 20)]);
        assert!(groups.get(&30).is_none());
    }
}
