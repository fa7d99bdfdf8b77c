use crate::modules::{
    menu::{self, repository::Menu},
    place::{self, repository::PlaceSummary},
};
use sqlx::PgPool;
use std::collections::HashMap;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub struct Snapshot {
    pub places: Vec<PlaceSummary>,
    pub menus: HashMap<i64, Vec<Menu>>,
}

impl Snapshot {
    pub fn menus_for(&self, place_id: i64) -> Vec<Menu> {
        self.menus.get(&place_id).cloned().unwrap_or_default()
    }
}

/// Reads every place and menu from a single consistent view of the database.
pub async fn fetch_snapshot(pool: &PgPool) -> Result<Snapshot> {
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start recommendation transaction: {}", err);
        Error::UnexpectedError
    })?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Failed to set transaction isolation level: {}", err);
            Error::UnexpectedError
        })?;

    let places = place::repository::find_many(&mut *tx, None)
        .await
        .map_err(|_| Error::UnexpectedError)?;
    let menus = menu::repository::find_all(&mut *tx)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit recommendation transaction: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Snapshot {
        places,
        menus: menu::repository::group_by_place(menus),
    })
}
