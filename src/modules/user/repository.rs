use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum AuthProvider {
    #[serde(rename = "kakao")]
    Kakao,
    #[serde(rename = "google")]
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kakao => "kakao",
            Self::Google => "google",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub display_name: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub auth_provider: Option<String>,
    pub auth_sub: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_social(&self) -> bool {
        self.auth_provider.is_some()
    }

    /// Whether email sign-in still works once the social identity is gone.
    pub fn has_password_login(&self) -> bool {
        self.email.is_some() && self.password_hash.is_some()
    }
}

pub struct CreateUserPayload {
    pub display_name: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub social: Option<(AuthProvider, String)>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    Duplicate,
    ConstraintViolation,
}

type Result<T> = std::result::Result<T, Error>;

fn map_write_error(context: &str, err: sqlx::Error) -> Error {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            tracing::warn!("{}: {}", context, db_err);
            return Error::Duplicate;
        }
        if db_err.is_check_violation() {
            tracing::warn!("{}: {}", context, db_err);
            return Error::ConstraintViolation;
        }
    }

    tracing::error!("{}: {}", context, err);
    Error::UnexpectedError
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    let (auth_provider, auth_sub) = match payload.social {
        Some((provider, sub)) => (Some(provider.as_str()), Some(sub)),
        None => (None, None),
    };

    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (display_name, email, password_hash, auth_provider, auth_sub)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(payload.display_name)
    .bind(payload.email.map(|email| email.to_lowercase()))
    .bind(payload.password_hash)
    .bind(auth_provider)
    .bind(auth_sub)
    .fetch_one(e)
    .await
    .map_err(|err| map_write_error("Error occurred while creating a user account", err))
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.to_lowercase())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_social<'e, E: PgExecutor<'e>>(
    e: E,
    provider: AuthProvider,
    sub: &str,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE auth_provider = $1 AND auth_sub = $2")
        .bind(provider.as_str())
        .bind(sub)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching {} user {}: {}",
                provider.as_str(),
                sub,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn clear_social_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            auth_provider = NULL,
            auth_sub = NULL
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| map_write_error("Error occurred while revoking a social login", err))
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete user with id {}: {}",
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
    fn password_hashes_are_never_serialized() {
        let user = User {
            id: 1,
            display_name: String::from("위잇"),
            email: Some(String::from("hello@weeat.site")),
            password_hash: Some(String::from("$2b$12$secret")),
            auth_provider: None,
            auth_sub: None,
            created_at: Utc::now(),
        };

        let value = json!(user);
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], json!("hello@weeat.site"));
        assert!(!user.is_social());
        assert!(user.has_password_login());
    }

    #[test]
    fn social_users_without_a_password_have_no_password_login() {
        let user = User {
            id: 2,
            display_name: String::from("먹보"),
            email: Some(String::from("mukbo@gmail.com")),
            password_hash: None,
            auth_provider: Some(String::from("google")),
            auth_sub: Some(String::from("1098")),
            created_at: Utc::now(),
        };

        assert!(user.is_social());
        assert!(!user.has_password_login());
    }
}
