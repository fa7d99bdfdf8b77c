use crate::{modules::user::repository::User, types::AuthContext};
use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// What a successful sign-in returns to the client.
#[derive(Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: User,
}

pub fn create_access_token(cfg: &AuthContext, user_id: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(cfg.access_token_expire_minutes)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign access token for user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

pub fn verify_access_token(cfg: &AuthContext, token: &str) -> Result<i64> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => {
            tracing::debug!("Rejected access token: {}", err);
            Error::InvalidToken
        }
    })?;

    data.claims.sub.parse::<i64>().map_err(|_| Error::InvalidToken)
}

pub fn issue(cfg: &AuthContext, user: User) -> Result<AccessToken> {
    create_access_token(cfg, user.id).map(|access_token| AccessToken {
        access_token,
        token_type: "bearer",
        user,
    })
}

#[cfg(test)]
pub mod test {
    use super::*;

    pub fn auth_context() -> AuthContext {
        AuthContext {
            jwt_secret: String::from("test-secret"),
            access_token_expire_minutes: 30,
            google_client_id: String::from("weeat-client-id"),
            kakao_user_info_endpoint: String::from("http://127.0.0.1:9/v2/user/me"),
            google_token_info_endpoint: String::from("http://127.0.0.1:9/tokeninfo"),
            http: reqwest::Client::new(),
        }
    }

    #[test]
    fn issued_tokens_resolve_to_their_user() {
        let cfg = auth_context();
        let token = create_access_token(&cfg, 42).unwrap();

        assert_eq!(verify_access_token(&cfg, &token), Ok(42));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let cfg = auth_context();
        let token = create_access_token(
            &AuthContext {
                jwt_secret: String::from("another-secret"),
                ..auth_context()
            },
            42,
        )
        .unwrap();

        assert_eq!(verify_access_token(&cfg, &token), Err(Error::InvalidToken));
        assert_eq!(
            verify_access_token(&cfg, "not-a-token"),
            Err(Error::InvalidToken)
        );
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let cfg = AuthContext {
            access_token_expire_minutes: -120,
            ..auth_context()
        };
        let token = create_access_token(&cfg, 42).unwrap();

        assert_eq!(verify_access_token(&cfg, &token), Err(Error::ExpiredToken));
    }
}
