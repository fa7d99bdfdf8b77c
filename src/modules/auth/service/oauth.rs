use crate::{modules::user::repository::AuthProvider, types::AuthContext};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidToken,
    ProviderUnavailable,
}

type Result<T> = std::result::Result<T, Error>;

/// Identity of a user as vouched for by a social login provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialProfile {
    pub provider: AuthProvider,
    pub sub: String,
    pub display_name: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct KakaoUser {
    id: i64,
    properties: Option<KakaoProperties>,
    kakao_account: Option<KakaoAccount>,
}

#[derive(Deserialize)]
struct KakaoProperties {
    nickname: Option<String>,
}

#[derive(Deserialize)]
struct KakaoAccount {
    email: Option<String>,
    is_email_verified: Option<bool>,
}

#[derive(Deserialize)]
struct GoogleTokenInfo {
    iss: String,
    aud: String,
    sub: String,
    email: Option<String>,
    email_verified: Option<String>,
    name: Option<String>,
}

pub async fn verify_kakao_token(cfg: &AuthContext, access_token: &str) -> Result<SocialProfile> {
    let res = cfg
        .http
        .get(&cfg.kakao_user_info_endpoint)
        .bearer_auth(access_token)
        .timeout(PROVIDER_TIMEOUT)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to reach kakao user info endpoint: {}", err);
            Error::ProviderUnavailable
        })?;

    if res.status() != StatusCode::OK {
        tracing::warn!("Kakao rejected access token with status {}", res.status());
        return Err(Error::InvalidToken);
    }

    let user = res.json::<KakaoUser>().await.map_err(|err| {
        tracing::error!("Failed to decode kakao user info: {}", err);
        Error::ProviderUnavailable
    })?;

    let nickname = user.properties.and_then(|properties| properties.nickname);
    let email = user.kakao_account.and_then(|account| match account.is_email_verified {
        Some(true) => account.email,
        _ => None,
    });

    Ok(SocialProfile {
        provider: AuthProvider::Kakao,
        sub: user.id.to_string(),
        display_name: nickname.unwrap_or_else(|| format!("kakao_{}", user.id)),
        email,
    })
}

pub async fn verify_google_token(cfg: &AuthContext, id_token: &str) -> Result<SocialProfile> {
    let url = Url::parse_with_params(&cfg.google_token_info_endpoint, &[("id_token", id_token)])
        .map_err(|err| {
            tracing::error!("Invalid google token info endpoint: {}", err);
            Error::ProviderUnavailable
        })?;

    let res = cfg
        .http
        .get(url)
        .timeout(PROVIDER_TIMEOUT)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to reach google token info endpoint: {}", err);
            Error::ProviderUnavailable
        })?;

    if res.status() != StatusCode::OK {
        tracing::warn!("Google rejected id token with status {}", res.status());
        return Err(Error::InvalidToken);
    }

    let info = res.json::<GoogleTokenInfo>().await.map_err(|err| {
        tracing::error!("Failed to decode google token info: {}", err);
        Error::ProviderUnavailable
    })?;

    if !GOOGLE_ISSUERS.contains(&info.iss.as_str()) {
        tracing::warn!("Google id token has unexpected issuer {}", info.iss);
        return Err(Error::InvalidToken);
    }

    if info.aud != cfg.google_client_id {
        tracing::warn!("Google id token was issued for another client");
        return Err(Error::InvalidToken);
    }

    let email = match info.email_verified.as_deref() {
        Some("true") => info.email,
        _ => None,
    };

    let display_name = info
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("google_{}", info.sub));

    Ok(SocialProfile {
        provider: AuthProvider::Google,
        sub: info.sub,
        display_name,
        email,
    })
}

pub async fn verify(cfg: &AuthContext, provider: AuthProvider, token: &str) -> Result<SocialProfile> {
    match provider {
        AuthProvider::Kakao => verify_kakao_token(cfg, token).await,
        AuthProvider::Google => verify_google_token(cfg, token).await,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::auth::service::token::test::auth_context;
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    fn context_for(server: &MockServer) -> AuthContext {
        AuthContext {
            kakao_user_info_endpoint: server.url("/v2/user/me"),
            google_token_info_endpoint: server.url("/tokeninfo"),
            ..auth_context()
        }
    }

    #[tokio::test]
    async fn kakao_profiles_come_from_the_user_info_api() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/user/me")
                    .header("authorization", "Bearer kakao-token");
                then.status(200).json_body(json!({
                    "id": 123456789,
                    "properties": { "nickname": "먹보", "profile_image": "http://k.kakaocdn.net/p.jpg" },
                    "kakao_account": { "email": "mukbo@kakao.com", "is_email_verified": true }
                }));
            })
            .await;

        let profile = verify_kakao_token(&context_for(&server), "kakao-token")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(profile.provider, AuthProvider::Kakao);
        assert_eq!(profile.sub, "123456789");
        assert_eq!(profile.display_name, "먹보");
        assert_eq!(profile.email.as_deref(), Some("mukbo@kakao.com"));
    }

    #[tokio::test]
    async fn kakao_profiles_only_carry_verified_emails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/user/me");
                then.status(200).json_body(json!({
                    "id": 42,
                    "kakao_account": { "email": "someone@kakao.com", "is_email_verified": false }
                }));
            })
            .await;

        let profile = verify_kakao_token(&context_for(&server), "kakao-token")
            .await
            .unwrap();

        assert_eq!(profile.sub, "42");
        assert_eq!(profile.display_name, "kakao_42");
        assert_eq!(profile.email, None);
    }

    #[tokio::test]
    async fn rejected_kakao_tokens_are_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/user/me");
                then.status(401).json_body(json!({ "code": -401 }));
            })
            .await;

        assert_eq!(
            verify_kakao_token(&context_for(&server), "expired").await,
            Err(Error::InvalidToken)
        );
    }

    #[tokio::test]
    async fn google_tokens_must_be_issued_for_our_client() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tokeninfo")
                    .query_param("id_token", "google-token");
                then.status(200).json_body(json!({
                    "iss": "https://accounts.google.com",
                    "aud": "someone-else",
                    "sub": "1098",
                }));
            })
            .await;

        assert_eq!(
            verify_google_token(&context_for(&server), "google-token").await,
            Err(Error::InvalidToken)
        );
    }

    #[tokio::test]
    async fn google_profiles_only_carry_verified_emails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tokeninfo");
                then.status(200).json_body(json!({
                    "iss": "accounts.google.com",
                    "aud": "weeat-client-id",
                    "sub": "1098",
                    "email": "unverified@gmail.com",
                    "email_verified": "false",
                    "name": "Wee At",
                }));
            })
            .await;

        let profile = verify_google_token(&context_for(&server), "google-token")
            .await
            .unwrap();

        assert_eq!(profile.provider, AuthProvider::Google);
        assert_eq!(profile.sub, "1098");
        assert_eq!(profile.display_name, "Wee At");
        assert_eq!(profile.email, None);
    }
}
