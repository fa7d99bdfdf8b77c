pub use crate::utils::database;
use crate::utils::storage;
use async_trait::async_trait;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub cors_origins: Vec<String>,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub google_client_id: String,
    pub kakao_user_info_endpoint: String,
    pub google_token_info_endpoint: String,
    pub http: reqwest::Client,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub storage: storage::StorageContext,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub cors_origins: Vec<String>,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub google_client_id: String,
    pub kakao_user_info_endpoint: String,
    pub google_token_info_endpoint: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub public_url: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000,https://weeat.site,https://www.weeat.site,https://api.weeat.site,http://weeat.site";

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{} not set", key))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        let database_url = required("DATABASE_URL");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );
        let jwt_secret = required("JWT_SECRET");
        let access_token_expire_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .expect("Invalid ACCESS_TOKEN_EXPIRE_MINUTES");
        let google_client_id = required("GOOGLE_CLIENT_ID");
        let kakao_user_info_endpoint = env::var("KAKAO_USER_INFO_ENDPOINT")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string());
        let google_token_info_endpoint = env::var("GOOGLE_TOKEN_INFO_ENDPOINT")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string());
        let storage_bucket = required("S3_BUCKET");
        let storage_region = env::var("S3_REGION").unwrap_or_else(|_| "ap-northeast-2".to_string());
        let storage_endpoint = env::var("S3_ENDPOINT").ok();
        let storage_public_url = env::var("S3_PUBLIC_URL").unwrap_or_else(|_| {
            format!(
                "https://{}.s3.{}.amazonaws.com",
                storage_bucket, storage_region
            )
        });

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
                cors_origins,
            },
            auth: AuthConfig {
                jwt_secret,
                access_token_expire_minutes,
                google_client_id,
                kakao_user_info_endpoint,
                google_token_info_endpoint,
            },
            storage: StorageConfig {
                bucket: storage_bucket,
                region: storage_region,
                endpoint: storage_endpoint,
                public_url: storage_public_url.trim_end_matches('/').to_string(),
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(self.database.url.as_str()).await?;
        database::migrate(&db_conn).await?;

        let storage = storage::StorageContext::new(
            self.storage.bucket,
            self.storage.region,
            self.storage.endpoint,
            self.storage.public_url,
        )
        .await;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
                cors_origins: self.app.cors_origins,
            },
            db_conn,
            storage,
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                access_token_expire_minutes: self.auth.access_token_expire_minutes,
                google_client_id: self.auth.google_client_id,
                kakao_user_info_endpoint: self.auth.kakao_user_info_endpoint,
                google_token_info_endpoint: self.auth.google_token_info_endpoint,
                http: reqwest::Client::new(),
            },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        assert_eq!(
            parse_origins(" http://localhost:5173, ,https://weeat.site "),
            vec!["http://localhost:5173", "https://weeat.site"]
        );
    }

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(
            AppEnvironment::from("staging".to_string()),
            AppEnvironment::Development
        );
        assert_eq!(
            AppEnvironment::from("production".to_string()),
            AppEnvironment::Production
        );
    }
}
