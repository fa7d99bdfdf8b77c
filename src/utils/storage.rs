use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{primitives::ByteStream, Client};
use std::path::Path;
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UploadFailed,
    DeleteFailed,
}

#[derive(Clone)]
pub struct StorageContext {
    client: Client,
    pub bucket: String,
    pub public_url: String,
}

impl StorageContext {
    pub async fn new(
        bucket: String,
        region: String,
        endpoint: Option<String>,
        public_url: String,
    ) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            // S3-compatible stores (minio, R2) address buckets by path
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::from_client(Client::from_conf(builder.build()), bucket, public_url)
    }

    pub fn from_client(client: Client, bucket: String, public_url: String) -> Self {
        Self {
            client,
            bucket,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }

    pub fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_url)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .map(String::from)
    }

    /// Like [`Self::key_from_url`], but only for objects stored under `prefix`.
    pub fn key_under(&self, url: &str, prefix: &str) -> Option<String> {
        self.key_from_url(url)
            .filter(|key| key.starts_with(prefix) && key.len() > prefix.len())
            .filter(|key| !key.split('/').any(|segment| segment == ".."))
    }
}

pub fn object_key(prefix: &str, file_name: Option<&str>) -> String {
    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    format!("{}/{}{}", prefix.trim_matches('/'), Ulid::new(), extension)
}

/// Uploads `contents` under `key` and returns the public URL of the object.
pub async fn upload_file(
    cfg: &StorageContext,
    key: String,
    content_type: Option<String>,
    contents: Vec<u8>,
) -> Result<String, Error> {
    cfg.client
        .put_object()
        .bucket(&cfg.bucket)
        .key(&key)
        .set_content_type(content_type)
        .body(ByteStream::from(contents))
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to upload {}: {:?}", key, err);
            Error::UploadFailed
        })?;

    tracing::debug!("Uploaded {} to bucket {}", key, cfg.bucket);

    Ok(cfg.url_for(&key))
}

pub async fn delete_file(cfg: &StorageContext, key: &str) -> Result<(), Error> {
    cfg.client
        .delete_object()
        .bucket(&cfg.bucket)
        .key(key)
        .send()
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to delete file {}: {:?}", key, err);
            Error::DeleteFailed
        })
}

#[cfg(test)]
pub mod test {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Region};

    pub fn storage_context() -> StorageContext {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("ap-northeast-2"))
            .build();

        StorageContext::from_client(
            Client::from_conf(config),
            "weeat".to_string(),
            "https://cdn.weeat.site/".to_string(),
        )
    }

    #[test]
    fn keys_round_trip_through_public_urls() {
        let storage = storage_context();
        let url = storage.url_for("reviews/1/01J0.jpg");

        assert_eq!(url, "https://cdn.weeat.site/reviews/1/01J0.jpg");
        assert_eq!(
            storage.key_from_url(&url).as_deref(),
            Some("reviews/1/01J0.jpg")
        );
    }

    #[test]
    fn foreign_urls_have_no_key() {
        let storage = storage_context();

        assert_eq!(storage.key_from_url("https://example.com/a.jpg"), None);
        assert_eq!(storage.key_from_url("https://cdn.weeat.site/"), None);
    }

    #[test]
    fn scoped_keys_stay_inside_their_prefix() {
        let storage = storage_context();

        assert_eq!(
            storage
                .key_under("https://cdn.weeat.site/reviews/1/a.jpg", "reviews/1/")
                .as_deref(),
            Some("reviews/1/a.jpg")
        );
        assert_eq!(
            storage.key_under("https://cdn.weeat.site/reviews/10/a.jpg", "reviews/1/"),
            None
        );
        assert_eq!(
            storage.key_under("https://cdn.weeat.site/reviews/1/../9/a.jpg", "reviews/1/"),
            None
        );
        assert_eq!(
            storage.key_under("https://cdn.weeat.site/reviews/1/", "reviews/1/"),
            None
        );
    }

    #[test]
    fn object_keys_keep_the_file_extension() {
        let key = object_key("/reviews/7/", Some("Dinner.JPG"));

        assert!(key.starts_with("reviews/7/"));
        assert!(key.ends_with(".jpg"));

        let key = object_key("reviews/7", None);
        assert!(!key.contains('.'));
    }
}
