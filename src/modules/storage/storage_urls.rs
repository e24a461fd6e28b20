//! Download URL resolution for MinIO/S3-compatible storage
//!
//! Public keys map to a direct URL on the public endpoint. Every other key
//! gets a presigned GET URL, signed locally with rust-s3 (no network call).

use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

/// Builds download URLs for storage keys
pub struct StorageUrls {
    bucket: Box<Bucket>,
    presigned_url_expiry_secs: u32,
    endpoint: String,
    public_endpoint: String,
    public_prefix: String,
}

impl StorageUrls {
    /// Create the URL builder from configuration
    pub fn new(config: StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Storage(format!("Failed to create storage credentials: {}", e)))?;

        // Presigned URLs are handed to clients, so sign against the public endpoint
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.public_endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| AppError::Storage(format!("Failed to create storage bucket: {}", e)))?;

        // Path-style URLs (http://endpoint/bucket/key)
        bucket.set_path_style();

        let urls = Self {
            bucket,
            presigned_url_expiry_secs: config.presigned_url_expiry_secs,
            endpoint: config.endpoint,
            public_endpoint: config.public_endpoint,
            public_prefix: config.public_prefix,
        };

        info!(
            "Storage URLs configured for bucket: {}, public_endpoint: {}, public_prefix: {}",
            urls.bucket.name(),
            urls.public_endpoint,
            urls.public_prefix
        );

        Ok(urls)
    }

    /// Resolve the URL clients should use to fetch `key`
    ///
    /// Older rows may hold a full object URL instead of a key; those are
    /// mapped back to the key first.
    pub async fn download_url(&self, key: &str) -> Result<String, AppError> {
        let key = self
            .extract_key_from_url(key)
            .unwrap_or_else(|| key.to_string());

        if self.is_public_key(&key) {
            return Ok(self.public_url(&key));
        }
        self.presigned_url(&key).await
    }

    /// Generate a presigned GET URL valid for the configured expiry
    pub async fn presigned_url(&self, key: &str) -> Result<String, AppError> {
        let url = self
            .bucket
            .presign_get(key, self.presigned_url_expiry_secs, None)
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "Failed to generate presigned URL for '{}': {}",
                    key, e
                ))
            })?;

        debug!("Presigned URL generated for '{}'", key);
        Ok(url)
    }

    /// Direct URL on the public endpoint; each key segment is percent-encoded
    pub fn public_url(&self, key: &str) -> String {
        let encoded_key = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/{}/{}",
            self.public_endpoint,
            self.bucket.name(),
            encoded_key
        )
    }

    /// Extract the storage key from a URL on either endpoint
    ///
    /// Returns `None` when the URL does not point into this bucket.
    pub fn extract_key_from_url(&self, url: &str) -> Option<String> {
        let url = url.split('?').next().unwrap_or(url);

        [&self.public_endpoint, &self.endpoint]
            .into_iter()
            .map(|endpoint| format!("{}/{}/", endpoint, self.bucket.name()))
            .find_map(|prefix| url.strip_prefix(prefix.as_str()).map(str::to_string))
            .map(|encoded| {
                urlencoding::decode(&encoded)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or(encoded)
            })
    }

    /// Check if a storage key lives under the public prefix
    pub fn is_public_key(&self, key: &str) -> bool {
        key.starts_with(&format!("{}/", self.public_prefix))
    }

    /// Get the bucket name
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}
