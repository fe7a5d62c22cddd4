use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use secrecy::ExposeSecret;

use crate::{config::Config, errors::AppError, errors::AppResult};

/// Thin wrapper over the S3 client. Uploads overwrite whatever is stored under
/// the key; there is no versioning.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket_name: String,
}

impl S3Storage {
    pub async fn connect(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.aws_access_key.clone(),
            config.aws_secret_key.expose_secret().to_string(),
            None,
            None,
            "environment",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            bucket_name: config.bucket_name.clone(),
        }
    }

    /// Uploads bytes under the key and returns the public URL.
    pub async fn upload(&self, bytes: Vec<u8>, file_key: &str) -> AppResult<String> {
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(file_key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        Ok(self.public_url(file_key))
    }

    pub async fn delete(&self, file_key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(file_key)
            .send()
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        Ok(())
    }

    fn public_url(&self, file_key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, file_key)
    }
}
