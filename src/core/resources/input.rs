use crate::core::client::{check_page, BitcodinClient};
use crate::core::payload::decode_value;
use crate::core::s3_url::{extract_bucket, extract_object_key};
use crate::domain::model::{Input, InputType};
use crate::utils::error::Result;

impl Input {
    /// Input read from `url`.
    ///
    /// For S3 inputs the bucket and object key are inferred from the URL
    /// when `params` does not set them, and the URL itself is not sent.
    pub fn with_url(url: impl Into<String>, mut params: Input) -> Input {
        let url = url.into();

        if params.input_type == Some(InputType::S3) {
            if params.bucket.is_none() {
                params.bucket = extract_bucket(&url);
            }
            if params.object_key.is_none() {
                params.object_key = extract_object_key(&url);
            }
            if params.bucket.is_none() {
                tracing::warn!("Could not infer S3 bucket from {}", url);
            }
        } else {
            params.url = Some(url);
        }
        params
    }
}

impl BitcodinClient {
    pub async fn create_input(&self, input: &Input) -> Result<Input> {
        self.create(input).await
    }

    pub async fn get_input(&self, input_id: i64) -> Result<Input> {
        self.fetch(input_id).await
    }

    /// One page of inputs, ten per page.
    pub async fn list_inputs(&self, page: u32, reload: bool) -> Result<Vec<Input>> {
        let path = format!("/inputs/{}", check_page(page)?);
        decode_value(self.cached_json(&path, reload).await?)
    }
}
