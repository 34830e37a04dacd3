use crate::core::client::{check_page, BitcodinClient};
use crate::core::payload::decode_value;
use crate::domain::model::Output;
use crate::utils::error::Result;

impl BitcodinClient {
    pub async fn create_output(&self, output: &Output) -> Result<Output> {
        self.create(output).await
    }

    pub async fn get_output(&self, output_id: i64) -> Result<Output> {
        self.fetch(output_id).await
    }

    pub async fn list_outputs(&self, page: u32, reload: bool) -> Result<Vec<Output>> {
        let path = format!("/outputs/?page={}", check_page(page)?);
        decode_value(self.cached_json(&path, reload).await?)
    }
}
