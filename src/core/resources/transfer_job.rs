use crate::core::client::BitcodinClient;
use crate::core::payload::decode_value;
use crate::domain::model::TransferJob;
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransferPage {
    jobs: Vec<TransferJob>,
}

impl BitcodinClient {
    /// Copies the results of `job_id` to `output_id`.
    pub async fn transfer_job(&self, job_id: i64, output_id: i64) -> Result<TransferJob> {
        self.create(&TransferJob::new(job_id, output_id)).await
    }

    pub async fn list_transfers(&self, job_id: i64, reload: bool) -> Result<Vec<TransferJob>> {
        let path = format!("/jobs/{}/transfers", job_id);
        let page: TransferPage = decode_value(self.cached_json(&path, reload).await?)?;
        Ok(page.jobs)
    }
}
