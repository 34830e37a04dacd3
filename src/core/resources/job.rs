use crate::core::client::{check_page, BitcodinClient};
use crate::core::payload::decode_value;
use crate::domain::model::{Job, JobListStatus, JobStatus, ManifestInfo};
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JobPage {
    jobs: Vec<Job>,
}

impl BitcodinClient {
    pub async fn create_job(&self, job: &Job) -> Result<Job> {
        self.create(job).await
    }

    pub async fn get_job(&self, job_id: i64) -> Result<Job> {
        self.fetch(job_id).await
    }

    pub async fn job_status(&self, job_id: i64) -> Result<JobStatus> {
        decode_value(self.get_json(&format!("/job/{}/status", job_id)).await?)
    }

    pub async fn job_manifest(&self, job_id: i64) -> Result<ManifestInfo> {
        decode_value(self.get_json(&format!("/job/{}/manifest-info", job_id)).await?)
    }

    /// One page of jobs in `status`, ten per page.
    pub async fn list_jobs(&self, status: JobListStatus, page: u32, reload: bool) -> Result<Vec<Job>> {
        let path = format!("/jobs/{}/{}", check_page(page)?, status);
        let page: JobPage = decode_value(self.cached_json(&path, reload).await?)?;
        Ok(page.jobs)
    }
}
