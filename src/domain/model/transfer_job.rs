use super::{parse_timestamp, require};
use crate::domain::ports::Resource;
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Copy of a finished job's files to an output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
}

impl TransferJob {
    pub fn new(job_id: i64, output_id: i64) -> Self {
        Self {
            job_id: Some(job_id),
            output_id: Some(output_id),
            ..Default::default()
        }
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }
}

impl Resource for TransferJob {
    const NAME: &'static str = "transfer job";
    const PATH: &'static str = "job";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn create_path(&self) -> String {
        "/job/transfer".to_string()
    }

    fn check_required(&self) -> Result<()> {
        require(Self::NAME, "job_id", &self.job_id)?;
        require(Self::NAME, "output_id", &self.output_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payload::encode_request;
    use serde_json::json;

    #[test]
    fn test_transfer_request_body() {
        let transfer = TransferJob::new(5, 7);

        assert!(transfer.check_required().is_ok());
        assert_eq!(transfer.create_path(), "/job/transfer");
        assert_eq!(encode_request(&transfer).unwrap(), json!({ "jobId": 5, "outputId": 7 }));
    }
}
