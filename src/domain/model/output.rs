use super::{parse_timestamp, require_credentials};
use crate::domain::ports::{Fetchable, Resource};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    S3,
    Gcs,
    Azure,
    Ftp,
    #[serde(other)]
    Other,
}

/// Destination storage for encoded files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Virtual sub-directory inside the bucket or container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_public: Option<bool>,
    /// Place each job's files under `<job_id>_<hash>`. The API defaults this to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_sub_directory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Output {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }
}

impl Resource for Output {
    const NAME: &'static str = "output";
    const PATH: &'static str = "output";

    fn id(&self) -> Option<i64> {
        self.output_id
    }

    fn check_required(&self) -> Result<()> {
        match self.output_type {
            Some(OutputType::S3 | OutputType::Gcs) => {
                require_credentials(Self::NAME, &self.access_key, &self.secret_key)
            }
            _ => Ok(()),
        }
    }
}

impl Fetchable for Output {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BitcodinError;

    #[test]
    fn test_gcs_output_requires_secret() {
        let output = Output {
            output_type: Some(OutputType::Gcs),
            access_key: Some("gcsKey".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            output.check_required(),
            Err(BitcodinError::MissingRequiredField { resource: "output", field: "secret_key" })
        ));
    }

    #[test]
    fn test_azure_output_skips_key_pair_check() {
        let output = Output {
            output_type: Some(OutputType::Azure),
            account_name: Some("account".to_string()),
            ..Default::default()
        };

        assert!(output.check_required().is_ok());
        assert_eq!(output.create_path(), "/output/create");
    }
}
