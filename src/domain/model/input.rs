use super::{parse_timestamp, require_credentials};
use crate::domain::ports::{Fetchable, Resource};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Url,
    Ftp,
    S3,
    Gcs,
    Azure,
    Aspera,
    #[serde(other)]
    Other,
}

/// Source media for a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<i64>,
    /// Ask the API to analyse the input in the background.
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub create_async: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bandwidth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bandwidth: Option<String>,
}

impl Input {
    pub fn is_async(&self) -> bool {
        self.create_async.unwrap_or(false)
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }
}

impl Resource for Input {
    const NAME: &'static str = "input";
    const PATH: &'static str = "input";

    fn id(&self) -> Option<i64> {
        self.input_id
    }

    fn create_path(&self) -> String {
        if self.is_async() {
            "/input/createasync".to_string()
        } else {
            "/input/create".to_string()
        }
    }

    fn check_required(&self) -> Result<()> {
        match self.input_type {
            Some(InputType::S3 | InputType::Gcs) => {
                require_credentials(Self::NAME, &self.access_key, &self.secret_key)
            }
            _ => Ok(()),
        }
    }
}

impl Fetchable for Input {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BitcodinError;
    use serde_json::json;

    #[test]
    fn test_serializes_only_set_fields() {
        let input = Input {
            input_type: Some(InputType::S3),
            bucket: Some("bucket-name".to_string()),
            create_async: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "async": true, "type": "s3", "bucket": "bucket-name" })
        );
    }

    #[test]
    fn test_unknown_input_type_is_other() {
        let input: Input = serde_json::from_value(json!({ "type": "dropbox" })).unwrap();

        assert_eq!(input.input_type, Some(InputType::Other));
    }

    #[test]
    fn test_async_inputs_use_async_path() {
        let mut input = Input::default();
        assert_eq!(input.create_path(), "/input/create");

        input.create_async = Some(true);
        assert_eq!(input.create_path(), "/input/createasync");
        assert_eq!(Input::details_path(12), "/input/12");
    }

    #[test]
    fn test_s3_input_requires_credentials() {
        let input = Input {
            input_type: Some(InputType::S3),
            secret_key: Some("awsS3Secret".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            input.check_required(),
            Err(BitcodinError::MissingRequiredField { resource: "input", field: "access_key" })
        ));
    }

    #[test]
    fn test_url_input_needs_no_credentials() {
        let input = Input {
            input_type: Some(InputType::Url),
            url: Some("http://example.com/video.mp4".to_string()),
            ..Default::default()
        };

        assert!(input.check_required().is_ok());
    }
}
