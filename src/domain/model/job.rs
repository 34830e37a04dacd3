use super::{parse_timestamp, require};
use crate::domain::ports::{Fetchable, Resource};
use crate::utils::error::{BitcodinError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestType {
    Mpd,
    M3u8,
}

/// An encoding job: one input, one encoding profile, one or more manifests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_profile_id: Option<i64>,
    /// standard or premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_meta_data: Vec<AudioMetaData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manifest_types: Vec<ManifestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deinterlace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_closed_captions: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_audio_channel_configs: Vec<MergeAudioChannelConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioMetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_stream_id: Option<u32>,
    /// ISO 639-1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Mono input streams merged into one stereo or 5.1 stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeAudioChannelConfig {
    pub audio_channels: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobStatus {
    pub job_id: Option<i64>,
    pub status: Option<String>,
    pub progress: Option<f64>,
    pub created_at: Option<String>,
    pub finished_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestInfo {
    pub mpd_url: Option<String>,
    pub m3u8_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filter for job listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JobListStatus {
    #[default]
    All,
    Finished,
    Enqueued,
    InProgress,
    Error,
}

impl JobListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobListStatus::All => "all",
            JobListStatus::Finished => "finished",
            JobListStatus::Enqueued => "enqueued",
            JobListStatus::InProgress => "inprogress",
            JobListStatus::Error => "error",
        }
    }
}

impl fmt::Display for JobListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobListStatus {
    type Err = BitcodinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(JobListStatus::All),
            "finished" => Ok(JobListStatus::Finished),
            "enqueued" => Ok(JobListStatus::Enqueued),
            "inprogress" | "in_progress" => Ok(JobListStatus::InProgress),
            "error" => Ok(JobListStatus::Error),
            other => Err(BitcodinError::InvalidConfigValueError {
                field: "status".to_string(),
                value: other.to_string(),
                reason: "Expected one of: all, finished, enqueued, inprogress, error".to_string(),
            }),
        }
    }
}

impl Job {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }
}

impl Resource for Job {
    const NAME: &'static str = "job";
    const PATH: &'static str = "job";

    fn id(&self) -> Option<i64> {
        self.job_id
    }

    fn check_required(&self) -> Result<()> {
        require(Self::NAME, "input_id", &self.input_id)?;
        require(Self::NAME, "encoding_profile_id", &self.encoding_profile_id)
    }
}

impl Fetchable for Job {}
