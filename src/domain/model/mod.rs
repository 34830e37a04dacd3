mod encoding_profile;
mod input;
mod job;
mod output;
mod transfer_job;

pub use encoding_profile::{
    AudioStreamConfig, CroppingConfig, EncodingProfile, VideoStreamConfig, WatermarkConfig,
};
pub use input::{Input, InputType};
pub use job::{
    AudioMetaData, Job, JobListStatus, JobStatus, ManifestInfo, ManifestType,
    MergeAudioChannelConfig,
};
pub use output::{Output, OutputType};
pub use transfer_job::TransferJob;

use crate::utils::error::{BitcodinError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parses the API's `created_at` style timestamps.
///
/// Accepts RFC 3339 and the zone-less `YYYY-MM-DD HH:MM:SS` form, the latter
/// read as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// S3 and GCS storage needs both halves of the key pair.
pub(crate) fn require_credentials(
    resource: &'static str,
    access_key: &Option<String>,
    secret_key: &Option<String>,
) -> Result<()> {
    if access_key.as_deref().map_or(true, str::is_empty) {
        return Err(BitcodinError::MissingRequiredField {
            resource,
            field: "access_key",
        });
    }
    if secret_key.as_deref().map_or(true, str::is_empty) {
        return Err(BitcodinError::MissingRequiredField {
            resource,
            field: "secret_key",
        });
    }
    Ok(())
}

pub(crate) fn require<T>(resource: &'static str, field: &'static str, value: &Option<T>) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(BitcodinError::MissingRequiredField { resource, field }),
    }
}
