use super::parse_timestamp;
use crate::domain::ports::{Fetchable, Resource};
use crate::utils::error::{BitcodinError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Video and audio renditions plus optional watermark and cropping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_profile_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    /// Degrees, positive is clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    /// Seconds per segment, 1 to 9. Standard speed only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video_stream_configs: Vec<VideoStreamConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_stream_configs: Vec<AudioStreamConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_config: Option<WatermarkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropping_config: Option<CroppingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoStreamConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_stream_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u64>,
    /// baseline, main or high
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// standard, professional or premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Frames per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// h264 or hevc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qp_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qp_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mv_prediction_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mv_search_range_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_cabac: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioStreamConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_stream_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u64>,
    /// Sample rate in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
}

/// Offsets in pixels from each edge of the input video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<i32>,
}

/// Pixels cropped from each edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CroppingConfig {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl EncodingProfile {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.created_at.as_deref())
    }
}

impl Resource for EncodingProfile {
    const NAME: &'static str = "encoding profile";
    const PATH: &'static str = "encoding-profile";

    fn id(&self) -> Option<i64> {
        self.encoding_profile_id
    }

    fn check_required(&self) -> Result<()> {
        if self.video_stream_configs.is_empty() && self.audio_stream_configs.is_empty() {
            return Err(BitcodinError::MissingRequiredField {
                resource: Self::NAME,
                field: "video_stream_configs",
            });
        }
        Ok(())
    }
}

impl Fetchable for EncodingProfile {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payload::encode_request;
    use serde_json::json;

    fn sample_profile() -> EncodingProfile {
        EncodingProfile {
            name: Some("New profile".to_string()),
            video_stream_configs: vec![VideoStreamConfig {
                default_stream_id: Some(0),
                bitrate: Some(1_024_000),
                profile: Some("Main".to_string()),
                preset: Some("Standard".to_string()),
                codec: Some("h264".to_string()),
                height: Some(480),
                width: Some(204),
                b_frames: Some(3),
                ..Default::default()
            }],
            audio_stream_configs: vec![AudioStreamConfig {
                default_stream_id: Some(0),
                bitrate: Some(256_000),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_wire_shape() {
        let wire = encode_request(&sample_profile()).unwrap();

        assert_eq!(
            wire,
            json!({
                "name": "New profile",
                "videoStreamConfigs": [{
                    "defaultStreamId": 0,
                    "bitrate": 1024000,
                    "profile": "Main",
                    "preset": "Standard",
                    "height": 480,
                    "width": 204,
                    "codec": "h264",
                    "bFrames": 3
                }],
                "audioStreamConfigs": [{ "defaultStreamId": 0, "bitrate": 256000 }]
            })
        );
    }

    #[test]
    fn test_profile_without_streams_is_rejected() {
        let profile = EncodingProfile {
            name: Some("empty".to_string()),
            ..Default::default()
        };

        assert!(profile.check_required().is_err());
        assert!(sample_profile().check_required().is_ok());
        assert_eq!(EncodingProfile::details_path(3), "/encoding-profile/3");
    }
}
