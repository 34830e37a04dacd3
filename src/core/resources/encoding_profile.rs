use crate::core::client::{check_page, BitcodinClient};
use crate::core::payload::decode_value;
use crate::domain::model::EncodingProfile;
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfilePage {
    profiles: Vec<EncodingProfile>,
}

impl BitcodinClient {
    pub async fn create_encoding_profile(&self, profile: &EncodingProfile) -> Result<EncodingProfile> {
        self.create(profile).await
    }

    pub async fn get_encoding_profile(&self, encoding_profile_id: i64) -> Result<EncodingProfile> {
        self.fetch(encoding_profile_id).await
    }

    /// Profile listings are always fetched fresh.
    pub async fn list_encoding_profiles(&self, page: u32) -> Result<Vec<EncodingProfile>> {
        let path = format!("/encoding-profiles/{}", check_page(page)?);
        let page: ProfilePage = decode_value(self.get_json(&path).await?)?;
        Ok(page.profiles)
    }
}
