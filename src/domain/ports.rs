use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Where and how to reach the API. Passed to the client instead of living
/// in process-wide state.
pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn api_version(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// A record the API can create and fetch by id.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Human-readable name used in errors and logs.
    const NAME: &'static str;

    /// Singular path segment, as in `/{PATH}/create` and `/{PATH}/{id}`.
    const PATH: &'static str;

    fn id(&self) -> Option<i64>;

    fn create_path(&self) -> String {
        format!("/{}/create", Self::PATH)
    }

    /// Fails with `MissingRequiredField` before any request is sent.
    fn check_required(&self) -> Result<()> {
        Ok(())
    }
}

/// A resource with a `/{PATH}/{id}` details endpoint.
pub trait Fetchable: Resource {
    fn details_path(id: i64) -> String {
        format!("/{}/{}", Self::PATH, id)
    }
}
