use crate::core::cache::ListCache;
use crate::core::payload::{decode_value, prepare_request_json, prepare_response_json};
use crate::domain::ports::{ConfigProvider, Fetchable, Resource};
use crate::utils::error::{BitcodinError, Result};
use crate::utils::validation::validate_positive_number;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

const API_KEY_HEADER: &str = "bitcodin-api-key";
const API_VERSION_HEADER: &str = "bitcodin-api-version";

/// HTTP client for the bitcodin REST API.
///
/// Every request body goes through the key-case codec on the way out and
/// every response body on the way back.
#[derive(Debug)]
pub struct BitcodinClient {
    http: Client,
    base_url: String,
    cache: ListCache,
}

impl BitcodinClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_VERSION_HEADER,
            header_value("api_version", config.api_version())?,
        );
        let mut key = header_value("api_key", config.api_key())?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url().trim_end_matches('/').to_string(),
            cache: ListCache::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drops every memoized listing page.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Validates `resource`, POSTs it and returns the record the API echoes back.
    pub async fn create<R: Resource>(&self, resource: &R) -> Result<R> {
        resource.check_required()?;

        let path = resource.create_path();
        let domain = serde_json::to_value(resource)?;
        // An empty response body leaves the submitted record as the result.
        let created = match self.post_json(&path, &domain).await? {
            Value::Null => domain,
            body => body,
        };

        let created: R = decode_value(created)?;
        tracing::debug!("Created {} {:?}", R::NAME, created.id());
        Ok(created)
    }

    pub async fn fetch<R: Fetchable>(&self, id: i64) -> Result<R> {
        decode_value(self.get_json(&R::details_path(id)).await?)
    }

    /// Re-reads `resource` from the API in place.
    pub async fn refresh<R: Fetchable>(&self, resource: &mut R) -> Result<()> {
        let id = resource.id().ok_or(BitcodinError::MissingRequiredField {
            resource: R::NAME,
            field: "id",
        })?;
        *resource = self.fetch(id).await?;
        Ok(())
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let request = self.http.get(self.url(path));
        self.send(request, path).await
    }

    pub(crate) async fn post_json(&self, path: &str, domain: &Value) -> Result<Value> {
        let body = prepare_request_json(domain)?;
        let request = self.http.post(self.url(path)).body(body);
        self.send(request, path).await
    }

    /// GET through the listing cache; `reload` forces a fresh request.
    pub(crate) async fn cached_json(&self, path: &str, reload: bool) -> Result<Value> {
        if !reload {
            if let Some(page) = self.cache.get(path) {
                tracing::debug!("Serving {} from cache", path);
                return Ok(page);
            }
        }

        let page = self.get_json(path).await?;
        self.cache.insert(path, page.clone());
        Ok(page)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Value> {
        tracing::debug!("Making API request to: {}", path);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(BitcodinError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        prepare_response_json(&body)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| BitcodinError::InvalidConfigValueError {
        field: field.to_string(),
        value: "<redacted>".to_string(),
        reason: format!("Not a valid HTTP header value: {}", e),
    })
}

/// Listing pages are 1-based.
pub(crate) fn check_page(page: u32) -> Result<u32> {
    validate_positive_number("page", page.into(), 1)?;
    Ok(page)
}
