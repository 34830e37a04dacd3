//! Infers an S3 bucket and object key from a file URL.

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// https://{bucket}.s3[.region].amazonaws.com/{key}
static VIRTUAL_HOSTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?P<bucket>[^/]+?)\.s3(?:[.-][^/]*)?(?:/(?P<key>.*))?$")
        .expect("virtual-hosted S3 pattern")
});

// https://s3.amazonaws.com/{bucket}/{key}
static PATH_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://s3\.amazonaws\.com/(?P<bucket>[\w-]+)/(?P<key>.*)$")
        .expect("path-style S3 pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct S3Location {
    pub bucket: String,
    pub object_key: String,
}

/// Bucket name from a virtual-hosted or path-style S3 URL.
pub fn extract_bucket(url: &str) -> Option<String> {
    capture(url, "bucket")
}

/// Object key, including any containing folders, from an S3 URL.
pub fn extract_object_key(url: &str) -> Option<String> {
    capture(url, "key")
}

pub fn parse_s3_url(url: &str) -> Option<S3Location> {
    Some(S3Location {
        bucket: extract_bucket(url)?,
        object_key: extract_object_key(url)?,
    })
}

fn capture(url: &str, group: &str) -> Option<String> {
    let decoded = percent_decode_str(url).decode_utf8_lossy();

    [&*VIRTUAL_HOSTED, &*PATH_STYLE].iter().find_map(|pattern| {
        pattern
            .captures(&decoded)
            .and_then(|caps| caps.name(group))
            .map(|m| m.as_str().to_string())
    })
}
