//! Key-case conversion between the API's camelCase wire JSON and the
//! snake_case structures used in-process.
//!
//! Only mapping keys are rewritten. Values pass through untouched, except
//! that mappings nested directly in a mapping, or as elements of a sequence
//! held by a mapping, are converted recursively. Sequences nested inside
//! sequences are left as they are.

use serde_json::{Map, Value};

/// How a single key is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `defaultStreamId`
    Camel,
    /// `DefaultStreamId`
    CamelCapitalized,
    /// `default_stream_id`
    Snake,
}

impl CaseStyle {
    pub fn apply(self, key: &str) -> String {
        match self {
            CaseStyle::Camel => camelize(key, false),
            CaseStyle::CamelCapitalized => camelize(key, true),
            CaseStyle::Snake => underscore(key),
        }
    }
}

/// Converts snake_case keys to camelCase, recursively.
///
/// `capitalize_first` selects PascalCase keys and applies at every depth.
pub fn to_wire(value: &Value, capitalize_first: bool) -> Value {
    let style = if capitalize_first {
        CaseStyle::CamelCapitalized
    } else {
        CaseStyle::Camel
    };
    transform_keys(value, style)
}

/// Converts camelCase keys to snake_case, recursively.
pub fn to_domain(value: &Value) -> Value {
    transform_keys(value, CaseStyle::Snake)
}

/// Rewrites every key of `value` with `style`.
///
/// A top-level sequence is treated like a sequence value: its mapping
/// elements are converted, anything else is cloned.
pub fn transform_keys(value: &Value, style: CaseStyle) -> Value {
    match value {
        Value::Object(map) => Value::Object(transform_map(map, style)),
        Value::Array(items) => Value::Array(transform_elements(items, style)),
        other => other.clone(),
    }
}

fn transform_map(map: &Map<String, Value>, style: CaseStyle) -> Map<String, Value> {
    // Keys that collide after conversion keep the later entry.
    let mut converted = Map::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Object(inner) => Value::Object(transform_map(inner, style)),
            Value::Array(items) => Value::Array(transform_elements(items, style)),
            other => other.clone(),
        };
        converted.insert(style.apply(key), value);
    }
    converted
}

fn transform_elements(items: &[Value], style: CaseStyle) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(inner) => Value::Object(transform_map(inner, style)),
            other => other.clone(),
        })
        .collect()
}

/// snake_case to camelCase (or PascalCase when `capitalize_first`).
///
/// `/` is rendered as a `::` namespace join with the next character
/// upper-cased. Every character after `_`, and the first character, is
/// upper-cased and the `_` dropped. Without `capitalize_first` only the first
/// character of that result is lower-cased again.
pub fn camelize(word: &str, capitalize_first: bool) -> String {
    let pascal = pascalize(&expand_namespaces(word));
    if capitalize_first {
        return pascal;
    }

    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn expand_namespaces(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '/' {
            out.push(ch);
            continue;
        }
        out.push_str("::");
        if let Some(next) = chars.next_if(|c| *c != '\n') {
            out.extend(next.to_uppercase());
        }
    }
    out
}

fn pascalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }

    while let Some(ch) = chars.next() {
        if ch == '_' {
            match chars.next_if(|c| *c != '\n') {
                Some(next) => out.extend(next.to_uppercase()),
                // trailing underscore is kept
                None => out.push('_'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// camelCase to snake_case.
///
/// Every ASCII capital or whitespace character becomes `_` plus its
/// lower-case form. Runs of capitals are not grouped: `inputID` becomes
/// `input_i_d`.
pub fn underscore(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    for ch in word.chars() {
        if ch.is_ascii_uppercase() || is_boundary_whitespace(ch) {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_boundary_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camelize_basic() {
        assert_eq!(camelize("test_key", false), "testKey");
        assert_eq!(camelize("default_stream_id", false), "defaultStreamId");
        assert_eq!(camelize("default_stream_id", true), "DefaultStreamId");
        assert_eq!(camelize("name", false), "name");
        assert_eq!(camelize("name", true), "Name");
    }

    #[test]
    fn test_camelize_empty() {
        assert_eq!(camelize("", false), "");
        assert_eq!(camelize("", true), "");
    }

    #[test]
    fn test_camelize_separator_edges() {
        assert_eq!(camelize("trailing_", false), "trailing_");
        assert_eq!(camelize("_leading", false), "_leading");
        assert_eq!(camelize("double__under", false), "double_under");
        assert_eq!(camelize("b_frames", false), "bFrames");
        assert_eq!(camelize("m3u8_url", false), "m3u8Url");
    }

    #[test]
    fn test_camelize_namespace_separator() {
        assert_eq!(camelize("active_model/errors", true), "ActiveModel::Errors");
        assert_eq!(camelize("active_model/errors", false), "activeModel::Errors");
    }

    #[test]
    fn test_underscore_basic() {
        assert_eq!(underscore("testKey"), "test_key");
        assert_eq!(underscore("defaultStreamId"), "default_stream_id");
        assert_eq!(underscore("plain"), "plain");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_underscore_does_not_group_capitals() {
        assert_eq!(underscore("inputID"), "input_i_d");
        assert_eq!(underscore("DefaultStreamId"), "_default_stream_id");
    }

    #[test]
    fn test_underscore_whitespace() {
        assert_eq!(underscore("some key"), "some_ key");
    }

    #[test]
    fn test_case_style_apply() {
        assert_eq!(CaseStyle::Camel.apply("audio_meta_data"), "audioMetaData");
        assert_eq!(CaseStyle::CamelCapitalized.apply("audio_meta_data"), "AudioMetaData");
        assert_eq!(CaseStyle::Snake.apply("audioMetaData"), "audio_meta_data");
    }

    #[test]
    fn test_round_trip_legal_identifiers() {
        let keys = [
            "a",
            "id",
            "test_key",
            "input_id",
            "default_stream_id",
            "mv_search_range_max",
            "qp_min",
            "m3u8_url",
            "h264",
            "create_sub_directory",
            "x_y_z",
        ];
        for key in keys {
            assert_eq!(underscore(&camelize(key, false)), key, "key {key}");
        }
    }

    #[test]
    fn test_to_wire_nested() {
        let domain = json!({
            "test_key_outer": [{ "test_key_inner": "test_value" }],
            "watermark_config": { "top_offset": 10 }
        });

        let wire = to_wire(&domain, false);

        assert_eq!(
            wire,
            json!({
                "testKeyOuter": [{ "testKeyInner": "test_value" }],
                "watermarkConfig": { "topOffset": 10 }
            })
        );
        // input untouched
        assert!(domain.get("test_key_outer").is_some());
    }

    #[test]
    fn test_to_wire_capitalized_applies_at_every_depth() {
        let wire = to_wire(&json!({ "outer_key": { "inner_key": 1 } }), true);
        assert_eq!(wire, json!({ "OuterKey": { "InnerKey": 1 } }));
    }

    #[test]
    fn test_leaves_and_nested_sequences_untouched() {
        let domain = json!({
            "manifest_types": ["mpd", "m3u8"],
            "matrix": [[{ "inner_key": 1 }], 2, null],
            "no_cabac": true,
            "rate": 29.97,
            "label": null
        });

        let wire = to_wire(&domain, false);

        assert_eq!(wire["manifestTypes"], json!(["mpd", "m3u8"]));
        assert_eq!(wire["matrix"], json!([[{ "inner_key": 1 }], 2, null]));
        assert_eq!(wire["noCabac"], json!(true));
        assert_eq!(wire["rate"], json!(29.97));
        assert_eq!(wire["label"], Value::Null);
    }

    #[test]
    fn test_to_domain_nested() {
        let wire = json!({ "testKeyOuter": { "testKeyInner": "test_value" } });

        let domain = to_domain(&wire);

        assert_eq!(
            domain,
            json!({ "test_key_outer": { "test_key_inner": "test_value" } })
        );
    }

    #[test]
    fn test_top_level_sequence() {
        let wire = json!([{ "inputId": 1 }, "loose", { "createdAt": "now" }]);

        assert_eq!(
            to_domain(&wire),
            json!([{ "input_id": 1 }, "loose", { "created_at": "now" }])
        );
    }

    #[test]
    fn test_empty_containers_and_scalars() {
        assert_eq!(to_wire(&json!({}), false), json!({}));
        assert_eq!(to_domain(&json!([])), json!([]));
        assert_eq!(to_domain(&json!("camelCase")), json!("camelCase"));
        assert_eq!(to_wire(&Value::Null, false), Value::Null);
    }

    #[test]
    fn test_preserves_key_order() {
        let domain = json!({ "zeta_key": 1, "alpha_key": 2, "mid_key": 3 });

        let wire = to_wire(&domain, false);
        let keys: Vec<&str> = wire.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(keys, ["zetaKey", "alphaKey", "midKey"]);
    }

    #[test]
    fn test_colliding_keys_keep_last() {
        let domain = json!({ "a_b": 1, "aB": 2 });

        assert_eq!(to_wire(&domain, false), json!({ "aB": 2 }));
    }

    #[test]
    fn test_wire_domain_round_trip() {
        let domain = json!({
            "encoding_profile_id": 7,
            "video_stream_configs": [
                { "default_stream_id": 0, "bitrate": 1024000, "profile": "Main" },
                { "default_stream_id": 1, "mv_prediction_mode": "auto" }
            ],
            "cropping_config": { "top": 0, "left": 4, "bottom": 0, "right": 4 },
            "manifest_types": ["mpd"],
            "deinterlace": false
        });

        assert_eq!(to_domain(&to_wire(&domain, false)), domain);
    }
}
