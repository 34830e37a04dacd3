use crate::core::codec::{to_domain, to_wire};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Domain value to the camelCase JSON text the API accepts.
pub fn prepare_request_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&to_wire(value, false))?)
}

/// API response text to a snake_case domain value.
pub fn prepare_response_json(body: &str) -> Result<Value> {
    let wire: Value = serde_json::from_str(body)?;
    Ok(to_domain(&wire))
}

pub fn encode_request<T: Serialize>(resource: &T) -> Result<Value> {
    let domain = serde_json::to_value(resource)?;
    Ok(to_wire(&domain, false))
}

pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    decode_value(prepare_response_json(body)?)
}

pub fn decode_value<T: DeserializeOwned>(domain: Value) -> Result<T> {
    Ok(serde_json::from_value(domain)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BitcodinError;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_prepare_request_json() {
        let result = prepare_request_json(&json!({ "test_key": "test_value" })).unwrap();

        assert_eq!(result, r#"{"testKey":"test_value"}"#);
    }

    #[test]
    fn test_prepare_request_json_nested_array() {
        let result = prepare_request_json(&json!({
            "test_key_outer": [{ "test_key_inner": "test_value" }]
        }))
        .unwrap();

        assert_eq!(result, r#"{"testKeyOuter":[{"testKeyInner":"test_value"}]}"#);
    }

    #[test]
    fn test_prepare_request_json_nested_hash() {
        let result = prepare_request_json(&json!({
            "test_key_outer": { "test_key_inner": "test_value" }
        }))
        .unwrap();

        assert_eq!(result, r#"{"testKeyOuter":{"testKeyInner":"test_value"}}"#);
    }

    #[test]
    fn test_prepare_response_json() {
        let result = prepare_response_json(r#"{"testKey":"test_value"}"#).unwrap();

        assert_eq!(result, json!({ "test_key": "test_value" }));
    }

    #[test]
    fn test_prepare_response_json_nested_array() {
        let result =
            prepare_response_json(r#"{"testKeyOuter": [{ "testKeyInner": "test_value" }]}"#)
                .unwrap();

        assert_eq!(
            result,
            json!({ "test_key_outer": [{ "test_key_inner": "test_value" }] })
        );
    }

    #[test]
    fn test_prepare_response_json_top_level_array() {
        let result = prepare_response_json(r#"[{"inputId": 1}, {"inputId": 2}]"#).unwrap();

        assert_eq!(result, json!([{ "input_id": 1 }, { "input_id": 2 }]));
    }

    #[test]
    fn test_malformed_response_is_decode_error() {
        let err = prepare_response_json("{not json").unwrap_err();

        assert!(matches!(err, BitcodinError::Decode(_)));
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        default_stream_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    }

    #[test]
    fn test_typed_encode_decode() {
        let wire = encode_request(&Sample {
            default_stream_id: 3,
            label: None,
        })
        .unwrap();
        assert_eq!(wire, json!({ "defaultStreamId": 3 }));

        let decoded: Sample =
            decode_response(r#"{"defaultStreamId": 4, "label": "English"}"#).unwrap();
        assert_eq!(
            decoded,
            Sample {
                default_stream_id: 4,
                label: Some("English".to_string()),
            }
        );
    }
}
