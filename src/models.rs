use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Form or query-string parameters. Encoded in key order.
pub type RequestParameters = BTreeMap<String, String>;

/// Extra request headers, applied in key order after any fixed headers.
pub type RequestHeaders = BTreeMap<String, String>;

/// Outcome of a successful request: the status code and the decoded JSON object body.
///
/// Only produced when the request completed and the body decoded into an object,
/// so a value of this type is never partially filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseResult {
    code: u16,
    data: Map<String, Value>,
}

impl ResponseResult {
    pub fn new(code: u16, data: Map<String, Value>) -> Self {
        Self { code, data }
    }

    /// HTTP status code of the response
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Decoded body
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Look up a single top-level field of the body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Consumes the result, returning the decoded body
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}

impl fmt::Display for ResponseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResponseResult(code={}, data={})",
            self.code,
            Value::Object(self.data.clone())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_accessors() {
        let result = ResponseResult::new(200, object(json!({"ok": true, "count": 3})));

        assert_eq!(result.code(), 200);
        assert!(result.is_success());
        assert_eq!(result.get("ok"), Some(&json!(true)));
        assert_eq!(result.get("count"), Some(&json!(3)));
        assert_eq!(result.get("missing"), None);
        assert_eq!(result.data().len(), 2);
    }

    #[test]
    fn test_is_success_boundaries() {
        assert!(!ResponseResult::new(199, Map::new()).is_success());
        assert!(ResponseResult::new(204, Map::new()).is_success());
        assert!(!ResponseResult::new(301, Map::new()).is_success());
        assert!(!ResponseResult::new(500, Map::new()).is_success());
    }

    #[test]
    fn test_serializes_as_code_and_data() {
        let result = ResponseResult::new(404, object(json!({"error": "not found"})));
        let serialized = serde_json::to_value(&result).unwrap();

        assert_eq!(
            serialized,
            json!({"code": 404, "data": {"error": "not found"}})
        );
    }

    #[test]
    fn test_display_includes_code_and_body() {
        let result = ResponseResult::new(200, object(json!({"ok": true})));
        assert_eq!(
            result.to_string(),
            r#"ResponseResult(code=200, data={"ok":true})"#
        );
    }

    #[test]
    fn test_into_data_keeps_nested_values() {
        let body = json!({"items": [1, 2, 3], "meta": {"next": null}});
        let result = ResponseResult::new(200, object(body.clone()));

        assert_eq!(Value::Object(result.into_data()), body);
    }
}
