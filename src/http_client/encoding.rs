//! Form, query-string and header encoding for outgoing requests

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::form_urlencoded;

use crate::error::AppError;
use crate::models::{RequestHeaders, RequestParameters};

/// Encodes parameters as `application/x-www-form-urlencoded` (UTF-8, space as `+`).
///
/// Pairs appear once each, in the map's iteration order.
pub fn encode_params(params: &RequestParameters) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Appends encoded parameters to `url` as a query string.
///
/// Missing or empty parameters leave `url` unchanged. The url is expected to
/// carry no query string of its own.
pub fn build_get_url(url: &str, params: Option<&RequestParameters>) -> String {
    match params.filter(|p| !p.is_empty()) {
        Some(params) => format!("{url}?{}", encode_params(params)),
        None => url.to_string(),
    }
}

/// Builds the outgoing header map.
///
/// The content type, when given, goes in first; caller headers follow and
/// replace any earlier value under the same (case-insensitive) name.
pub fn build_header_map(
    content_type: Option<&str>,
    headers: Option<&RequestHeaders>,
) -> Result<HeaderMap, AppError> {
    let mut map = HeaderMap::new();

    if let Some(content_type) = content_type {
        let value = HeaderValue::from_str(content_type)
            .map_err(|e| AppError::invalid_header(CONTENT_TYPE.as_str(), e.to_string()))?;
        map.insert(CONTENT_TYPE, value);
    }

    for (name, value) in headers.into_iter().flatten() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::invalid_header(name, e.to_string()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| AppError::invalid_header(name, e.to_string()))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FORM_CONTENT_TYPE;

    fn params(pairs: &[(&str, &str)]) -> RequestParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_params_joins_pairs_in_key_order() {
        let encoded = encode_params(&params(&[("b", "2"), ("a", "1")]));
        assert_eq!(encoded, "a=1&b=2");
    }

    #[test]
    fn test_encode_params_percent_encodes_utf8() {
        let encoded = encode_params(&params(&[("name", "Jää kiekko"), ("q", "a&b=c")]));
        assert_eq!(encoded, "name=J%C3%A4%C3%A4+kiekko&q=a%26b%3Dc");
    }

    #[test]
    fn test_encode_params_empty() {
        assert_eq!(encode_params(&RequestParameters::new()), "");
    }

    #[test]
    fn test_build_get_url_without_params() {
        assert_eq!(
            build_get_url("http://localhost:8080/api", None),
            "http://localhost:8080/api"
        );
        assert_eq!(
            build_get_url("http://localhost:8080/api", Some(&RequestParameters::new())),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_build_get_url_with_params() {
        let url = build_get_url(
            "http://localhost:8080/api",
            Some(&params(&[("page", "2"), ("filter", "open issues")])),
        );
        assert_eq!(url, "http://localhost:8080/api?filter=open+issues&page=2");
    }

    #[test]
    fn test_build_header_map_sets_content_type_first() {
        let map = build_header_map(Some(FORM_CONTENT_TYPE), None).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), FORM_CONTENT_TYPE);
    }

    #[test]
    fn test_build_header_map_applies_caller_headers() {
        let headers = params(&[("X-Request-Id", "abc"), ("Accept", "application/json")]);
        let map = build_header_map(None, Some(&headers)).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x-request-id").unwrap(), "abc");
        assert_eq!(map.get("accept").unwrap(), "application/json");
        assert!(map.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_caller_content_type_replaces_default() {
        let headers = params(&[("Content-Type", "text/plain")]);
        let map = build_header_map(Some(FORM_CONTENT_TYPE), Some(&headers)).unwrap();

        let values: Vec<_> = map.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "text/plain");
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let headers = params(&[("Bad Header", "value")]);
        let err = build_header_map(None, Some(&headers)).unwrap_err();

        assert!(matches!(err, AppError::InvalidHeader { ref name, .. } if name == "Bad Header"));
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let headers = params(&[("X-Note", "line\nbreak")]);
        let err = build_header_map(None, Some(&headers)).unwrap_err();

        assert!(matches!(err, AppError::InvalidHeader { .. }));
    }
}
