//! One-shot blocking GET/POST requests that decode a JSON object body.
//!
//! Every call builds its own client and single-threaded runtime, sends a
//! single request and drops both before returning, whichever way the call
//! ends. The calling thread blocks until then, so these functions must not be
//! called from inside an async runtime. Failures are logged once at the call
//! boundary and handed back as [`AppError`] values; nothing is retried.

pub mod builder;
pub mod encoding;

use reqwest::{Method, RequestBuilder, Response};
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::constants::{DEFAULT_RESPONSE_CHARSET, FORM_CONTENT_TYPE, LOG_BODY_PREVIEW_CHARS};
use crate::error::{AppError, ErrorKind};
use crate::models::{RequestHeaders, RequestParameters, ResponseResult};

pub use builder::{ClientSettings, create_client, create_runtime};

/// Issues GET and POST requests with fixed timeouts and returns the decoded body.
///
/// The helper only holds immutable settings, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct HttpClientHelper {
    settings: ClientSettings,
}

impl HttpClientHelper {
    /// Helper with the default timeouts (connect 5s, read 10s) and redirects on
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(ClientSettings::from(config))
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Sends a POST with `params` as a UTF-8 form body.
    ///
    /// The content type is `application/x-www-form-urlencoded;charset=UTF-8`
    /// unless `headers` sets its own.
    ///
    /// # Arguments
    /// * `url` - Target URL, must not be blank
    /// * `params` - Form fields; `None` or empty sends no body
    /// * `headers` - Extra request headers
    ///
    /// # Returns
    /// * `Ok(ResponseResult)` - Status code plus decoded JSON object, for any status
    /// * `Err(AppError)` - Validation, decode or transport failure, already logged
    #[instrument(skip(self, params, headers))]
    pub fn post(
        &self,
        url: &str,
        params: Option<&RequestParameters>,
        headers: Option<&RequestHeaders>,
    ) -> Result<ResponseResult, AppError> {
        let outcome = self.execute_post(url, params, headers);
        log_outcome(&Method::POST, url, &outcome);
        outcome
    }

    /// Sends a GET with `params` appended to `url` as a query string.
    ///
    /// # Arguments
    /// * `url` - Target URL without a query string, must not be blank
    /// * `params` - Query parameters; `None` or empty requests `url` as given
    /// * `headers` - Extra request headers
    ///
    /// # Returns
    /// * `Ok(ResponseResult)` - Status code plus decoded JSON object, for any status
    /// * `Err(AppError)` - Validation, decode or transport failure, already logged
    #[instrument(skip(self, params, headers))]
    pub fn get(
        &self,
        url: &str,
        params: Option<&RequestParameters>,
        headers: Option<&RequestHeaders>,
    ) -> Result<ResponseResult, AppError> {
        let outcome = self.execute_get(url, params, headers);
        log_outcome(&Method::GET, url, &outcome);
        outcome
    }

    fn execute_post(
        &self,
        url: &str,
        params: Option<&RequestParameters>,
        headers: Option<&RequestHeaders>,
    ) -> Result<ResponseResult, AppError> {
        ensure_url(&Method::POST, url)?;

        let header_map = encoding::build_header_map(Some(FORM_CONTENT_TYPE), headers)?;
        let body = params
            .filter(|p| !p.is_empty())
            .map(encoding::encode_params);

        self.send(Method::POST, url, |request| {
            let request = request.headers(header_map);
            match body {
                Some(body) => request.body(body),
                None => request,
            }
        })
    }

    fn execute_get(
        &self,
        url: &str,
        params: Option<&RequestParameters>,
        headers: Option<&RequestHeaders>,
    ) -> Result<ResponseResult, AppError> {
        ensure_url(&Method::GET, url)?;

        let target = encoding::build_get_url(url, params);
        let header_map = encoding::build_header_map(None, headers)?;

        self.send(Method::GET, &target, |request| request.headers(header_map))
    }

    /// Runs one request on a runtime owned by this call.
    ///
    /// Must not be called from inside an async runtime.
    fn send<F>(&self, method: Method, url: &str, prepare: F) -> Result<ResponseResult, AppError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let runtime = create_runtime()?;
        runtime.block_on(self.fetch(method, url, prepare))
    }

    async fn fetch<F>(&self, method: Method, url: &str, prepare: F) -> Result<ResponseResult, AppError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let client = create_client(&self.settings, &method)?;
        let response = prepare(client.request(method, url))
            .send()
            .await
            .map_err(|e| AppError::from_request_error(url, e))?;
        read_response(url, response).await
    }
}

/// Sends a GET using the default settings. See [`HttpClientHelper::get`].
pub fn get(
    url: &str,
    params: Option<&RequestParameters>,
    headers: Option<&RequestHeaders>,
) -> Result<ResponseResult, AppError> {
    HttpClientHelper::new().get(url, params, headers)
}

/// Sends a POST using the default settings. See [`HttpClientHelper::post`].
pub fn post(
    url: &str,
    params: Option<&RequestParameters>,
    headers: Option<&RequestHeaders>,
) -> Result<ResponseResult, AppError> {
    HttpClientHelper::new().post(url, params, headers)
}

fn ensure_url(method: &Method, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::empty_url(method.as_str()));
    }
    Ok(())
}

async fn read_response(url: &str, response: Response) -> Result<ResponseResult, AppError> {
    let status = response.status();
    debug!("Response status: {status}");

    let body = response
        .text_with_charset(DEFAULT_RESPONSE_CHARSET)
        .await
        .map_err(|e| AppError::from_request_error(url, e))?;
    debug!("Response length: {} bytes", body.len());

    let data = decode_object(url, &body).inspect_err(|_| {
        let preview: String = body.chars().take(LOG_BODY_PREVIEW_CHARS).collect();
        debug!("Undecodable response body (first {LOG_BODY_PREVIEW_CHARS} chars): {preview}");
    })?;

    Ok(ResponseResult::new(status.as_u16(), data))
}

/// Decodes a response body that must be a JSON object.
///
/// An empty or whitespace-only body (e.g. `204 No Content`) decodes to an
/// empty object. Malformed JSON and JSON of any other shape (array, scalar,
/// null) are decode failures.
pub fn decode_object(url: &str, body: &str) -> Result<Map<String, Value>, AppError> {
    if body.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::response_not_object(
            format!("got {}", json_type_name(&other)),
            url,
        )),
        Err(e) => Err(AppError::response_malformed_json(e.to_string(), url)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn log_outcome(method: &Method, url: &str, outcome: &Result<ResponseResult, AppError>) {
    match outcome {
        Ok(result) => info!("{method} {url} returned {result}"),
        Err(e) => match e.kind() {
            ErrorKind::Validation => warn!("Request validation failed: {e}"),
            ErrorKind::ResponseDecode => {
                error!("Failed to decode response from {method} {url}: {e}")
            }
            ErrorKind::Transport | ErrorKind::Other => {
                error!("{method} request to {url} failed: {e}")
            }
        },
    }
}
