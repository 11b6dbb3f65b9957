use thiserror::Error;

/// Broad failure classes a caller can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any network activity
    Validation,
    /// Response arrived but the body is not a JSON object
    ResponseDecode,
    /// Connection, transmission or read failure
    Transport,
    /// Configuration, logging and other application-level failures
    Other,
}

#[derive(Debug, Error)]
pub enum AppError {
    // Request validation
    #[error("{method} request rejected: url must not be empty")]
    EmptyUrl { method: String },

    // Response decoding
    #[error("Response body is not valid JSON: {message} (URL: {url})")]
    ResponseMalformedJson { message: String, url: String },

    #[error("Response body is not a JSON object: {message} (URL: {url})")]
    ResponseNotObject { message: String, url: String },

    // Transport
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Network timeout while requesting: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    // Application
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an empty URL validation error for the given HTTP method
    pub fn empty_url(method: impl Into<String>) -> Self {
        Self::EmptyUrl {
            method: method.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn response_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ResponseMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for JSON that decoded but is not an object
    pub fn response_not_object(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ResponseNotObject {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Classify a reqwest failure into the most specific transport variant.
    pub fn from_request_error(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_timeout(url)
        } else if err.is_connect() {
            Self::network_connection(url, err.to_string())
        } else {
            Self::Transport(err)
        }
    }

    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::EmptyUrl { .. } => ErrorKind::Validation,
            AppError::ResponseMalformedJson { .. }
            | AppError::ResponseNotObject { .. } => ErrorKind::ResponseDecode,
            AppError::Transport(_)
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. }
            | AppError::InvalidHeader { .. } => ErrorKind::Transport,
            AppError::Io(_)
            | AppError::Json(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::Config(_)
            | AppError::LogSetup(_) => ErrorKind::Other,
        }
    }

    /// Check if the request was rejected before touching the network
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if a response was received but could not be decoded
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::ResponseDecode
    }

    /// Check if the failure happened on the wire
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_helper() {
        let error = AppError::empty_url("POST");
        assert!(matches!(error, AppError::EmptyUrl { .. }));
        assert_eq!(
            error.to_string(),
            "POST request rejected: url must not be empty"
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_response_malformed_json_helper() {
        let error = AppError::response_malformed_json(
            "expected value at line 1 column 1",
            "https://api.example.com",
        );
        assert!(matches!(error, AppError::ResponseMalformedJson { .. }));
        assert_eq!(
            error.to_string(),
            "Response body is not valid JSON: expected value at line 1 column 1 (URL: https://api.example.com)"
        );
        assert!(error.is_decode());
    }

    #[test]
    fn test_response_not_object_helper() {
        let error = AppError::response_not_object("got array", "https://api.example.com");
        assert!(matches!(error, AppError::ResponseNotObject { .. }));
        assert_eq!(
            error.to_string(),
            "Response body is not a JSON object: got array (URL: https://api.example.com)"
        );
        assert!(error.is_decode());
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while requesting: https://api.example.com"
        );
        assert!(error.is_transport());
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("https://api.example.com", "Connection refused");
        assert!(matches!(error, AppError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: https://api.example.com - Connection refused"
        );
        assert!(error.is_transport());
    }

    #[test]
    fn test_invalid_header_helper() {
        let error = AppError::invalid_header("X Bad", "invalid HTTP header name");
        assert_eq!(
            error.to_string(),
            "Invalid header 'X Bad': invalid HTTP header name"
        );
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
        assert_eq!(error.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_kinds_are_disjoint() {
        let validation = AppError::empty_url("GET");
        let decode = AppError::response_not_object("got null", "u");
        let transport = AppError::network_timeout("u");

        assert!(validation.is_validation() && !validation.is_decode() && !validation.is_transport());
        assert!(decode.is_decode() && !decode.is_validation() && !decode.is_transport());
        assert!(transport.is_transport() && !transport.is_validation() && !transport.is_decode());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let error: AppError = toml_error.into();
        assert!(matches!(error, AppError::TomlDeserialize(_)));
    }
}
