//! Application-wide constants and configuration values
//!
//! Timeouts mirror the defaults every request is built with unless the
//! config file, environment or command line says otherwise.

/// Time allowed to establish the TCP/TLS connection, in milliseconds
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

/// Time allowed to obtain a connection from a pool, in milliseconds.
///
/// Not configurable: every request opens its own connection on an unshared
/// client, so there is never a pooled connection to wait for.
pub const DEFAULT_CONNECTION_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Time allowed to read the response once connected, in milliseconds
pub const DEFAULT_SOCKET_TIMEOUT_MS: u64 = 10000;

/// Redirects are followed unless explicitly disabled
pub const DEFAULT_FOLLOW_REDIRECTS: bool = true;

/// Upper bound on redirect hops when redirects are followed
pub const MAX_REDIRECTS: usize = 10;

/// Content type attached to every POST request
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Charset used to decode response bodies that do not declare one
pub const DEFAULT_RESPONSE_CHARSET: &str = "utf-8";

/// Number of body characters included in debug and error logs
pub const LOG_BODY_PREVIEW_CHARS: usize = 200;

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "http_helper";

/// Default log file name
pub const LOG_FILE_NAME: &str = "http_helper.log";

/// Environment variables that override config file values
pub mod env_vars {
    pub const CONNECT_TIMEOUT_MS: &str = "HTTP_HELPER_CONNECT_TIMEOUT_MS";
    pub const SOCKET_TIMEOUT_MS: &str = "HTTP_HELPER_SOCKET_TIMEOUT_MS";
    pub const FOLLOW_REDIRECTS: &str = "HTTP_HELPER_FOLLOW_REDIRECTS";
    pub const LOG_FILE: &str = "HTTP_HELPER_LOG_FILE";
}
