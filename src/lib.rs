//! Blocking HTTP GET/POST helper
//!
//! Issues one-shot requests with fixed timeouts, optional headers and form or
//! query parameters, and returns the status code together with the JSON object
//! body. Failures come back as [`AppError`] values and are logged where they
//! happen.
//!
//! # Examples
//!
//! ```rust,no_run
//! use http_helper::{HttpClientHelper, RequestParameters};
//!
//! let mut params = RequestParameters::new();
//! params.insert("user".to_string(), "matti".to_string());
//!
//! let helper = HttpClientHelper::new();
//! match helper.post("http://127.0.0.1:8080/login", Some(&params), None) {
//!     Ok(result) => println!("{} -> {:?}", result.code(), result.data()),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod http_client;
pub mod models;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, ErrorKind};
pub use http_client::{ClientSettings, HttpClientHelper, get, post};
pub use models::{RequestHeaders, RequestParameters, ResponseResult};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
