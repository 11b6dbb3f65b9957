//! HTTP client creation and configuration utilities

use reqwest::redirect::{Attempt, Policy};
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

use crate::config::Config;
use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_FOLLOW_REDIRECTS, DEFAULT_SOCKET_TIMEOUT_MS, MAX_REDIRECTS,
};

/// Timeouts and redirect policy applied to every client built for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    /// Maximum time to establish the connection
    pub connect_timeout: Duration,
    /// Maximum wait for any single read, including the wait for the response head.
    /// The timer restarts whenever data arrives.
    pub socket_timeout: Duration,
    pub follow_redirects: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            socket_timeout: Duration::from_millis(DEFAULT_SOCKET_TIMEOUT_MS),
            follow_redirects: DEFAULT_FOLLOW_REDIRECTS,
        }
    }
}

impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            socket_timeout: Duration::from_millis(config.socket_timeout_ms),
            follow_redirects: config.follow_redirects,
        }
    }
}

/// Creates an HTTP client for a single request.
///
/// Idle connections are not kept, so dropping the client releases every
/// socket it opened.
///
/// # Arguments
/// * `settings` - Timeouts and redirect switch
/// * `method` - Method of the request the client will send; decides which redirects are followed
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured client or error
pub fn create_client(settings: &ClientSettings, method: &Method) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(settings.connect_timeout)
        .read_timeout(settings.socket_timeout)
        .redirect(redirect_policy(settings.follow_redirects, method))
        .pool_max_idle_per_host(0)
        .build()
}

/// Single-threaded runtime that drives one request to completion on the calling thread.
pub fn create_runtime() -> std::io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

/// Redirect policy for a request.
///
/// GET follows up to [`MAX_REDIRECTS`] hops. A POST is only redirected by
/// `303 See Other`, which turns it into a GET; any other 3xx answer to the
/// POST itself is returned to the caller.
pub fn redirect_policy(follow_redirects: bool, method: &Method) -> Policy {
    if !follow_redirects {
        return Policy::none();
    }
    if *method == Method::POST {
        Policy::custom(follow_post_redirect)
    } else {
        Policy::limited(MAX_REDIRECTS)
    }
}

fn follow_post_redirect(attempt: Attempt) -> reqwest::redirect::Action {
    let hops = attempt.previous().len();
    if hops > MAX_REDIRECTS {
        attempt.error("too many redirects")
    } else if hops > 1 || attempt.status() == StatusCode::SEE_OTHER {
        // past the first hop the request has already become a GET
        attempt.follow()
    } else {
        attempt.stop()
    }
}
