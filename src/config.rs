//! Settings chosen at start-up.

use std::time::Duration;

use crate::toast::DEFAULT_TOAST_DURATION;

/// The default address of the transactions API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// The settings that shape how the app talks to the backend and the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The base URL of the transactions API, e.g. "http://127.0.0.1:5000".
    pub api_url: String,
    /// How long a toast stays on screen before it fades out.
    pub toast_duration: Duration,
    /// The timeout for each request to the API, `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            toast_duration: DEFAULT_TOAST_DURATION,
            request_timeout: None,
        }
    }
}
