//! Client connection options and the process-wide defaults.

use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, PoisonError, RwLock};
use std::time::Duration;

/// Host every client talks to unless told otherwise.
pub const DEFAULT_REQUEST_HOST: &str = "api.postmarkapp.com";

/// Request timeout in seconds used when none (or zero) is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static DEFAULT_OPTIONS: LazyLock<RwLock<ClientOptions>> =
    LazyLock::new(|| RwLock::new(ClientOptions::builtin()));

/// Connection options held by every client.
///
/// Each client owns its own copy. Changing a client's options only affects
/// requests issued afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Use `https` (default) or plain `http`.
    pub use_https: bool,
    /// Host (optionally with port) requests are sent to.
    pub request_host: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
}

impl ClientOptions {
    fn builtin() -> Self {
        Self {
            use_https: true,
            request_host: DEFAULT_REQUEST_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Shallow merge: every field set in `overrides` replaces the current one.
    pub fn merge(mut self, overrides: ClientOptionsOverrides) -> Self {
        if let Some(use_https) = overrides.use_https {
            self.use_https = use_https;
        }
        if let Some(request_host) = overrides.request_host {
            self.request_host = request_host;
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
        self
    }

    /// `scheme://request_host`, without a trailing slash.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}", self.request_host)
    }

    /// Effective per-request timeout. Zero falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        let secs = if self.timeout == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout
        };
        Duration::from_secs(secs)
    }
}

impl Default for ClientOptions {
    /// A snapshot of the current process-wide defaults.
    fn default() -> Self {
        default_options()
    }
}

/// Partial options applied over the defaults when a client is built.
///
/// Deserializable so applications can keep overrides in their own config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptionsOverrides {
    pub use_https: Option<bool>,
    pub request_host: Option<String>,
    pub timeout: Option<u64>,
}

impl ClientOptionsOverrides {
    /// No overrides: the client uses the process-wide defaults unchanged.
    ///
    /// # Examples
    /// ```
    /// use postmark_client::{ClientOptions, ClientOptionsOverrides};
    ///
    /// let options = ClientOptions::default().merge(
    ///     ClientOptionsOverrides::new()
    ///         .use_https(false)
    ///         .request_host("localhost:8080"),
    /// );
    /// assert_eq!(options.base_url(), "http://localhost:8080");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `https` (`true`) or plain `http`.
    pub fn use_https(mut self, value: bool) -> Self {
        self.use_https = Some(value);
        self
    }

    /// Host, optionally with a port, to send requests to.
    pub fn request_host(mut self, host: impl Into<String>) -> Self {
        self.request_host = Some(host.into());
        self
    }

    /// Timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }
}

impl From<ClientOptions> for ClientOptionsOverrides {
    fn from(options: ClientOptions) -> Self {
        Self {
            use_https: Some(options.use_https),
            request_host: Some(options.request_host),
            timeout: Some(options.timeout),
        }
    }
}

/// Read the process-wide defaults.
pub fn default_options() -> ClientOptions {
    DEFAULT_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide defaults.
///
/// Only clients constructed afterwards see the new values.
pub fn set_default_options(options: ClientOptions) {
    *DEFAULT_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = options;
}
