//! HTTP-based `CafeSource` backed by the Vibe Radar backend.
//!
//! The [`CafeSource`] trait is synchronous so that ranking code can stay
//! runtime-agnostic. [`HttpCafeSource`] bridges to async `reqwest` calls by
//! blocking on a Tokio runtime it owns.
//!
//! # Example
//!
//! ```no_run
//! use vibe_core::{CafeQuery, CafeSource};
//! use vibe_data::source::HttpCafeSource;
//!
//! let source = HttpCafeSource::new("http://localhost:8000")?;
//! let cafes = source.nearby(&CafeQuery::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use log::debug;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;
use vibe_core::{CafeQuery, CafeRecord, CafeSource, CafeSourceError};

use super::wire::decode_cafes;

/// Error type for [`HttpCafeSource`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The base URL could not be turned into a `/cafes` endpoint.
    #[error("invalid backend URL {base_url:?}")]
    InvalidBaseUrl {
        /// URL as configured.
        base_url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Default backend location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default user agent for backend requests.
pub const DEFAULT_USER_AGENT: &str = "vibe-radar/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpCafeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCafeSourceConfig {
    /// Base URL of the backend; `/cafes` is appended.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpCafeSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpCafeSourceConfig {
    /// Create a configuration for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Café source talking to the backend's `GET /cafes` endpoint.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the source blocks on its own current-thread
/// runtime. Inside a multi-threaded runtime it uses that runtime's handle with
/// [`tokio::task::block_in_place`]. Inside a `current_thread` runtime it falls
/// back to its own runtime, which blocks the caller's executor for the
/// duration of the request.
pub struct HttpCafeSource {
    client: Client,
    config: HttpCafeSourceConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpCafeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCafeSource")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpCafeSource {
    /// Create a source for `base_url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpCafeSourceConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpCafeSourceConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = cafes_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpCafeSourceConfig {
        &self.config
    }

    /// Build the request URL for `query`.
    ///
    /// The format is `{base_url}/cafes?lat=..&lng=..&radius_km=..&limit=..`,
    /// with `&address=..` appended when the query names an address.
    fn build_url(&self, query: &CafeQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("lat", &query.location.y.to_string())
                .append_pair("lng", &query.location.x.to_string())
                .append_pair("radius_km", &query.radius_km.to_string())
                .append_pair("limit", &query.limit.to_string());
            if let Some(address) = query.address.as_deref() {
                pairs.append_pair("address", address);
            }
        }
        url
    }

    async fn fetch_async(&self, url: Url) -> Result<Vec<CafeRecord>, CafeSourceError> {
        let url_text = url.to_string();
        debug!("requesting cafes from {url_text}");

        let body = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url_text))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url_text))?
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url_text))?;

        let records = decode_cafes(&body).map_err(|err| CafeSourceError::ParseError {
            message: err.to_string(),
        })?;
        debug!("received {} cafes from {url_text}", records.len());
        Ok(records)
    }

    /// Convert a reqwest error to a `CafeSourceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> CafeSourceError {
        if error.is_timeout() {
            return CafeSourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return CafeSourceError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        CafeSourceError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

fn cafes_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/cafes", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        source,
    })
}

impl CafeSource for HttpCafeSource {
    /// Fetch the cafés near `query`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, that runtime should
    /// be multi-threaded. See the type-level docs for the fallback.
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
        query.validate()?;

        let future = self.fetch_async(self.build_url(query));
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
