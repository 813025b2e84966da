//! Shared HTTP client for the REST backend.

use std::time::Duration;

use reqwest::{ClientBuilder, Method, RequestBuilder};
use secrecy::ExposeSecret;

use crate::config::schema::{RestConfig, RetryConfig};
use crate::config::SecretString;
use crate::domain::{RafiqError, Result};

/// Thin wrapper around [`reqwest::Client`] carrying the backend base URL, the
/// API key and the retry policy.
///
/// Both REST adapters hold a clone; `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
    retry: RetryConfig,
}

impl RestClient {
    /// Builds a client from the `[rest]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &RestConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(10));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| RafiqError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            retry: config.retry.clone(),
        })
    }

    /// Joins a relative path onto the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request with the API key attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, self.url(path));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }
        request
    }

    /// Runs a request closure, retrying transient failures with exponential
    /// backoff.
    ///
    /// Permanent failures (credential rejections, conflicts, malformed
    /// responses) are returned immediately; repeating those requests cannot
    /// change the answer.
    pub(crate) async fn with_retry<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_retries = self.retry.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;
                    if attempt >= max_retries || !is_transient(&e) {
                        return Err(e);
                    }

                    let delay_ms = self.retry.initial_delay_ms
                        * (self.retry.backoff_multiplier.powf((attempt - 1) as f64) as u64);
                    let delay_ms = delay_ms.min(self.retry.max_delay_ms);

                    crate::log_retry_attempt!(attempt, max_retries, delay_ms, e);

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }
}

fn is_transient(error: &RafiqError) -> bool {
    match error {
        RafiqError::Identity(e) => e.is_transient(),
        RafiqError::Documents(e) => e.is_transient(),
        _ => false,
    }
}
