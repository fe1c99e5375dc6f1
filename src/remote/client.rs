//! HTTP client for sibling probes and descriptor downloads
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - HEAD existence probes
//! - GET downloads of descriptor documents
//!
//! Requests are never retried; a timeout surfaces as `NetworkError::Timeout`.

use crate::error::NetworkError;
use crate::remote::RemoteSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Default timeout for HTTP requests (5 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest descriptor body accepted from a remote repository (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("snapdeps/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    max_body_bytes: usize,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with the given timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, NetworkError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| NetworkError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            timeout,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Set the largest body `get_bytes` accepts (builder pattern)
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform a HEAD request and return the status
    pub async fn head(&self, url: &Url) -> Result<StatusCode, NetworkError> {
        let response = self
            .client
            .head(url.as_str())
            .send()
            .await
            .map_err(|e| NetworkError::from_reqwest(url.as_str(), &e))?;
        Ok(response.status())
    }

    /// Perform a GET request and return the body
    ///
    /// Fails on a non-success status or a body over the size limit.
    pub async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, NetworkError> {
        let mut response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| NetworkError::from_reqwest(url.as_str(), &e))?;

        if !response.status().is_success() {
            return Err(NetworkError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let too_large = || NetworkError::BodyTooLarge {
            url: url.to_string(),
            limit: self.max_body_bytes,
        };
        if let Some(length) = response.content_length() {
            if length > self.max_body_bytes as u64 {
                return Err(too_large());
            }
        }

        // Content-Length is optional
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| NetworkError::from_reqwest(url.as_str(), &e))?
        {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait]
impl RemoteSource for HttpClient {
    async fn exists(&self, url: &Url) -> Result<bool, NetworkError> {
        Ok(self.head(url).await?.is_success())
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, NetworkError> {
        self.get_bytes(url).await
    }
}
