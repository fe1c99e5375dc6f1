//! Network access to sibling repositories
//!
//! This module provides:
//! - The `RemoteSource` seam used by the locator and loader
//! - An HTTP implementation backed by reqwest

mod client;

pub use client::{HttpClient, DEFAULT_MAX_BODY_BYTES, DEFAULT_TIMEOUT};

use crate::error::NetworkError;
use async_trait::async_trait;
use url::Url;

/// Existence probe and document fetch against remote locations
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Returns whether the location answers with a success status
    ///
    /// A non-success answer is `Ok(false)`; only transport failures are errors.
    async fn exists(&self, url: &Url) -> Result<bool, NetworkError>;

    /// Fetches the raw bytes at the location
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, NetworkError>;
}
