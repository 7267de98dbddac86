//! HTTP client abstraction for outbound calls.
//!
//! The notification gateway is reached through the [`HttpClient`] trait so the sender can be
//! exercised against a mock in unit tests and against a real listener in integration tests.
//! The default implementation wraps reqwest.
//!
//! # Example Usage:
//! ```ignore
//! use glpiwatch_core::http::{HttpClient, DefaultHttpClient};
//!
//! let client: Box<dyn HttpClient> = Box::new(DefaultHttpClient::new(Duration::from_secs(5))?);
//! let resp = client.post_json("http://localhost:3030/api/v1/notificacao/mensagem", &body).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::Error;

/// Status and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A minimal trait for POSTing JSON.
///
/// Any response that arrives, whatever its status, is `Ok`; `Err` means the request never
/// completed (connect failure, timeout, unreadable body).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, Error>;
}

#[derive(Clone)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, Error> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
