//! HTTP transport seam.
//!
//! [`Transport`] is the only place requests leave the process. Production
//! code uses [`ReqwestTransport`]; tests substitute the mocks below to count
//! requests and check what was sent without touching the network.
//!
//! A response body is only read through [`HttpResponse::bytes`]. Dropping a
//! response without reading it releases the underlying connection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::error::{CoverArtError, Result};

/// Issues GET requests on behalf of the client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` with `user_agent` as the `User-Agent` header.
    ///
    /// Only exchange failures are errors; any status code is a response.
    async fn get(&self, url: &Url, user_agent: &str) -> Result<Box<dyn HttpResponse>>;
}

/// A response whose body hasn't been read yet.
#[async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> StatusCode;

    /// Final URL after any redirects the transport followed
    fn url(&self) -> &Url;

    /// Read the whole body into memory.
    async fn bytes(self: Box<Self>) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport, optionally with a whole-request timeout.
    ///
    /// Redirects are followed with reqwest's default policy.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(CoverArtError::ClientBuild)?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured client.
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, user_agent: &str) -> Result<Box<dyn HttpResponse>> {
        let response = self
            .http_client
            .get(url.clone())
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| CoverArtError::transport(url.clone(), e))?;

        Ok(Box::new(ReqwestResponse { inner: response }))
    }
}

struct ReqwestResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> StatusCode {
        self.inner.status()
    }

    fn url(&self) -> &Url {
        self.inner.url()
    }

    async fn bytes(self: Box<Self>) -> Result<Vec<u8>> {
        let url = self.inner.url().clone();
        let body = self
            .inner
            .bytes()
            .await
            .map_err(|e| CoverArtError::transport(url, e))?;
        Ok(body.to_vec())
    }
}
