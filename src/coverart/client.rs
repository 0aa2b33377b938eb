//! Cover Art Archive HTTP client
//!
//! Fetches cover art metadata and images from the Cover Art Archive.
//! No API key required; every request carries the caller's User-Agent.
//!
//! API: https://coverartarchive.org

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use super::dto::CoverArtInfo;
use super::endpoint;
use super::mime;
use super::resource::{EntityType, ImageSize, Selector};
use super::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::error::{CoverArtError, Result};
use crate::mbid::Mbid;

/// Public archive address
pub const DEFAULT_BASE_URL: &str = "https://coverartarchive.org";

/// User agent used when the caller doesn't configure one
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Downloaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArtImage {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type from the file extension, empty if unrecognized
    pub mime_type: String,
    /// URL the bytes were served from, after redirects
    pub url: Url,
}

/// Cover Art Archive client
///
/// Holds no mutable state, so one client can be shared across tasks.
#[derive(Clone)]
pub struct CoverArtClient {
    user_agent: String,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl CoverArtClient {
    /// Create a client for the public archive.
    pub fn new(user_agent: impl Into<String>) -> Result<Self> {
        Self::builder(user_agent).build()
    }

    /// Start configuring a client.
    pub fn builder(user_agent: impl Into<String>) -> CoverArtClientBuilder {
        CoverArtClientBuilder {
            user_agent: user_agent.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            transport: None,
        }
    }

    /// Create a client from the `[client]` config section.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder(config.user_agent.clone()).base_url(&config.base_url);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET with this client's User-Agent.
    ///
    /// Any status code is returned as a response; only exchange failures
    /// are errors.
    pub async fn get(&self, url: &Url) -> Result<Box<dyn HttpResponse>> {
        tracing::debug!("GET {}", url);
        let response = self.transport.get(url, &self.user_agent).await?;
        tracing::debug!("{} -> {}", url, response.status());
        Ok(response)
    }

    /// Fetch and decode a metadata document.
    ///
    /// A non-200 status is reported as [`CoverArtError::HttpStatus`] before
    /// the body is looked at, so a missing release is a clean 404 rather
    /// than a decode error.
    pub async fn fetch_metadata(&self, url: &Url) -> Result<CoverArtInfo> {
        let response = self.get(url).await?;
        check_status(&*response, url)?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CoverArtError::Decode {
            url: url.clone(),
            source,
        })
    }

    /// Fetch one image.
    ///
    /// Requests the entity type can't serve fail before anything is sent.
    /// The MIME type comes from the extension of the final (redirected) URL.
    pub async fn fetch_image(
        &self,
        entity: EntityType,
        mbid: &Mbid,
        selector: Selector,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        entity.check_image_request(selector, size)?;

        let url = endpoint::image_url(&self.base_url, entity, mbid, selector, size);
        let response = self.get(&url).await?;
        check_status(&*response, &url)?;

        let final_url = response.url().clone();
        let data = response.bytes().await?;
        let mime_type = mime::from_url(&final_url).to_string();
        if mime_type.is_empty() {
            tracing::debug!("No known MIME type for {}", final_url);
        }

        Ok(CoverArtImage {
            data,
            mime_type,
            url: final_url,
        })
    }

    /// Metadata for any entity
    pub async fn info(&self, entity: EntityType, mbid: &Mbid) -> Result<CoverArtInfo> {
        let url = endpoint::metadata_url(&self.base_url, entity, mbid);
        self.fetch_metadata(&url).await
    }

    /// Front image of any entity
    pub async fn front(
        &self,
        entity: EntityType,
        mbid: &Mbid,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        self.fetch_image(entity, mbid, Selector::Front, size).await
    }

    /// Back image of any entity (releases only, in practice)
    pub async fn back(
        &self,
        entity: EntityType,
        mbid: &Mbid,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        self.fetch_image(entity, mbid, Selector::Back, size).await
    }

    /// Image by archive id of any entity (releases only, in practice)
    pub async fn image_by_id(
        &self,
        entity: EntityType,
        mbid: &Mbid,
        image_id: u64,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        self.fetch_image(entity, mbid, Selector::Id(image_id), size).await
    }

    /// Metadata for a release
    pub async fn release_info(&self, mbid: &Mbid) -> Result<CoverArtInfo> {
        self.info(EntityType::Release, mbid).await
    }

    /// Front image of a release
    pub async fn release_front(&self, mbid: &Mbid, size: ImageSize) -> Result<CoverArtImage> {
        self.front(EntityType::Release, mbid, size).await
    }

    /// Back image of a release
    pub async fn release_back(&self, mbid: &Mbid, size: ImageSize) -> Result<CoverArtImage> {
        self.back(EntityType::Release, mbid, size).await
    }

    /// A release image by its archive id
    pub async fn release_image(
        &self,
        mbid: &Mbid,
        image_id: u64,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        self.image_by_id(EntityType::Release, mbid, image_id, size)
            .await
    }

    /// Metadata for a release group
    pub async fn release_group_info(&self, mbid: &Mbid) -> Result<CoverArtInfo> {
        self.info(EntityType::ReleaseGroup, mbid).await
    }

    /// Front image of a release group; only [`ImageSize::Original`] is served
    pub async fn release_group_front(
        &self,
        mbid: &Mbid,
        size: ImageSize,
    ) -> Result<CoverArtImage> {
        self.front(EntityType::ReleaseGroup, mbid, size).await
    }
}

impl fmt::Debug for CoverArtClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverArtClient")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

fn check_status(response: &dyn HttpResponse, url: &Url) -> Result<()> {
    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(
            "HTTP {}: {} on {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            url
        );
        return Err(CoverArtError::HttpStatus {
            status,
            url: url.clone(),
        });
    }
    Ok(())
}

/// Builder for [`CoverArtClient`]
pub struct CoverArtClientBuilder {
    user_agent: String,
    base_url: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl CoverArtClientBuilder {
    /// Talk to a mirror or test server instead of the public archive.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whole-request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport; `timeout` is then ignored.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share an existing transport.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the base URL and build the client.
    pub fn build(self) -> Result<CoverArtClient> {
        let base_url = endpoint::parse_base(&self.base_url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        Ok(CoverArtClient {
            user_agent: self.user_agent,
            base_url,
            transport,
        })
    }
}
