//! Error types for the Cover Art Archive client.
//!
//! Library code returns [`CoverArtError`] via `thiserror`; the `caa` binary
//! wraps it in `anyhow` for convenient propagation. Nothing in the library
//! terminates the process: every failure comes back as a value.
//!
//! # Example
//!
//! ```ignore
//! use cover_art_archive::{CoverArtClient, CoverArtError, ImageSize, Mbid};
//!
//! match client.release_front(mbid, ImageSize::Large).await {
//!     Ok(image) => save(image),
//!     Err(e) if e.is_not_found() => println!("no front cover"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use reqwest::StatusCode;
use url::Url;

use crate::coverart::{EntityType, ImageSize, Selector};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, CoverArtError>;

/// Boxed error carried by [`CoverArtError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`crate::CoverArtClient`].
#[derive(Debug, thiserror::Error)]
pub enum CoverArtError {
    /// The HTTP exchange itself failed (connect, DNS, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: BoxError,
    },

    /// The service answered with something other than 200 OK
    #[error("HTTP {status} on {url}")]
    HttpStatus { status: StatusCode, url: Url },

    /// The entity type doesn't offer the requested size
    #[error("{entity} doesn't support image size {size}")]
    InvalidSize { entity: EntityType, size: ImageSize },

    /// The entity type doesn't offer the requested image at all
    #[error("{entity} doesn't provide a {selector} image")]
    UnsupportedSelector {
        entity: EntityType,
        selector: Selector,
    },

    /// Metadata body wasn't the expected JSON document
    #[error("Failed to decode metadata from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid MBID {input:?}: {source}")]
    InvalidMbid {
        input: String,
        #[source]
        source: uuid::Error,
    },

    #[error("Unknown image size: {0}")]
    InvalidImageSize(String),

    #[error("Unknown entity type: {0}")]
    InvalidEntityType(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl CoverArtError {
    /// Create a transport error for `url`.
    pub fn transport(url: Url, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url,
            source: source.into(),
        }
    }

    /// The HTTP status, if this is a status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The URL involved in the failed request, if any.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Transport { url, .. } | Self::HttpStatus { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }
}
