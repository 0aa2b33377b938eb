//! Cover Art Archive integration
//!
//! Fetches cover art metadata and images from coverartarchive.org using
//! MusicBrainz release and release group IDs. No API key required.

pub mod dto;
pub mod endpoint;
pub mod mime;
pub mod transport;
mod client;
mod resource;

pub use client::{
    CoverArtClient, CoverArtClientBuilder, CoverArtImage, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use dto::{CoverArtInfo, ImageInfo};
pub use resource::{EntityType, ImageSize, Selector};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
