//! Client for the Cover Art Archive (https://coverartarchive.org).
//!
//! Given a MusicBrainz release or release group ID, fetch the JSON listing of
//! its cover art, or the image bytes themselves in one of a few sizes.
//!
//! # Usage
//!
//! ```ignore
//! use cover_art_archive::{CoverArtClient, ImageSize, Mbid};
//!
//! let client = CoverArtClient::new("my-tagger/1.0 (me@example.com)")?;
//! let mbid = Mbid::parse("76df3287-6cda-33eb-8e9a-044b5e15ffdd")?;
//!
//! let info = client.release_info(&mbid).await?;
//! println!("{} images", info.images.len());
//!
//! let front = client.release_front(&mbid, ImageSize::Large).await?;
//! println!("{} bytes of {}", front.data.len(), front.mime_type);
//! ```

pub mod config;
pub mod coverart;
pub mod error;
pub mod mbid;

pub use coverart::{
    CoverArtClient, CoverArtClientBuilder, CoverArtImage, CoverArtInfo, EntityType, ImageInfo,
    ImageSize, Selector,
};
pub use error::{CoverArtError, Result};
pub use mbid::Mbid;
