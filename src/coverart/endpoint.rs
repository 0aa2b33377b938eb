//! Resource URL construction for the archive endpoints.
//!
//! Paths look like `/{release|release-group}/{mbid}` for metadata and
//! `/{release|release-group}/{mbid}/{front|back|<id>}[-250|-500]` for images.

use url::Url;

use super::resource::{EntityType, ImageSize, Selector};
use crate::error::{CoverArtError, Result};
use crate::mbid::Mbid;

/// Parse and normalize a base address.
///
/// Query and fragment are dropped. Addresses that can't carry a path
/// (`mailto:` and friends) are rejected.
pub fn parse_base(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(CoverArtError::InvalidBaseUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Append `segments` to the path of `base`, one `/` between each.
///
/// Segments are percent-encoded where URL syntax needs it, so a segment can
/// never introduce an extra path level.
pub fn build_url(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // parse_base guarantees a hierarchical URL
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Selector with the size suffix glued on, e.g. `front-250`
pub fn image_segment(selector: Selector, size: ImageSize) -> String {
    format!("{}{}", selector, size.suffix())
}

/// URL of the metadata document for an entity
pub fn metadata_url(base: &Url, entity: EntityType, mbid: &Mbid) -> Url {
    let id = mbid.to_string();
    build_url(base, &[entity.as_str(), &id])
}

/// URL of one image of an entity
pub fn image_url(
    base: &Url,
    entity: EntityType,
    mbid: &Mbid,
    selector: Selector,
    size: ImageSize,
) -> Url {
    let id = mbid.to_string();
    let image = image_segment(selector, size);
    build_url(base, &[entity.as_str(), &id, &image])
}
