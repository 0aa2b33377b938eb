//! Cover Art Archive metadata documents
//!
//! The archive serves one JSON document per release or release group listing
//! every image it holds. Unknown fields are ignored and missing or `null`
//! fields fall back to their zero value.
//!
//! API Reference: https://musicbrainz.org/doc/Cover_Art_Archive/API

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::resource::ImageSize;

/// Cover art listing for a release or release group
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverArtInfo {
    /// Images in the order the archive lists them
    pub images: Vec<ImageInfo>,
    /// URL of the release on MusicBrainz
    pub release: String,
}

impl CoverArtInfo {
    /// The image flagged as the front cover, if any
    pub fn front(&self) -> Option<&ImageInfo> {
        self.images.iter().find(|image| image.front)
    }

    /// The image flagged as the back cover, if any
    pub fn back(&self) -> Option<&ImageInfo> {
        self.images.iter().find(|image| image.back)
    }
}

/// A single image entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageInfo {
    /// Whether the upload edit has been approved
    pub approved: bool,
    pub back: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
    /// MusicBrainz edit that added the image
    #[serde(deserialize_with = "null_as_default")]
    pub edit: u64,
    pub front: bool,
    /// Archive image id; newer documents send it as a number
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// URL of the full-size image
    pub image: String,
    /// Size label ("250", "500", "1200", "small", "large") to thumbnail URL
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnails: BTreeMap<String, String>,
    /// Image types (Front, Back, Booklet, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

impl ImageInfo {
    /// URL for `size`: the matching thumbnail, or the full image for
    /// [`ImageSize::Original`].
    ///
    /// Pixel labels win over the older "small"/"large" labels.
    pub fn url_for(&self, size: ImageSize) -> Option<&str> {
        let labels: &[&str] = match size {
            ImageSize::Small => &["250", "small"],
            ImageSize::Large => &["500", "large"],
            ImageSize::Original => {
                return (!self.image.is_empty()).then_some(self.image.as_str());
            }
        };
        labels
            .iter()
            .find_map(|label| self.thumbnails.get(*label))
            .map(String::as_str)
    }

    /// Numeric image id, usable with [`super::Selector::Id`]
    pub fn image_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
