//! What to ask the archive for: entity type, image selector and size.
//!
//! All three are closed enums, so an unknown size or entity can only enter
//! through the fallible conversions below.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoverArtError, Result};

/// Desired image size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    /// 250px thumbnail
    Small,
    /// 500px thumbnail
    Large,
    /// Full-size image as uploaded (default)
    #[default]
    Original,
}

impl ImageSize {
    /// Every size, smallest first
    pub const ALL: [ImageSize; 3] = [ImageSize::Small, ImageSize::Large, ImageSize::Original];

    /// Suffix appended to the selector in the resource path
    pub fn suffix(self) -> &'static str {
        match self {
            ImageSize::Small => "-250",
            ImageSize::Large => "-500",
            ImageSize::Original => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Large => "large",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy numeric sizes.
///
/// 250 and 500 are pixel aliases for `Small` and `Large`; 0, 1 and 2 are the
/// positional constants older callers passed around. Anything else is rejected.
impl TryFrom<u32> for ImageSize {
    type Error = CoverArtError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 | 250 => Ok(ImageSize::Small),
            1 | 500 => Ok(ImageSize::Large),
            2 => Ok(ImageSize::Original),
            other => Err(CoverArtError::InvalidImageSize(other.to_string())),
        }
    }
}

impl FromStr for ImageSize {
    type Err = CoverArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "250" => Ok(ImageSize::Small),
            "large" | "500" => Ok(ImageSize::Large),
            "original" | "full" => Ok(ImageSize::Original),
            _ => Err(CoverArtError::InvalidImageSize(s.to_string())),
        }
    }
}

/// Kind of MusicBrainz entity cover art is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Release,
    ReleaseGroup,
}

impl EntityType {
    /// Path segment used by the archive
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Release => "release",
            EntityType::ReleaseGroup => "release-group",
        }
    }

    /// Reject image requests the archive can't serve for this entity.
    ///
    /// Release groups only expose their front image, and only at the
    /// original size.
    pub fn check_image_request(self, selector: Selector, size: ImageSize) -> Result<()> {
        match self {
            EntityType::Release => Ok(()),
            EntityType::ReleaseGroup => {
                if selector != Selector::Front {
                    return Err(CoverArtError::UnsupportedSelector {
                        entity: self,
                        selector,
                    });
                }
                if size != ImageSize::Original {
                    return Err(CoverArtError::InvalidSize { entity: self, size });
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoverArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release" => Ok(EntityType::Release),
            "release-group" | "release_group" | "releasegroup" => Ok(EntityType::ReleaseGroup),
            _ => Err(CoverArtError::InvalidEntityType(s.to_string())),
        }
    }
}

/// Which image of an entity to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Front,
    Back,
    /// A specific image by its archive id
    Id(u64),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Front => f.write_str("front"),
            Selector::Back => f.write_str("back"),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_suffixes() {
        assert_eq!(ImageSize::Small.suffix(), "-250");
        assert_eq!(ImageSize::Large.suffix(), "-500");
        assert_eq!(ImageSize::Original.suffix(), "");
    }

    #[test]
    fn test_legacy_numeric_sizes() {
        assert_eq!(ImageSize::try_from(250).unwrap(), ImageSize::Small);
        assert_eq!(ImageSize::try_from(500).unwrap(), ImageSize::Large);
        assert_eq!(ImageSize::try_from(0).unwrap(), ImageSize::Small);
        assert_eq!(ImageSize::try_from(1).unwrap(), ImageSize::Large);
        assert_eq!(ImageSize::try_from(2).unwrap(), ImageSize::Original);
        assert_eq!(
            ImageSize::try_from(250).unwrap().suffix(),
            ImageSize::Small.suffix()
        );
        assert!(matches!(
            ImageSize::try_from(1200),
            Err(CoverArtError::InvalidImageSize(_))
        ));
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("small".parse::<ImageSize>().unwrap(), ImageSize::Small);
        assert_eq!("LARGE".parse::<ImageSize>().unwrap(), ImageSize::Large);
        assert_eq!("500".parse::<ImageSize>().unwrap(), ImageSize::Large);
        assert_eq!("original".parse::<ImageSize>().unwrap(), ImageSize::Original);
        assert!("huge".parse::<ImageSize>().is_err());
    }

    #[test]
    fn test_size_default_is_original() {
        assert_eq!(ImageSize::default(), ImageSize::Original);
    }

    #[test]
    fn test_entity_segments() {
        assert_eq!(EntityType::Release.as_str(), "release");
        assert_eq!(EntityType::ReleaseGroup.as_str(), "release-group");
        assert_eq!(
            "release-group".parse::<EntityType>().unwrap(),
            EntityType::ReleaseGroup
        );
        assert!("recording".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Front.to_string(), "front");
        assert_eq!(Selector::Back.to_string(), "back");
        assert_eq!(Selector::Id(7645498428).to_string(), "7645498428");
    }

    #[test]
    fn test_release_group_restrictions() {
        let rg = EntityType::ReleaseGroup;
        assert!(rg.check_image_request(Selector::Front, ImageSize::Original).is_ok());
        assert!(matches!(
            rg.check_image_request(Selector::Front, ImageSize::Small),
            Err(CoverArtError::InvalidSize { .. })
        ));
        assert!(matches!(
            rg.check_image_request(Selector::Back, ImageSize::Original),
            Err(CoverArtError::UnsupportedSelector { .. })
        ));

        for size in ImageSize::ALL {
            assert!(EntityType::Release
                .check_image_request(Selector::Back, size)
                .is_ok());
        }
    }
}
