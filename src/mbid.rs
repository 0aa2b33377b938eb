//! MusicBrainz identifiers.
//!
//! Parsing is delegated to `uuid`; the archive only ever sees the canonical
//! lowercase hyphenated form.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{CoverArtError, Result};

/// A MusicBrainz identifier (release or release group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mbid(Uuid);

impl Mbid {
    /// Parse an MBID from any textual UUID form `uuid` accepts.
    pub fn parse(input: &str) -> Result<Self> {
        Uuid::parse_str(input.trim())
            .map(Self)
            .map_err(|source| CoverArtError::InvalidMbid {
                input: input.to_string(),
                source,
            })
    }
}

impl From<Uuid> for Mbid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for Mbid {
    type Err = CoverArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Mbid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let mbid = Mbid::parse("76df3287-6cda-33eb-8e9a-044b5e15ffdd").unwrap();
        assert_eq!(mbid.to_string(), "76df3287-6cda-33eb-8e9a-044b5e15ffdd");
    }

    #[test]
    fn test_parse_normalizes_case_and_braces() {
        let mbid: Mbid = "{76DF3287-6CDA-33EB-8E9A-044B5E15FFDD}".parse().unwrap();
        assert_eq!(mbid.to_string(), "76df3287-6cda-33eb-8e9a-044b5e15ffdd");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Mbid::parse("not-a-uuid").unwrap_err();
        assert!(matches!(err, CoverArtError::InvalidMbid { .. }));
        assert!(err.to_string().contains("not-a-uuid"));
    }
}
