//! Image download commands.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cover_art_archive::{CoverArtClient, CoverArtImage, EntityType, ImageSize, Mbid};
use tokio::runtime::Runtime;

/// Which image a fetch command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Front(EntityType),
    Back(EntityType),
    ReleaseImage(u64),
}

/// Download an image and write it to disk
pub fn cmd_fetch(
    rt: &Runtime,
    client: &CoverArtClient,
    target: FetchTarget,
    mbid: &Mbid,
    size: ImageSize,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let image = rt.block_on(async {
        match target {
            FetchTarget::Front(entity) => client.front(entity, mbid, size).await,
            FetchTarget::Back(entity) => client.back(entity, mbid, size).await,
            FetchTarget::ReleaseImage(id) => client.release_image(mbid, id, size).await,
        }
    })?;

    let path = output
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default_file_name(&image)));
    write_image(&image, &path)?;

    let mime = if image.mime_type.is_empty() {
        "unknown type"
    } else {
        image.mime_type.as_str()
    };
    println!("✓ Saved {} bytes ({}) to {:?}", image.data.len(), mime, path);
    Ok(())
}

fn write_image(image: &CoverArtImage, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, &image.data).with_context(|| format!("Failed to write {:?}", path))
}

/// File name the archive served the image under, or `cover.bin`
fn default_file_name(image: &CoverArtImage) -> String {
    image
        .url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "cover.bin".to_string())
}
