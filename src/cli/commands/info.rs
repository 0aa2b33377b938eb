//! Cover art listing command.

use cover_art_archive::{CoverArtClient, CoverArtInfo, EntityType, Mbid};
use tokio::runtime::Runtime;

/// Print the cover art listing of an entity
pub fn cmd_info(
    rt: &Runtime,
    client: &CoverArtClient,
    entity: EntityType,
    mbid: &Mbid,
    json: bool,
) -> anyhow::Result<()> {
    let info = rt.block_on(client.info(entity, mbid))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render_info(&info));
    }
    Ok(())
}

/// Human-readable summary of a listing
fn render_info(info: &CoverArtInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("Release: {}\n", info.release));
    out.push_str(&format!("Images:  {}\n", info.images.len()));

    for image in &info.images {
        let types = if image.types.is_empty() {
            "-".to_string()
        } else {
            image.types.join(", ")
        };
        let approved = if image.approved { "" } else { " (pending)" };
        out.push_str(&format!("\n  [{}] {}{}\n", image.id, types, approved));
        if !image.comment.is_empty() {
            out.push_str(&format!("    comment: {}\n", image.comment));
        }
        out.push_str(&format!("    image:   {}\n", image.image));
        for (label, url) in &image.thumbnails {
            out.push_str(&format!("    {:<8} {}\n", format!("{}:", label), url));
        }
    }
    out
}
