//! Config file bootstrap command.

use std::path::Path;

use anyhow::bail;
use cover_art_archive::config::{self, Config};

/// Write `config` to `path`, or to the default location when `path` is `None`.
///
/// An existing file is only replaced with `force`.
pub fn cmd_init_config(config: &Config, path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };

    if target.exists() && !force {
        bail!(
            "config file {} already exists (use --force to overwrite)",
            target.display()
        );
    }

    match path {
        Some(path) => config::save_to(config, path)?,
        None => config::save(config)?,
    }

    println!("Wrote {}", target.display());
    Ok(())
}
