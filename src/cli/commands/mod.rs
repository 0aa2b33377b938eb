//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `info`: print the cover art listing of a release or release group
//! - `fetch`: download front, back or numbered images
//! - `init`: write a starter config file

mod fetch;
mod info;
mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cover_art_archive::config::{self, Config};
use cover_art_archive::{CoverArtClient, EntityType, ImageSize, Mbid};
use tokio::runtime::Runtime;

pub use fetch::{FetchTarget, cmd_fetch};
pub use info::cmd_info;
pub use init::cmd_init_config;

/// Cover Art Archive CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// User-Agent to identify as (overrides the config file)
    #[arg(long, global = true, env = "CAA_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Archive base URL (overrides the config file)
    #[arg(long, global = true, env = "CAA_BASE_URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the cover art listing for a release or release group
    Info {
        /// Entity type: release or release-group
        entity: EntityType,
        /// MusicBrainz ID
        mbid: Mbid,
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },
    /// Download the front image
    Front {
        /// Entity type: release or release-group
        entity: EntityType,
        /// MusicBrainz ID
        mbid: Mbid,
        /// Image size: small (250), large (500) or original
        #[arg(short, long, default_value = "original")]
        size: ImageSize,
        /// Output file (default: file name served by the archive)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download the back image
    Back {
        /// Entity type: release or release-group
        entity: EntityType,
        /// MusicBrainz ID
        mbid: Mbid,
        /// Image size: small (250), large (500) or original
        #[arg(short, long, default_value = "original")]
        size: ImageSize,
        /// Output file (default: file name served by the archive)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download a release image by its archive id
    Image {
        /// Release MusicBrainz ID
        mbid: Mbid,
        /// Image id as listed by `info`
        id: u64,
        /// Image size: small (250), large (500) or original
        #[arg(short, long, default_value = "original")]
        size: ImageSize,
        /// Output file (default: file name served by the archive)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a config file with the current settings
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let (target, mbid, size, output) = match &cli.command {
        Commands::InitConfig { force } => {
            let config = apply_overrides(cli, Config::default());
            return cmd_init_config(&config, cli.config.as_deref(), *force);
        }
        Commands::Info { entity, mbid, json } => {
            let (rt, client) = connect(cli)?;
            return cmd_info(&rt, &client, *entity, mbid, *json);
        }
        Commands::Front {
            entity,
            mbid,
            size,
            output,
        } => (FetchTarget::Front(*entity), mbid, *size, output),
        Commands::Back {
            entity,
            mbid,
            size,
            output,
        } => (FetchTarget::Back(*entity), mbid, *size, output),
        Commands::Image {
            mbid,
            id,
            size,
            output,
        } => (FetchTarget::ReleaseImage(*id), mbid, *size, output),
    };

    let (rt, client) = connect(cli)?;
    cmd_fetch(&rt, &client, target, mbid, size, output.as_ref())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Runtime and client for commands that talk to the archive
fn connect(cli: &Cli) -> anyhow::Result<(Runtime, CoverArtClient)> {
    let config = resolve_config(cli)?;
    let client = CoverArtClient::from_config(&config.client)?;
    tracing::debug!("Using {:?}", client);
    Ok((Runtime::new()?, client))
}

/// Config file values with command-line overrides applied
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };
    Ok(apply_overrides(cli, config))
}

fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(user_agent) = &cli.user_agent {
        config.client.user_agent = user_agent.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.client.base_url = base_url.clone();
    }
    config
}
