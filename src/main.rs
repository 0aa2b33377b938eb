//! caa - command-line front end for the Cover Art Archive client.
//!
//! Prints cover art listings and downloads images for MusicBrainz releases
//! and release groups.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so downloads piped to stdout stay clean)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("cover_art_archive=info".parse()?))
        .init();

    cli::run_command(&args)
}
