//! CLI argument parsing for changie.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Changie: automated changelog management for preparing releases.
///
/// Change fragments live as individual files under the changes directory;
/// the project-level `.changie.yaml` controls how they are named, grouped,
/// and rendered.
#[derive(Parser, Debug)]
#[command(name = "changie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for changie.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a starter `.changie.yaml` in the current directory.
    ///
    /// Writes a configuration with the keep-a-changelog kinds and markdown
    /// formats. Refuses to overwrite an existing configuration unless
    /// `--force` is given.
    Init(InitArgs),

    /// Print the resolved configuration.
    ///
    /// Loads `.changie.yaml` (or the `CHANGIE_CONFIG_PATH` override),
    /// applies legacy migration, and prints the effective document as YAML.
    Show,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
