//! Command implementations for changie.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;

use crate::cli::Command;
use crate::config::{Config, env_config_path};
use crate::error::Result;
use crate::fs::OsFs;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Show => cmd_show(),
    }
}

/// Load the effective configuration and print it as YAML.
fn cmd_show() -> Result<()> {
    let override_path = env_config_path();
    let config = Config::load(&OsFs, override_path.as_deref())?;

    print!("{}", config.to_yaml()?);

    Ok(())
}
