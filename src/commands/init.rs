//! Implementation of the `changie init` command.
//!
//! Scaffolds a starter `.changie.yaml` so a project can start collecting
//! change fragments: six keep-a-changelog kinds, markdown output, one
//! fragment per change under `.changes/unreleased/`.

use crate::cli::InitArgs;
use crate::config::{CONFIG_PATHS, Config, KindConfig};
use crate::error::{ChangieError, Result};
use crate::fs::OsFs;
use std::path::Path;

/// Kind labels written into the starter configuration.
const STARTER_KINDS: &[&str] = &[
    "Added",
    "Changed",
    "Deprecated",
    "Removed",
    "Fixed",
    "Security",
];

/// Execute the `changie init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    if !args.force
        && let Some(existing) = existing_config()
    {
        return Err(ChangieError::UserError(format!(
            "configuration file '{}' already exists; use --force to overwrite it",
            existing
        )));
    }

    starter_config().save(&OsFs)?;

    println!("Created {}", CONFIG_PATHS[0]);
    println!();
    println!("Next steps:");
    println!("  1. Adjust kinds and formats in {}", CONFIG_PATHS[0]);
    println!("  2. Collect change fragments under .changes/unreleased/");

    Ok(())
}

/// First candidate configuration file already present, if any.
fn existing_config() -> Option<&'static str> {
    CONFIG_PATHS.into_iter().find(|path| Path::new(path).exists())
}

/// The configuration written for new projects.
fn starter_config() -> Config {
    Config {
        changes_dir: ".changes".to_string(),
        unreleased_dir: "unreleased".to_string(),
        header_path: "header.tpl.md".to_string(),
        changelog_path: "CHANGELOG.md".to_string(),
        version_ext: "md".to_string(),
        version_format: "## {{.Version}} - {{.Time.Format \"%Y-%m-%d\"}}".to_string(),
        kind_format: "### {{.Kind}}".to_string(),
        change_format: "* {{.Body}}".to_string(),
        kinds: STARTER_KINDS
            .iter()
            .map(|label| KindConfig {
                label: (*label).to_string(),
                ..KindConfig::default()
            })
            .collect(),
        ..Config::default()
    }
}
