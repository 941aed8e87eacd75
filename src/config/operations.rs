//! Config loading, saving, format resolution, and legacy migration.

use super::model::Config;
use crate::error::{ChangieError, Result};
use crate::fs::{CREATE_FILE_MODE, FileReader, FileWriter};
use regex::Regex;
use std::io;
use std::path::Path;

/// Environment variable that overrides the configuration path entirely.
pub const CONFIG_ENV_VAR: &str = "CHANGIE_CONFIG_PATH";

/// Candidate configuration paths, in the order they are tried.
pub const CONFIG_PATHS: [&str; 2] = [".changie.yaml", ".changie.yml"];

/// strftime pattern for the timestamp segment of migrated fragment formats:
/// four-digit year through seconds, a single hyphen between date and time.
pub const TIME_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Read the configuration path override from the environment.
///
/// Returns `None` when `CHANGIE_CONFIG_PATH` is unset or empty. The loader
/// itself takes the override as a parameter and never touches process state,
/// so this helper is only called at the CLI boundary.
pub fn env_config_path() -> Option<String> {
    std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|path| !path.is_empty())
}

impl Config {
    /// Load the configuration through `reader`.
    ///
    /// With an `override_path`, exactly that path is attempted and the
    /// reader's error is fatal; the default candidates are never tried as a
    /// fallback. Otherwise the paths in [`CONFIG_PATHS`] are tried in order
    /// and the first successful read wins; when every candidate fails, the
    /// last attempted read's error is the failure signal.
    ///
    /// # Errors
    ///
    /// * [`ChangieError::NotFound`] - no candidate path was readable
    /// * [`ChangieError::Io`] - a read failed for a reason other than absence,
    ///   or the override path could not be read
    /// * [`ChangieError::Parse`] - the document is not valid YAML
    /// * [`ChangieError::InvalidConfig`] - the document contains unusable values
    pub fn load(reader: &dyn FileReader, override_path: Option<&str>) -> Result<Self> {
        let raw = match override_path {
            Some(path) => reader.read_file(Path::new(path)).map_err(|err| {
                ChangieError::Io(format!(
                    "failed to read configuration file '{}': {}",
                    path, err
                ))
            })?,
            None => read_first_candidate(reader)?,
        };

        let mut config: Config =
            serde_yaml::from_slice(&raw).map_err(|err| ChangieError::Parse(err.to_string()))?;

        config.apply_legacy_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Save the configuration as YAML to the primary default path.
    ///
    /// Persistence always normalizes to `.changie.yaml`, even when the
    /// document was loaded from an override or a secondary candidate, so
    /// project configuration converges on one authoritative file over time.
    pub fn save(&self, writer: &dyn FileWriter) -> Result<()> {
        let raw = self.to_yaml()?;

        writer
            .write_file(Path::new(CONFIG_PATHS[0]), raw.as_bytes(), CREATE_FILE_MODE)
            .map_err(|err| {
                ChangieError::Io(format!(
                    "failed to write configuration file '{}': {}",
                    CONFIG_PATHS[0], err
                ))
            })
    }

    /// Serialize the configuration to its canonical YAML form.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| ChangieError::Serialize(err.to_string()))
    }

    /// Effective header format for a kind.
    ///
    /// Scans `kinds` in declaration order and returns the first non-empty
    /// `format` whose label matches, falling back to the document's global
    /// `kind_format`. Total: always returns a value.
    pub fn kind_header(&self, label: &str) -> &str {
        for kind in &self.kinds {
            if !kind.format.is_empty() && kind.label == label {
                return &kind.format;
            }
        }

        &self.kind_format
    }

    /// Effective change format for a kind, with the same fallback rule as
    /// [`Config::kind_header`].
    pub fn change_format_for_kind(&self, label: &str) -> &str {
        for kind in &self.kinds {
            if !kind.change_format.is_empty() && kind.label == label {
                return &kind.change_format;
            }
        }

        &self.change_format
    }

    /// Fill in fields that documents written by older releases do not have.
    ///
    /// Documents that predate `fragmentFileFormat` get a deterministic,
    /// collision-resistant default: a component placeholder when the project
    /// uses components, a kind placeholder when it uses kinds, and always a
    /// trailing timestamp segment. Idempotent: an already-populated field is
    /// left untouched.
    fn apply_legacy_defaults(&mut self) {
        if !self.fragment_file_format.is_empty() {
            return;
        }

        if !self.components.is_empty() {
            self.fragment_file_format.push_str("{{.Component}}-");
        }

        if !self.kinds.is_empty() {
            self.fragment_file_format.push_str("{{.Kind}}-");
        }

        self.fragment_file_format
            .push_str(&format!("{{{{.Time.Format \"{}\"}}}}", TIME_FORMAT));
    }

    /// Validate values that would otherwise only fail at release time.
    ///
    /// Checks that replacement patterns compile as regular expressions and
    /// that every custom field (global, per-kind, and the body constraint)
    /// can be turned into a prompt.
    pub fn validate(&self) -> Result<()> {
        for replacement in &self.replacements {
            Regex::new(&replacement.find).map_err(|err| {
                ChangieError::InvalidConfig(format!(
                    "replacement pattern '{}' is not a valid regular expression: {}",
                    replacement.find, err
                ))
            })?;
        }

        for custom in &self.custom_choices {
            custom.validate()?;
        }

        for kind in &self.kinds {
            for custom in &kind.additional_choices {
                custom.validate()?;
            }
        }

        if let (Some(min), Some(max)) = (self.body.min_length, self.body.max_length)
            && min > max
        {
            return Err(ChangieError::InvalidConfig(format!(
                "body minLength {} is greater than maxLength {}",
                min, max
            )));
        }

        Ok(())
    }
}

/// Try each default candidate path in order, returning the first success.
fn read_first_candidate(reader: &dyn FileReader) -> Result<Vec<u8>> {
    let mut last_err: Option<io::Error> = None;

    for path in CONFIG_PATHS {
        match reader.read_file(Path::new(path)) {
            Ok(raw) => return Ok(raw),
            // Remember only the most recent failure; if every candidate
            // fails, the last error is the one reported.
            Err(err) => last_err = Some(err),
        }
    }

    match last_err {
        Some(err) if err.kind() != io::ErrorKind::NotFound => {
            Err(ChangieError::Io(err.to_string()))
        }
        _ => Err(ChangieError::NotFound(CONFIG_PATHS.join(", "))),
    }
}
