//! Config struct definition.

use super::types::{BodyConfig, KindConfig, NewlineConfig, Replacement};
use crate::custom::Custom;
use serde::{Deserialize, Serialize};

/// Configuration for a changie project.
///
/// This struct represents the contents of `.changie.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility, and every field has a
/// zero-value default so documents written by older releases keep loading.
///
/// A loaded config is treated as immutable: nothing mutates it in place
/// after [`Config::load`](Config::load) returns, so sharing it across
/// threads needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    // =========================================================================
    // Paths
    // =========================================================================
    /// Directory holding all changelog data, relative to the project root.
    pub changes_dir: String,

    /// Directory under `changes_dir` holding unreleased fragments.
    pub unreleased_dir: String,

    /// Header file copied to the top of the generated changelog.
    pub header_path: String,

    /// Per-version header file.
    pub version_header_path: String,

    /// Per-version footer file.
    pub version_footer_path: String,

    /// Path of the generated changelog.
    pub changelog_path: String,

    /// File extension for generated version files.
    pub version_ext: String,

    // =========================================================================
    // Format templates (opaque to this crate, consumed by the renderer)
    // =========================================================================
    /// Template for naming new fragment files.
    ///
    /// Synthesized by legacy migration when absent; never empty after a
    /// successful load.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fragment_file_format: String,

    /// Template for a released version's title line.
    pub version_format: String,

    /// Template for a component section header.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub component_format: String,

    /// Template for a kind section header, unless a kind overrides it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind_format: String,

    /// Template for a single change line, unless a kind overrides it.
    pub change_format: String,

    /// Template for the changelog header block.
    pub header_format: String,

    /// Template for the changelog footer block.
    pub footer_format: String,

    // =========================================================================
    // Prompts and grouping
    // =========================================================================
    /// Length constraints for the body prompt.
    #[serde(skip_serializing_if = "BodyConfig::is_unconstrained")]
    pub body: BodyConfig,

    /// Component labels, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,

    /// Change kinds, in display order. Labels may repeat; lookups take the
    /// first match in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<KindConfig>,

    /// Project-wide custom prompt fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_choices: Vec<Custom>,

    /// Text replacement rules applied by the release engine.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<Replacement>,

    /// Blank-line policy for the generated document.
    #[serde(skip_serializing_if = "NewlineConfig::is_zero")]
    pub newlines: NewlineConfig,
}
