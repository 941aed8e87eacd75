//! Kind, body, newline, and replacement configuration types.

use crate::custom::{Custom, CustomType, Prompt};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One category of change (e.g. "Added", "Fixed") with optional formatting
/// overrides.
///
/// An override is "not set" when empty, in which case the document's global
/// format applies; an override can therefore never be the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KindConfig {
    /// Display label, also the lookup key for format resolution.
    pub label: String,

    /// Override for the kind header format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// Override for how individual changes of this kind render.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub change_format: String,

    /// Skip the project-wide custom prompts for changes of this kind.
    pub skip_global_choices: bool,

    /// Skip the body prompt for changes of this kind.
    pub skip_body: bool,

    /// Extra prompt fields specific to this kind.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_choices: Vec<Custom>,
}

impl fmt::Display for KindConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Length constraints for the body prompt. `None` means unconstrained,
/// not zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
}

impl BodyConfig {
    pub(crate) fn is_unconstrained(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none()
    }

    /// Adapt the body constraint into a string prompt labeled "Body".
    ///
    /// Length bounds pass through unchanged. A malformed constraint surfaces
    /// the delegate's error instead of collapsing to a zero-value prompt.
    pub fn create_prompt(&self) -> Result<Prompt> {
        Custom {
            label: "Body".to_string(),
            field_type: CustomType::String,
            min_length: self.min_length,
            max_length: self.max_length,
            ..Custom::default()
        }
        .create_prompt()
    }
}

/// A text replacement applied when a release is assembled.
///
/// `find` is a regular-expression pattern; execution lives with the release
/// engine, this crate only stores and validates the rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Replacement {
    pub path: String,
    pub find: String,
    pub replace: String,
}

/// Blank lines to emit at named insertion points in the generated document.
///
/// Every count defaults to zero, meaning no forced blank lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewlineConfig {
    pub before_version: u32,
    pub after_version: u32,
    pub before_component: u32,
    pub after_component: u32,
    pub before_header: u32,
    pub after_header: u32,
    pub before_footer: u32,
    pub after_footer: u32,
    pub before_header_file: u32,
    pub after_header_file: u32,
    pub before_footer_file: u32,
    pub after_footer_file: u32,
    pub before_kind_header: u32,
    pub after_kind_header: u32,
    pub before_changes: u32,
    pub after_changes: u32,
}

impl NewlineConfig {
    pub(crate) fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
