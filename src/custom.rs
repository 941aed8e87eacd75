//! Custom prompt field descriptors.
//!
//! Custom fields describe the extra prompts a project attaches to change
//! fragments. This module carries the descriptors and turns them into plain
//! prompt data; interactive rendering lives with the frontend.

use crate::error::{ChangieError, Result};
use serde::{Deserialize, Serialize};

/// The input type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomType {
    /// Free-form text.
    #[default]
    String,
    /// Integer input.
    Int,
    /// One choice from a fixed set of options.
    Enum,
}

/// A single configurable prompt field.
///
/// Constructed through document deserialization; never created ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Custom {
    /// Display label, shown when prompting.
    pub label: String,

    /// Input type of the field.
    #[serde(rename = "type")]
    pub field_type: CustomType,

    /// Minimum accepted input length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Maximum accepted input length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Options for `enum` fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_options: Vec<String>,
}

/// A fully resolved prompt descriptor, ready for an interactive frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub label: String,
    pub field_type: CustomType,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub choices: Vec<String>,
}

impl Custom {
    /// Check that the field can be turned into a prompt.
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(ChangieError::InvalidConfig(
                "custom field is missing a label".to_string(),
            ));
        }

        if self.field_type == CustomType::Enum && self.enum_options.is_empty() {
            return Err(ChangieError::InvalidConfig(format!(
                "enum field '{}' has no options",
                self.label
            )));
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            return Err(ChangieError::InvalidConfig(format!(
                "field '{}' has minLength {} greater than maxLength {}",
                self.label, min, max
            )));
        }

        Ok(())
    }

    /// Build the prompt descriptor for this field.
    pub fn create_prompt(&self) -> Result<Prompt> {
        self.validate()?;

        Ok(Prompt {
            label: self.label.clone(),
            field_type: self.field_type,
            min_length: self.min_length,
            max_length: self.max_length,
            choices: self.enum_options.clone(),
        })
    }
}
