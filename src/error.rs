//! Error types for the changie CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for changie operations.
///
/// Errors from the load/save boundary are returned to the caller unmodified:
/// no retries, no silent recovery, no default substitution. The only
/// default-filling the loader performs is the legacy fragment-format
/// migration, which is not an error path.
#[derive(Error, Debug)]
pub enum ChangieError {
    /// No candidate configuration file could be read.
    #[error("no configuration file found (tried {0})")]
    NotFound(String),

    /// A read or write capability failed for a reason other than absence.
    #[error("{0}")]
    Io(String),

    /// The configuration document is not valid YAML.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The in-memory document could not be serialized.
    ///
    /// A well-formed document always serializes, so hitting this indicates a
    /// programming error rather than a user-facing condition.
    #[error("failed to serialize configuration: {0}")]
    Serialize(String),

    /// The document parsed but contains values that cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// User provided invalid arguments or asked for a destructive action.
    #[error("{0}")]
    UserError(String),
}

impl ChangieError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChangieError::UserError(_) => exit_codes::USER_ERROR,
            ChangieError::NotFound(_) => exit_codes::CONFIG_NOT_FOUND,
            ChangieError::Parse(_)
            | ChangieError::Serialize(_)
            | ChangieError::InvalidConfig(_) => exit_codes::CONFIG_INVALID,
            ChangieError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for changie operations.
pub type Result<T> = std::result::Result<T, ChangieError>;
