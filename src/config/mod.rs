//! Configuration model for changie.
//!
//! This module defines the Config struct that represents `.changie.yaml`,
//! loads it through an injected reader (honoring the `CHANGIE_CONFIG_PATH`
//! override and migrating legacy documents), saves it back to the primary
//! default path, and resolves per-kind formatting overrides against global
//! defaults.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::{CONFIG_ENV_VAR, CONFIG_PATHS, TIME_FORMAT, env_config_path};
pub use types::{BodyConfig, KindConfig, NewlineConfig, Replacement};
