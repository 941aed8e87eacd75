//! Exit code constants for the changie CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, refusing to overwrite)
//! - 2: No configuration file found
//! - 3: Configuration malformed or invalid
//! - 4: Read/write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or refusing a destructive action.
pub const USER_ERROR: i32 = 1;

/// No candidate configuration file was readable.
pub const CONFIG_NOT_FOUND: i32 = 2;

/// Configuration failed to parse, validate, or serialize.
pub const CONFIG_INVALID: i32 = 3;

/// A read or write capability failed.
pub const IO_FAILURE: i32 = 4;
