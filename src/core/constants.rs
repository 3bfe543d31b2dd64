//! Constants used throughout depvar.
//!
//! Centralizes magic strings and configuration values.

/// State file name used by the filesystem backend (.depvar.toml).
pub const STATE_FILE: &str = ".depvar.toml";

/// Default env file for `--load` and `--save` (.env).
pub const ENV_FILE: &str = ".env";

/// Environment variable overriding the state file path.
pub const STATE_ENV: &str = "DEPVAR_STATE";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DEPVAR_LOG";
