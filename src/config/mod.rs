//! # Configuration Module
//!
//! This module provides the configuration for the `inspect` command. Values
//! come from three layers, highest precedence first:
//!
//! 1. command-line flags and their `CYCLE_TRAIL_*` environment variables
//! 2. an optional TOML settings file passed with `--config`
//! 3. built-in defaults (scan everything, cycles are warnings)
//!
//! ## Example
//!
//! ```
//! use cycle_trail::cli::OutputFormat;
//! use cycle_trail::common::ConfigBuilder;
//! use cycle_trail::config::{CheckCyclesConfig, FileConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = FileConfig::parse_str("cycle-trail.toml", "exclude = \"node_modules\"")?;
//!
//! let config = CheckCyclesConfig::builder()
//!     .with_file_defaults(file)
//!     .with_manifest("modules.json".into())
//!     .with_format(OutputFormat::Human)
//!     .with_fail_on_error(true)
//!     .build()?;
//!
//! assert_eq!(config.exclude.as_deref(), Some("node_modules"));
//! assert!(config.fail_on_error);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod file;

pub use check::CheckCyclesConfig;
pub use file::FileConfig;
