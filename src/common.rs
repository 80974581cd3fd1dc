//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Module filtering arguments
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Regex of module resources to skip when scanning for cycles
    #[arg(long, value_name = "REGEX", env = "CYCLE_TRAIL_EXCLUDE")]
    pub exclude: Option<String>,

    /// Regex of module resources to scan (scans everything by default)
    #[arg(long, value_name = "REGEX", env = "CYCLE_TRAIL_INCLUDE")]
    pub include: Option<String>,

    /// Ignore cycles that go through asynchronous (lazily loaded) imports
    #[arg(long, env = "CYCLE_TRAIL_ALLOW_ASYNC_CYCLES")]
    pub allow_async_cycles: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_TRAIL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "CYCLE_TRAIL_MAX_CYCLES")]
    pub max_cycles: Option<usize>,

    /// Directory that reported module paths are made relative to (defaults
    /// to the current directory)
    #[arg(long, value_name = "DIR", env = "CYCLE_TRAIL_CWD")]
    pub cwd: Option<PathBuf>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CycleTrailError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CycleTrailError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CycleTrailError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
