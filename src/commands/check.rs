//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{CheckCyclesConfig, FileConfig};
use crate::error::CycleTrailError;

impl FromCommand for CheckCyclesConfig {
    fn from_command(command: Commands) -> Result<Self, CycleTrailError> {
        match command {
            Commands::Inspect {
                manifest,
                filter,
                format,
                cycle_display,
                fail_on_error,
                config,
            } => {
                let file = match config {
                    Some(path) => FileConfig::parse_file(&path)?,
                    None => FileConfig::default(),
                };

                CheckCyclesConfig::builder()
                    .with_file_defaults(file)
                    .with_manifest(manifest)
                    .with_format(format.format)
                    .with_fail_on_error(fail_on_error)
                    .with_exclude(filter.exclude)
                    .with_include(filter.include)
                    .with_allow_async_cycles(filter.allow_async_cycles)
                    .with_max_cycles(cycle_display.max_cycles)
                    .with_cwd(cycle_display.cwd)
                    .build()
            }
        }
    }
}

crate::impl_try_from_command!(CheckCyclesConfig);

/// Execute the inspect command for detecting circular module dependencies
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckCyclesConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
