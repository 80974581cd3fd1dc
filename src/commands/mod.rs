//! Command implementations for the cycle-trail CLI
//!
//! - inspect: Follow the import trails looking for circles

pub mod check;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => check::execute_check_command(command),
    }
}
