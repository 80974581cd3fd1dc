use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FilterArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "cycle-trail",
    about = "🔁 Detect circular module dependencies in bundler dependency graphs",
    long_about = "cycle-trail reads the module graph a bundler recorded for one build and reports \
                  every module that sits on a circular import chain, together with the chain \
                  itself.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Follow the import trails looking for circles
    ///
    /// Loads a module manifest, builds the dependency graph and reports one
    /// cycle for every scanned module that lies on a circular dependency.
    #[command(
        long_about = "Detect circular dependencies in a module manifest. The graph is first \
                      checked for acyclicity in a single depth-first pass; only when a cycle \
                      exists does cycle-trail trace a path back to each affected module. Modules \
                      filtered out with --exclude/--include are not reported on their own but \
                      still appear inside the cycles of other modules."
    )]
    Inspect {
        /// Module manifest (JSON) written by the bundler
        #[arg(value_name = "MANIFEST", env = "CYCLE_TRAIL_MANIFEST")]
        manifest: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Treat detected cycles as errors and exit with a non-zero status
        #[arg(long, env = "CYCLE_TRAIL_FAIL_ON_ERROR")]
        fail_on_error: bool,

        /// TOML file with default settings for this command
        #[arg(long, value_name = "FILE", env = "CYCLE_TRAIL_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}
