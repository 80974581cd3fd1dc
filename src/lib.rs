//! # Cycle Trail - Detect Circular Module Dependencies
//!
//! Cycle Trail finds circular import chains in a bundler's module graph. It
//! reads a JSON manifest of modules and their references, and reports every
//! scanned module that can reach itself again, together with the trail of
//! modules that closes the loop.
//!
//! ## Main Components
//!
//! - **Detector**: linear-time acyclicity check followed by per-module path
//!   tracing
//! - **Graph**: builds the module graph and the generic [`graph::DirectedGraph`]
//!   interface the detector runs on
//! - **Dependency filter**: exclude/include patterns and async-cycle handling
//! - **Reports**: human, JSON and GitHub Actions output
//!
//! ## Usage
//!
//! ```
//! use cycle_trail::core::ModuleSet;
//! use cycle_trail::dependency_filter::DependencyFilter;
//! use cycle_trail::detector::CycleDetector;
//! use cycle_trail::graph::ModuleGraphBuilder;
//! use cycle_trail::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let manifest = r#"{
//!   "modules": [
//!     { "id": "a", "resource": "src/a.js", "dependencies": [{ "module": "b" }] },
//!     { "id": "b", "resource": "src/b.js", "dependencies": [{ "module": "c" }] },
//!     { "id": "c", "resource": "src/c.js", "dependencies": [{ "module": "b" }] }
//!   ]
//! }"#;
//! let modules = ModuleSet::parse_str("modules.json", manifest.to_string())?;
//!
//! // Scan everything, report async cycles too
//! let filter = DependencyFilter::from_patterns(None, None, false)?;
//! let graph = ModuleGraphBuilder::new(filter).build(&modules)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph)?;
//!
//! let trails: Vec<_> = detector.cycles().iter().map(|c| c.trail()).collect();
//! assert_eq!(
//!     trails,
//!     ["src/b.js -> src/c.js -> src/b.js", "src/c.js -> src/b.js -> src/c.js"]
//! );
//!
//! let json = JsonReportGenerator::new(true).generate_report(&detector)?;
//! assert!(json.contains("\"severity\": \"error\""));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod dependency_filter;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod reports;

/// Install the diagnostic log subscriber
///
/// `CYCLE_TRAIL_LOG` takes a `tracing` filter directive and
/// `CYCLE_TRAIL_LOG_FORMAT=json` switches to JSON lines. Logs go to stderr so
/// reports on stdout stay machine-readable.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV, FORMAT_ENV};

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = std::env::var(FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
