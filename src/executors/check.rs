//! Inspect command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::config::CheckCyclesConfig;
use crate::core::ModuleSet;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::{DirectedGraph, ModuleGraphBuilder};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use crate::utils::string::pluralize;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for circular module dependencies...\n",
            style("🔁").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        // Load modules
        if let Some(p) = progress.as_mut() {
            p.start_loading(&config.manifest);
        }

        let modules = ModuleSet::parse_file(&config.manifest)?;

        if let Some(p) = progress.as_mut() {
            p.finish_loading(modules.len());
        }

        if modules.is_empty() {
            eprintln!("{} No modules found to analyze", style("ℹ").blue());
            return Ok(());
        }

        // Build dependency graph
        let filter = config
            .dependency_filter()
            .wrap_err("Failed to compile scan patterns")?;

        let allow_async_cycles = filter.allow_async_cycles();

        if let Some(p) = progress.as_mut() {
            p.start_graph_building();
        }

        let graph = ModuleGraphBuilder::new(filter)
            .build(&modules)
            .wrap_err("Failed to build module dependency graph")?;

        if let Some(p) = progress.as_mut() {
            p.finish_graph_building(
                graph.node_count(),
                graph.vertices().len(),
                graph.edge_count(),
            );
        }

        eprintln!(
            "  {} Async cycles: {} ({} async {} followed)",
            style("→").dim(),
            if allow_async_cycles {
                style("allowed").green()
            } else {
                style("reported").red()
            },
            style(graph.weak_edge_count()).yellow(),
            pluralize("reference", graph.weak_edge_count())
        );

        // Detect cycles
        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new().with_cwd(&config.cwd);
        detector
            .detect_cycles_with(&graph, |cycle| {
                if let Some(p) = progress.as_ref() {
                    p.cycle_found(cycle);
                }
                info!(cycle = %cycle.trail(), "circular dependency detected");
                Ok(())
            })
            .wrap_err("Failed to detect module cycles")?;

        if let Some(p) = progress.as_mut() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        for failure in detector.callback_failures() {
            warn!(index = failure.index(), "cycle callback failed: {:?}", failure.error());
        }

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles, config.fail_on_error);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new(config.fail_on_error);
                generator.generate_report(&detector)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new(config.fail_on_error);
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Cycles are errors only when requested
        if config.fail_on_error && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
