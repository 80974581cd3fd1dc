use std::path::{Path, PathBuf};

use miette::{Report, Result, WrapErr};
use tracing::{debug, warn};

use super::cycle_paths::{Cycle, cycle_paths};
use crate::constants::output::TRAIL_SEPARATOR;
use crate::graph::DirectedGraph;
use crate::utils::path::display_resource;

/// Detector for finding circular module dependencies
///
/// Runs a linear-time acyclicity check first and only traces cycle paths
/// when a back edge exists. Each scanned vertex that lies on a cycle yields
/// exactly one [`ModuleCycle`] starting at it.
#[derive(Debug, Default)]
pub struct CycleDetector {
    cwd: Option<PathBuf>,
    cycles: Vec<ModuleCycle>,
    callback_failures: Vec<CallbackFailure>,
    acyclic: Option<bool>,
}

/// A detected cycle as a trail of display resources
///
/// The first resource is repeated at the end to close the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCycle {
    paths: Vec<String>,
}

impl ModuleCycle {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Resource the cycle was found from
    pub fn start(&self) -> &str {
        self.paths.first().map(String::as_str).unwrap_or_default()
    }

    /// Distinct modules on the cycle, without the closing repeat
    pub fn modules(&self) -> &[String] {
        match self.paths.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Arrow-separated trail, e.g. `a.js -> b.js -> a.js`
    pub fn trail(&self) -> String {
        self.paths.join(TRAIL_SEPARATOR)
    }
}

/// An `on_cycle` callback that returned an error
///
/// The scan carries on after a failing callback; failures are kept here.
#[derive(Debug)]
pub struct CallbackFailure {
    index: usize,
    error: Report,
}

impl CallbackFailure {
    /// Position of the cycle in [`CycleDetector::cycles`]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn error(&self) -> &Report {
        &self.error
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Report resources relative to `cwd`
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Detect cycles in the graph, replacing the results of any earlier pass
    pub fn detect_cycles<G: DirectedGraph>(&mut self, graph: &G) -> Result<()> {
        self.detect_cycles_with(graph, |_| Ok(()))
    }

    /// Detect cycles, calling `on_cycle` for each one as soon as it is found
    ///
    /// Cycles arrive in vertex-scan order. An error from `on_cycle` is
    /// recorded in [`callback_failures`](Self::callback_failures) and does not
    /// stop the scan. Errors from the graph itself abort detection.
    pub fn detect_cycles_with<G, F>(&mut self, graph: &G, mut on_cycle: F) -> Result<()>
    where
        G: DirectedGraph,
        F: FnMut(&ModuleCycle) -> Result<()>,
    {
        self.cycles.clear();
        self.callback_failures.clear();
        self.acyclic = None;

        let mut paths = cycle_paths(graph);
        for cycle in paths.by_ref() {
            let cycle = cycle.wrap_err("Failed to trace cycle path")?;
            let module_cycle = self.to_module_cycle(graph, &cycle);

            if let Err(error) = on_cycle(&module_cycle) {
                warn!(cycle = %module_cycle.trail(), "cycle callback failed: {error}");
                self.callback_failures.push(CallbackFailure {
                    index: self.cycles.len(),
                    error,
                });
            }
            self.cycles.push(module_cycle);
        }
        self.acyclic = paths.acyclic();

        debug!(
            vertices = graph.vertices().len(),
            acyclic = ?self.acyclic,
            cycles = self.cycles.len(),
            "cycle detection finished"
        );

        Ok(())
    }

    fn to_module_cycle<G: DirectedGraph>(&self, graph: &G, cycle: &Cycle<G::Vertex>) -> ModuleCycle {
        // Every vertex on a traced cycle has a resource
        let paths = cycle
            .vertices()
            .iter()
            .map(|&v| display_resource(self.cwd(), graph.resource(v).unwrap_or_default()))
            .collect();
        ModuleCycle::new(paths)
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[ModuleCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Whether the last pass ended at the acyclicity check
    pub fn was_acyclic(&self) -> bool {
        self.acyclic == Some(true)
    }

    pub fn callback_failures(&self) -> &[CallbackFailure] {
        &self.callback_failures
    }

    /// Record a cycle found outside [`detect_cycles`](Self::detect_cycles),
    /// e.g. by a host running its own traversal
    pub fn add_cycle(&mut self, cycle: ModuleCycle) {
        self.cycles.push(cycle);
    }
}
