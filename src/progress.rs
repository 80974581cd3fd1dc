use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::detector::ModuleCycle;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn finish_spinner(&mut self) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }

    pub fn start_loading(&mut self, manifest: &Path) {
        eprintln!("{} Reading module manifest...", style("📄").cyan());
        let spinner = self.create_spinner(&format!("Parsing {}...", manifest.display()));
        self.current_spinner = Some(spinner);
    }

    pub fn finish_loading(&mut self, modules: usize) {
        self.finish_spinner();
        eprintln!(
            "{} Loaded {} module{}",
            style("✓").green(),
            style(modules).yellow().bold(),
            if modules == 1 { "" } else { "s" }
        );
    }

    pub fn start_graph_building(&mut self) {
        let spinner = self.create_spinner("Building dependency graph...");
        self.current_spinner = Some(spinner);
    }

    pub fn finish_graph_building(&mut self, vertices: usize, scanned: usize, edges: usize) {
        self.finish_spinner();
        eprintln!(
            "{} Graph ready: {} modules ({} scanned), {} dependencies",
            style("✓").green(),
            style(vertices).yellow(),
            style(scanned).yellow(),
            style(edges).yellow()
        );
    }

    pub fn start_cycle_detection(&mut self) {
        eprintln!("\n{} Following import trails...", style("🔁").yellow());
        let spinner = self.create_spinner("Checking for back edges...");
        self.current_spinner = Some(spinner);
    }

    pub fn cycle_found(&self, cycle: &ModuleCycle) {
        if let Some(ref pb) = self.current_spinner {
            pb.set_message(format!("Tracing cycle at {}", cycle.start()));
        }
    }

    pub fn finish_cycle_detection(&mut self, cycles_found: usize) {
        self.finish_spinner();
        if cycles_found == 0 {
            eprintln!(
                "{} No circular dependencies detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} module{} on circular dependencies",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                if cycles_found == 1 { "" } else { "s" }
            );
        }
    }
}
