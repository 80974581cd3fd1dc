//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, Severity};
use crate::detector::CycleDetector;
use crate::error::CycleTrailError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    severity: Severity,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>, fail_on_error: bool) -> Self {
        Self {
            max_cycles,
            severity: Severity::from_fail_on_error(fail_on_error),
        }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTrailError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            write!(
                output,
                "\n{} No circular dependencies detected! Every import trail ends somewhere.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        let total_cycles = detector.cycle_count();
        let marker = match self.severity {
            Severity::Error => style("❌").red().bold(),
            Severity::Warning => style("⚠️").yellow().bold(),
        };

        write!(
            output,
            "\n{} Found {} circular {}:\n\n",
            marker,
            style(total_cycles).red().bold(),
            pluralize("dependency", total_cycles)
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);

        for (i, cycle) in detector.cycles().iter().take(limit).enumerate() {
            writeln!(
                output,
                "{} Circular dependency #{} ({}):",
                style("🔄").yellow(),
                i + 1,
                self.severity.as_str()
            )?;

            let (last, rest) = match cycle.paths().split_last() {
                Some(split) => split,
                None => continue,
            };
            for path in rest {
                writeln!(output, "    {} {}", style("→").dim(), style(path).bold())?;
            }
            writeln!(output, "    {} {}", style("↩").dim(), style(last).dim())?;
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break a cycle, remove or defer one import along its trail.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Dynamic imports are weak references; pass --allow-async-cycles to ignore them.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
