//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, Severity};
use crate::detector::CycleDetector;
use crate::error::CycleTrailError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator {
    severity: Severity,
}

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GitHubReportGenerator {
    pub fn new(fail_on_error: bool) -> Self {
        Self {
            severity: Severity::from_fail_on_error(fail_on_error),
        }
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTrailError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "::notice title=Circular Dependencies::No circular dependencies detected! ✅"
            )?;
            return Ok(output);
        }

        let command = self.severity.as_str();
        writeln!(
            output,
            "::{command} title=Circular Dependencies::Found {} circular {}",
            detector.cycle_count(),
            pluralize("dependency", detector.cycle_count())
        )?;

        // One annotation per cycle, anchored at the module it starts from
        for cycle in detector.cycles() {
            writeln!(
                output,
                "::{command} file={},title=Circular Dependency::{}",
                escape_property(cycle.start()),
                escape_data(&cycle.trail())
            )?;
        }

        Ok(output)
    }
}

/// Escape a workflow command message
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::ModuleCycle;

    #[test]
    fn test_github_report_no_cycles() {
        let report = GitHubReportGenerator::default()
            .generate_report(&CycleDetector::new())
            .unwrap();

        assert!(report.starts_with("::notice"));
    }

    #[test]
    fn test_github_report_annotates_each_cycle() {
        let mut detector = CycleDetector::new();
        detector.add_cycle(ModuleCycle::new(vec![
            "e.js".to_string(),
            "f.js".to_string(),
            "e.js".to_string(),
        ]));

        let warning = GitHubReportGenerator::new(false)
            .generate_report(&detector)
            .unwrap();
        let lines: Vec<_> = warning.lines().collect();
        assert_eq!(
            lines,
            vec![
                "::warning title=Circular Dependencies::Found 1 circular dependency",
                "::warning file=e.js,title=Circular Dependency::e.js -> f.js -> e.js",
            ]
        );

        let error = GitHubReportGenerator::new(true)
            .generate_report(&detector)
            .unwrap();
        assert!(error.lines().all(|line| line.starts_with("::error")));
    }

    #[test]
    fn test_github_report_escapes_workflow_commands() {
        let mut detector = CycleDetector::new();
        detector.add_cycle(ModuleCycle::new(vec![
            "C:/app/a,b.js?x=100%".to_string(),
            "b.js".to_string(),
            "C:/app/a,b.js?x=100%".to_string(),
        ]));

        let report = GitHubReportGenerator::default()
            .generate_report(&detector)
            .unwrap();
        let annotation = report.lines().nth(1).unwrap();

        assert_eq!(
            annotation,
            "::warning file=C%3A/app/a%2Cb.js?x=100%25,title=Circular Dependency::\
             C:/app/a,b.js?x=100%25 -> b.js -> C:/app/a,b.js?x=100%25"
        );
    }

    #[test]
    fn test_escape_helpers() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }
}
