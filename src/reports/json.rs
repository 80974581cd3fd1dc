//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, Severity};
use crate::detector::CycleDetector;
use crate::error::CycleTrailError;

pub struct JsonReportGenerator {
    severity: Severity,
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl JsonReportGenerator {
    pub fn new(fail_on_error: bool) -> Self {
        Self {
            severity: Severity::from_fail_on_error(fail_on_error),
        }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTrailError> {
        // Cycles keep scan order; it is part of the output contract
        let cycles: Vec<_> = detector
            .cycles()
            .iter()
            .map(|cycle| {
                json!({
                    "start": cycle.start(),
                    "paths": cycle.paths(),
                    "length": cycle.modules().len(),
                })
            })
            .collect();

        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "severity": self.severity,
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(CycleTrailError::Json)
    }
}
