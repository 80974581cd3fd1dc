//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;

use serde::Serialize;

use crate::detector::CycleDetector;
use crate::error::CycleTrailError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTrailError>;
}

/// How detected cycles are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn from_fail_on_error(fail_on_error: bool) -> Self {
        if fail_on_error {
            Self::Error
        } else {
            Self::Warning
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
