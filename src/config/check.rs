//! Inspect command configuration

use std::path::{Path, PathBuf};

use super::file::FileConfig;
use crate::cli::OutputFormat;
use crate::dependency_filter::DependencyFilter;
use crate::error::CycleTrailError;
use crate::utils::path::absolutize;

/// Configuration for the inspect command
///
/// This struct contains all options for detecting and reporting circular
/// module dependencies.
#[derive(Debug, Clone)]
pub struct CheckCyclesConfig {
    /// Module manifest to analyze
    pub manifest: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether detected cycles are errors (non-zero exit) rather than warnings
    pub fail_on_error: bool,
    /// Resources matching this pattern are not scanned
    pub exclude: Option<String>,
    /// Only resources matching this pattern are scanned
    pub include: Option<String>,
    /// Drop weak (async) references before detection
    pub allow_async_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
    /// Directory that reported resources are made relative to
    pub cwd: PathBuf,
}

impl CheckCyclesConfig {
    pub fn builder() -> CheckCyclesConfigBuilder {
        CheckCyclesConfigBuilder::new()
    }

    /// Compile the scan patterns
    pub fn dependency_filter(&self) -> Result<DependencyFilter, CycleTrailError> {
        DependencyFilter::from_patterns(
            self.exclude.as_deref(),
            self.include.as_deref(),
            self.allow_async_cycles,
        )
    }
}

#[derive(Default)]
pub struct CheckCyclesConfigBuilder {
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    fail_on_error: Option<bool>,
    exclude: Option<String>,
    include: Option<String>,
    allow_async_cycles: Option<bool>,
    max_cycles: Option<usize>,
    cwd: Option<PathBuf>,
}

impl CheckCyclesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with values from a settings file; later `with_*`
    /// calls override them
    pub fn with_file_defaults(mut self, file: FileConfig) -> Self {
        self.exclude = file.exclude;
        self.include = file.include;
        self.allow_async_cycles = Some(file.allow_async_cycles);
        self.fail_on_error = Some(file.fail_on_error);
        self.max_cycles = file.max_cycles;
        self.cwd = file.cwd;
        self
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// A flag can only switch this on; an unset flag keeps the file value
    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = Some(fail_on_error || self.fail_on_error.unwrap_or(false));
        self
    }

    pub fn with_exclude(mut self, exclude: Option<String>) -> Self {
        if exclude.is_some() {
            self.exclude = exclude;
        }
        self
    }

    pub fn with_include(mut self, include: Option<String>) -> Self {
        if include.is_some() {
            self.include = include;
        }
        self
    }

    /// A flag can only switch this on; an unset flag keeps the file value
    pub fn with_allow_async_cycles(mut self, allow_async_cycles: bool) -> Self {
        self.allow_async_cycles =
            Some(allow_async_cycles || self.allow_async_cycles.unwrap_or(false));
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        if max_cycles.is_some() {
            self.max_cycles = max_cycles;
        }
        self
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        if cwd.is_some() {
            self.cwd = cwd;
        }
        self
    }
}

impl crate::common::ConfigBuilder for CheckCyclesConfigBuilder {
    type Config = CheckCyclesConfig;

    fn build(self) -> Result<Self::Config, CycleTrailError> {
        Ok(CheckCyclesConfig {
            manifest: self
                .manifest
                .ok_or_else(|| CycleTrailError::ConfigurationError {
                    message: "Missing required field: manifest".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| CycleTrailError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            fail_on_error: self.fail_on_error.unwrap_or(false),
            exclude: self.exclude,
            include: self.include,
            allow_async_cycles: self.allow_async_cycles.unwrap_or(false),
            max_cycles: self.max_cycles,
            cwd: absolutize(self.cwd.as_deref().unwrap_or_else(|| Path::new("."))),
        })
    }
}
