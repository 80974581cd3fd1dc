//! Module and dependency filtering

use regex::Regex;

use crate::core::RawDependency;
use crate::error::CycleTrailError;

/// Decides which modules are scanned as cycle roots and which references
/// count as edges
#[derive(Debug, Clone, Default)]
pub struct DependencyFilter {
    exclude: Option<Regex>,
    include: Option<Regex>,
    allow_async_cycles: bool,
}

impl DependencyFilter {
    /// Create a filter from already-compiled patterns
    ///
    /// A missing `exclude` matches nothing, a missing `include` matches
    /// everything.
    pub fn new(exclude: Option<Regex>, include: Option<Regex>, allow_async_cycles: bool) -> Self {
        Self {
            exclude,
            include,
            allow_async_cycles,
        }
    }

    /// Compile `exclude`/`include` pattern strings
    pub fn from_patterns(
        exclude: Option<&str>,
        include: Option<&str>,
        allow_async_cycles: bool,
    ) -> Result<Self, CycleTrailError> {
        Ok(Self::new(
            exclude.map(|p| compile("exclude", p)).transpose()?,
            include.map(|p| compile("include", p)).transpose()?,
            allow_async_cycles,
        ))
    }

    pub fn allow_async_cycles(&self) -> bool {
        self.allow_async_cycles
    }

    /// Check if a module with this resource should be scanned for cycles
    pub fn should_scan(&self, resource: &str) -> bool {
        if self.exclude.as_ref().is_some_and(|re| re.is_match(resource)) {
            return false;
        }
        self.include.as_ref().is_none_or(|re| re.is_match(resource))
    }

    /// Check if a reference contributes an edge, independent of what it
    /// resolves to
    pub fn should_follow(&self, dep: &RawDependency) -> bool {
        if dep.kind.is_synthetic_self_reference() {
            return false;
        }
        !(self.allow_async_cycles && dep.weak)
    }
}

fn compile(option: &'static str, pattern: &str) -> Result<Regex, CycleTrailError> {
    Regex::new(pattern).map_err(|source| CycleTrailError::InvalidPattern {
        option,
        pattern: pattern.to_string(),
        source,
    })
}
