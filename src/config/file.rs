//! Optional TOML settings file
//!
//! ```toml
//! exclude = "node_modules"
//! include = "^/repo/src/"
//! allow_async_cycles = true
//! fail_on_error = true
//! cwd = "/repo"
//! max_cycles = 20
//! ```
//!
//! Command-line flags and `CYCLE_TRAIL_*` variables take precedence over
//! values from the file.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::error::{ConfigParseError, CycleTrailError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub exclude: Option<String>,
    pub include: Option<String>,
    #[serde(default)]
    pub allow_async_cycles: bool,
    #[serde(default)]
    pub fail_on_error: bool,
    pub cwd: Option<PathBuf>,
    pub max_cycles: Option<usize>,
}

impl FileConfig {
    pub fn parse_file(path: &Path) -> Result<Self, CycleTrailError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CycleTrailError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    pub fn parse_str(name: &str, content: &str) -> Result<Self, CycleTrailError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            CycleTrailError::ConfigParseError(Box::new(ConfigParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }
}
