use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid module manifest '{file}'")]
#[diagnostic(
    code(cycle_trail::manifest_parse_error),
    help("The manifest must be a JSON object with a `modules` array")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid JSON here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(cycle_trail::config_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleTrailError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_trail::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("Invalid {option} pattern '{pattern}'")]
    #[diagnostic(
        code(cycle_trail::pattern_error),
        help("Patterns use Rust regex syntax, e.g. `node_modules` or `\\.test\\.js$`")
    )]
    InvalidPattern {
        option: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Module '{id}' appears more than once in the module set")]
    #[diagnostic(
        code(cycle_trail::duplicate_module),
        help("Every module in the manifest needs a unique id")
    )]
    DuplicateModule { id: String },

    #[error("Vertex {vertex} is not part of the graph")]
    #[diagnostic(
        code(cycle_trail::unknown_vertex),
        help("The graph adapter handed out a vertex it cannot resolve - please report it")
    )]
    UnknownVertex { vertex: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_trail::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_trail::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_trail::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_trail::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
