//! Module manifest loading
//!
//! A manifest is the JSON snapshot of a bundler's module graph:
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "id": "./src/a.js",
//!       "resource": "/repo/src/a.js",
//!       "dependencies": [{ "module": "./src/b.js", "kind": "import", "weak": false }]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};

use crate::core::ModuleSet;
use crate::error::{CycleTrailError, ManifestParseError};

impl ModuleSet {
    /// Read and parse a manifest file
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CycleTrailError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        // Keep the source span so the report points at the broken JSON
        Ok(Self::parse_str(&path.display().to_string(), content)?)
    }

    /// Parse manifest text; `name` labels the source in diagnostics
    pub fn parse_str(name: &str, content: String) -> Result<Self, CycleTrailError> {
        serde_json::from_str(&content).map_err(|e| {
            let span = error_offset(&content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));

            CycleTrailError::ManifestParseError(Box::new(ManifestParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.clone()),
                span,
                source: e,
            }))
        })
    }
}

/// Byte offset of a 1-based line/column position reported by serde_json
fn error_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    (offset < content.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::core::{DependencyKind, ModuleId, RawDependency, RawModule};

    #[test]
    fn test_parse_manifest() {
        let content = r#"{
            "modules": [
                {
                    "id": 0,
                    "resource": "/repo/src/index.js",
                    "dependencies": [
                        { "module": 1 },
                        { "module": 1, "kind": "dynamic-import", "weak": true },
                        { "module": null }
                    ]
                },
                { "id": 1, "resource": "/repo/src/lazy.js" },
                { "id": "context", "resource": null }
            ]
        }"#;

        let set = ModuleSet::parse_str("stats.json", content.to_string()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.modules[0],
            RawModule::new(0u64, Some("/repo/src/index.js"))
                .with_dependency(RawDependency::to(1u64))
                .with_dependency(
                    RawDependency::to(1u64)
                        .with_kind(DependencyKind::DynamicImport)
                        .weak()
                )
                .with_dependency(RawDependency::unresolved())
        );
        assert_eq!(set.modules[2].id, ModuleId::from("context"));
        assert_eq!(set.modules[2].resource, None);
    }

    #[test]
    fn test_parse_error_points_at_problem() {
        let content = "{\n  \"modules\": [\n    { \"id\": \"a\", \"kind\": }\n  ]\n}";

        let err = ModuleSet::parse_str("broken.json", content.to_string()).unwrap_err();

        match err {
            CycleTrailError::ManifestParseError(parse_err) => {
                assert_eq!(parse_err.file, "broken.json");
                let span = parse_err.span.expect("span should be present");
                assert!(span.offset() > content.find("kind").unwrap());
            }
            other => panic!("Expected ManifestParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_dependency_kind_is_rejected() {
        let content = r#"{ "modules": [{ "id": "a", "dependencies": [{ "module": "b", "kind": "teleport" }] }] }"#;
        assert!(ModuleSet::parse_str("kinds.json", content.to_string()).is_err());
    }

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("modules.json");
        fs::write(
            &path,
            r#"{ "modules": [{ "id": "a", "resource": "a.js", "dependencies": [{ "module": "a" }] }] }"#,
        )
        .unwrap();

        let set = ModuleSet::parse_file(&path).unwrap();
        assert_eq!(set.modules[0].dependencies.len(), 1);
    }

    #[test]
    fn test_parse_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = ModuleSet::parse_file(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_error_offset() {
        assert_eq!(error_offset("ab\ncd", 2, 2), Some(4));
        assert_eq!(error_offset("ab\ncd", 0, 1), None);
        assert_eq!(error_offset("ab", 1, 9), None);
    }
}
