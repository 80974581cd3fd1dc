//! Resource path formatting

use std::path::{Component, Path, PathBuf};

/// Express `target` relative to `base`, stepping up with `..` where needed
///
/// Paths of different kinds (one absolute, one relative) are returned
/// unchanged.
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    if base.is_absolute() != target.is_absolute() {
        return target.to_path_buf();
    }

    let base: Vec<Component<'_>> = base.components().collect();
    let target: Vec<Component<'_>> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

/// Resolve `path` against the process working directory, folding `.` and
/// `..` components lexically
///
/// Falls back to `path` itself when the working directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return path.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Format a module resource for display, relative to `cwd` when given
///
/// A relative `cwd` is taken from the process working directory.
pub fn display_resource(cwd: Option<&Path>, resource: &str) -> String {
    match cwd {
        Some(cwd) => relative_to(&absolutize(cwd), Path::new(resource))
            .display()
            .to_string(),
        None => resource.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_path() {
        assert_eq!(
            relative_to(Path::new("/repo"), Path::new("/repo/src/a.js")),
            PathBuf::from("src/a.js")
        );
    }

    #[test]
    fn test_sibling_path_steps_up() {
        assert_eq!(
            relative_to(Path::new("/repo/app"), Path::new("/repo/lib/b.js")),
            PathBuf::from("../lib/b.js")
        );
    }

    #[test]
    fn test_mixed_kinds_are_left_alone() {
        assert_eq!(
            relative_to(Path::new("/repo"), Path::new("webpack/runtime")),
            PathBuf::from("webpack/runtime")
        );
    }

    #[test]
    fn test_relative_cwd_resolves_against_working_directory() {
        let here = std::env::current_dir().unwrap();
        let resource = here.join("src").join("a.js");

        assert_eq!(
            display_resource(Some(Path::new(".")), resource.to_str().unwrap()),
            Path::new("src").join("a.js").display().to_string()
        );
        assert_eq!(
            display_resource(Some(Path::new("src")), resource.to_str().unwrap()),
            "a.js"
        );
    }

    #[test]
    fn test_absolutize_folds_dot_components() {
        assert_eq!(
            absolutize(Path::new("/repo/app/./../lib")),
            PathBuf::from("/repo/lib")
        );
        assert!(absolutize(Path::new("frontend")).is_absolute());
    }

    #[test]
    fn test_display_resource_without_cwd() {
        assert_eq!(display_resource(None, "/repo/a.js"), "/repo/a.js");
        assert_eq!(
            display_resource(Some(Path::new("/repo")), "/repo/__tests__/deps/a.js"),
            "__tests__/deps/a.js"
        );
    }
}
