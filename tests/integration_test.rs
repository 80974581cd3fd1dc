//! Integration tests for cycle-trail using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use cycle_trail::core::ModuleSet;
use cycle_trail::dependency_filter::DependencyFilter;
use cycle_trail::detector::CycleDetector;
use cycle_trail::graph::ModuleGraphBuilder;
use cycle_trail::reports::{GitHubReportGenerator, JsonReportGenerator, ReportGenerator};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Module definition: (id, file under `src/` or `None` for context modules,
/// dependencies as (target id, weak))
type ModuleDefinition<'a> = (&'a str, Option<&'a str>, Vec<(&'a str, bool)>);

/// Write a manifest whose resources live under the temp dir
fn write_manifest(root: &Path, modules: Vec<ModuleDefinition<'_>>) -> PathBuf {
    let modules: Vec<Value> = modules
        .into_iter()
        .map(|(id, file, deps)| {
            let resource = file.map(|f| root.join("src").join(f).display().to_string());
            let dependencies: Vec<Value> = deps
                .into_iter()
                .map(|(target, weak)| {
                    let kind = if weak { "dynamic-import" } else { "import" };
                    json!({ "module": target, "kind": kind, "weak": weak })
                })
                .collect();
            json!({ "id": id, "resource": resource, "dependencies": dependencies })
        })
        .collect();

    let path = root.join("modules.json");
    fs::write(&path, serde_json::to_string_pretty(&json!({ "modules": modules })).unwrap())
        .unwrap();
    path
}

fn strong(targets: &[&'static str]) -> Vec<(&'static str, bool)> {
    targets.iter().map(|&t| (t, false)).collect()
}

/// d -> e -> f -> g -> e
fn loop_of_three(root: &Path) -> PathBuf {
    write_manifest(
        root,
        vec![
            ("d", Some("d.js"), strong(&["e"])),
            ("e", Some("e.js"), strong(&["f"])),
            ("f", Some("f.js"), strong(&["g"])),
            ("g", Some("g.js"), strong(&["e"])),
        ],
    )
}

fn detect(root: &Path, manifest: &Path, filter: DependencyFilter) -> Vec<String> {
    let modules = ModuleSet::parse_file(manifest).unwrap();
    let graph = ModuleGraphBuilder::new(filter).build(&modules).unwrap();

    let mut detector = CycleDetector::new().with_cwd(root);
    detector.detect_cycles(&graph).unwrap();
    detector.cycles().iter().map(|c| c.trail()).collect()
}

fn filter(exclude: Option<&str>, include: Option<&str>) -> DependencyFilter {
    DependencyFilter::from_patterns(exclude, include, false).unwrap()
}

#[test]
fn test_detects_back_reference() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = write_manifest(
        root,
        vec![
            ("a", Some("a.js"), strong(&["b"])),
            ("b", Some("b.js"), strong(&["c"])),
            ("c", Some("c.js"), strong(&["b"])),
        ],
    );

    let trails = detect(root, &manifest, DependencyFilter::default());

    assert_eq!(
        trails,
        vec![
            "src/b.js -> src/c.js -> src/b.js",
            "src/c.js -> src/b.js -> src/c.js",
        ]
    );
}

#[test]
fn test_reports_each_module_on_a_loop() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = loop_of_three(root);

    let trails = detect(root, &manifest, DependencyFilter::default());

    assert_eq!(
        trails,
        vec![
            "src/e.js -> src/f.js -> src/g.js -> src/e.js",
            "src/f.js -> src/g.js -> src/e.js -> src/f.js",
            "src/g.js -> src/e.js -> src/f.js -> src/g.js",
        ]
    );
}

#[test]
fn test_excluded_module_is_still_a_hop() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = loop_of_three(root);

    let trails = detect(root, &manifest, filter(Some(r"f\.js$"), None));

    assert_eq!(
        trails,
        vec![
            "src/e.js -> src/f.js -> src/g.js -> src/e.js",
            "src/g.js -> src/e.js -> src/f.js -> src/g.js",
        ]
    );
}

#[test]
fn test_include_limits_scanned_modules() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = loop_of_three(root);

    let trails = detect(root, &manifest, filter(None, Some(r"f\.js$")));

    assert_eq!(trails, vec!["src/f.js -> src/g.js -> src/e.js -> src/f.js"]);
}

#[test]
fn test_excluding_whole_loop_reports_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = loop_of_three(root);

    let trails = detect(root, &manifest, filter(Some(r"[efg]\.js$"), None));

    assert!(trails.is_empty());
}

#[test]
fn test_context_module_breaks_the_trail() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = write_manifest(
        root,
        vec![
            ("h", Some("h.js"), strong(&["i"])),
            ("i", None, strong(&["a"])),
            ("a", Some("a.js"), strong(&["i"])),
        ],
    );

    let trails = detect(root, &manifest, DependencyFilter::default());

    assert!(trails.is_empty());
}

#[test]
fn test_async_cycles() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = write_manifest(
        root,
        vec![
            ("a", Some("a.js"), strong(&["b"])),
            ("b", Some("b.js"), vec![("a", true)]),
        ],
    );

    let reported = detect(root, &manifest, DependencyFilter::default());
    assert_eq!(
        reported,
        vec!["src/a.js -> src/b.js -> src/a.js", "src/b.js -> src/a.js -> src/b.js"]
    );

    let allowed = detect(
        root,
        &manifest,
        DependencyFilter::from_patterns(None, None, true).unwrap(),
    );
    assert!(allowed.is_empty());
}

#[test]
fn test_numeric_module_ids() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = root.join("modules.json");
    fs::write(
        &manifest,
        r#"{
  "modules": [
    { "id": 1, "resource": "one.js", "dependencies": [{ "module": 2 }] },
    { "id": 2, "resource": "two.js", "dependencies": [{ "module": 1 }, { "module": null }] }
  ]
}"#,
    )
    .unwrap();

    let trails = detect(root, &manifest, DependencyFilter::default());

    assert_eq!(trails, vec!["one.js -> two.js -> one.js", "two.js -> one.js -> two.js"]);
}

#[test]
fn test_invalid_manifest_is_a_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("modules.json");
    fs::write(&manifest, "{ \"modules\": [ { \"id\": } ] }").unwrap();

    let err = ModuleSet::parse_file(&manifest).unwrap_err();

    assert!(format!("{err:?}").contains("modules.json"));
}

#[test]
fn test_reports_from_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let manifest = loop_of_three(root);

    let modules = ModuleSet::parse_file(&manifest).unwrap();
    let graph = ModuleGraphBuilder::default().build(&modules).unwrap();
    let mut detector = CycleDetector::new().with_cwd(root);
    detector.detect_cycles(&graph).unwrap();

    let json: Value = serde_json::from_str(
        &JsonReportGenerator::new(true)
            .generate_report(&detector)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(json["cycle_count"], 3);
    assert_eq!(json["severity"], "error");
    assert_eq!(json["cycles"][1]["start"], "src/f.js");

    let github = GitHubReportGenerator::new(false)
        .generate_report(&detector)
        .unwrap();
    assert_eq!(github.lines().count(), 4);
    assert!(github.contains("::warning file=src/e.js,"));
}
