//! Core type definitions
//!
//! This module contains the raw module/dependency snapshot handed over by a
//! bundler, with minimal logic - focusing on data representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a module within one build pass
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawModuleId", into = "String")]
pub struct ModuleId(String);

/// Bundlers emit numeric ids in production builds and path-like ids in
/// development builds
#[derive(Deserialize)]
#[serde(untagged)]
enum RawModuleId {
    Number(u64),
    Text(String),
}

impl From<RawModuleId> for ModuleId {
    fn from(raw: RawModuleId) -> Self {
        match raw {
            RawModuleId::Number(n) => Self(n.to_string()),
            RawModuleId::Text(s) => Self(s),
        }
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

impl ModuleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ModuleId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Origin of a dependency reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    #[default]
    Import,
    Require,
    DynamicImport,
    ReExport,
    /// `this` bound to the module's own exports
    ThisBinding,
    /// `module.exports` / `exports` referring back to the module itself
    ExportsBinding,
    Context,
}

impl DependencyKind {
    /// Compiler bookkeeping that points a module at itself; never a real import
    pub fn is_synthetic_self_reference(self) -> bool {
        matches!(self, DependencyKind::ThisBinding | DependencyKind::ExportsBinding)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Import => write!(f, "import"),
            DependencyKind::Require => write!(f, "require"),
            DependencyKind::DynamicImport => write!(f, "dynamic-import"),
            DependencyKind::ReExport => write!(f, "re-export"),
            DependencyKind::ThisBinding => write!(f, "this-binding"),
            DependencyKind::ExportsBinding => write!(f, "exports-binding"),
            DependencyKind::Context => write!(f, "context"),
        }
    }
}

/// Reference from one module to another, as recorded by the bundler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDependency {
    /// Target module, `None` when the bundler could not resolve the request
    #[serde(default)]
    pub module: Option<ModuleId>,
    #[serde(default)]
    pub kind: DependencyKind,
    /// Lazily loaded (async chunk) reference
    #[serde(default)]
    pub weak: bool,
}

impl RawDependency {
    pub fn to(module: impl Into<ModuleId>) -> Self {
        Self {
            module: Some(module.into()),
            kind: DependencyKind::Import,
            weak: false,
        }
    }

    pub fn unresolved() -> Self {
        Self {
            module: None,
            kind: DependencyKind::Import,
            weak: false,
        }
    }

    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn weak(mut self) -> Self {
        self.weak = true;
        self
    }
}

/// A module as recorded by the bundler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModule {
    pub id: ModuleId,
    /// Display resource (usually an absolute file path). Context and
    /// generated modules have none.
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

impl RawModule {
    pub fn new(id: impl Into<ModuleId>, resource: Option<&str>) -> Self {
        Self {
            id: id.into(),
            resource: resource.map(str::to_string),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: RawDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Shorthand for a plain import of each target, in order
    pub fn importing<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ModuleId>,
    {
        self.dependencies
            .extend(targets.into_iter().map(RawDependency::to));
        self
    }
}

/// Snapshot of every module seen in one build pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSet {
    pub modules: Vec<RawModule>,
}

impl ModuleSet {
    pub fn new(modules: Vec<RawModule>) -> Self {
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<RawModule> for ModuleSet {
    fn from_iter<T: IntoIterator<Item = RawModule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
