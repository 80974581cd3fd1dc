//! # Graph Construction Module
//!
//! This module turns a raw module snapshot into the graph abstraction that
//! cycle detection works on.
//!
//! ## Components
//!
//! - **DirectedGraph**: The seam between graph construction and detection: a
//!   scan-ordered vertex list, a successor function and a display resource
//!   per vertex
//! - **ModuleGraphBuilder**: Builds a [`ModuleGraph`] from a
//!   [`ModuleSet`](crate::core::ModuleSet), applying include/exclude patterns
//!   and dropping synthetic self-references
//! - **AdjacencyGraph**: A plain adjacency-list graph, handy for hosts that
//!   already have their own graph representation
//!
//! ## Example
//!
//! ```
//! use cycle_trail::core::{ModuleSet, RawModule};
//! use cycle_trail::dependency_filter::DependencyFilter;
//! use cycle_trail::graph::{DirectedGraph, ModuleGraphBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let modules: ModuleSet = vec![
//!     RawModule::new("a", Some("src/a.js")).importing(["b"]),
//!     RawModule::new("b", Some("src/b.js")).importing(["a"]),
//!     RawModule::new("vendor", Some("node_modules/lib.js")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let filter = DependencyFilter::from_patterns(Some("node_modules"), None, false)?;
//! let graph = ModuleGraphBuilder::new(filter).build(&modules)?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.vertices().len(), 2);
//! # Ok(())
//! # }
//! ```

mod builder;
mod directed;
mod types;

pub use builder::ModuleGraphBuilder;
pub use directed::{AdjacencyGraph, DirectedGraph};
pub use types::{DependencyEdge, ModuleGraph, ModuleNode};
