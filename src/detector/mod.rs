//! # Cycle Detection Module
//!
//! This module implements the algorithms for detecting circular module
//! dependencies in a [`DirectedGraph`](crate::graph::DirectedGraph).
//!
//! ## Algorithm
//!
//! Detection runs in two phases:
//!
//! 1. **Acyclicity check**: a single depth-first traversal with three-colour
//!    marking. An edge to a vertex on the current DFS path is a back edge
//!    and proves a cycle. Most module graphs are acyclic, so most passes end
//!    here in O(V + E).
//! 2. **Path construction**: only when a back edge exists. For every scanned
//!    vertex an independent depth-first search looks for a path back to that
//!    vertex. The first path found is reported, so a cycle of length k is
//!    reported k times, once from each of its vertices.
//!
//! Both phases use an explicit work stack, so deep graphs cannot overflow
//! the call stack.
//!
//! ## Key Components
//!
//! - **CycleDetector**: Runs both phases and collects [`ModuleCycle`]s
//! - **cycle_paths**: Lazy iterator over the cycles of a graph
//! - **depth_first_iterator / is_acyclic**: The phase 1 traversal
//!
//! ## Example
//!
//! ```
//! use cycle_trail::detector::CycleDetector;
//! use cycle_trail::graph::AdjacencyGraph;
//!
//! # fn main() -> miette::Result<()> {
//! // a -> b -> c -> b
//! let graph = AdjacencyGraph::from_adjacency_list([
//!     ("a.js", vec!["b.js"]),
//!     ("b.js", vec!["c.js"]),
//!     ("c.js", vec!["b.js"]),
//! ]);
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph)?;
//!
//! assert_eq!(detector.cycle_count(), 2);
//! assert_eq!(detector.cycles()[0].trail(), "b.js -> c.js -> b.js");
//! # Ok(())
//! # }
//! ```

mod cycle_paths;
mod depth_first;
mod detector_impl;

pub use cycle_paths::{Cycle, CyclePaths, cycle_paths, find_cycle_through};
pub use depth_first::{depth_first_iterator, is_acyclic};
pub use detector_impl::*;
