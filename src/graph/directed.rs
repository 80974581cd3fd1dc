//! The graph abstraction consumed by cycle detection

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::CycleTrailError;

/// A finite directed graph: an ordered vertex list plus a successor function
///
/// `vertices` lists the vertices that detection scans as roots, in scan
/// order. `successors` may return vertices outside that list; they are still
/// traversed. Both must stay stable for as long as the graph is borrowed.
pub trait DirectedGraph {
    type Vertex: Copy + Eq + Hash + Debug;

    fn vertices(&self) -> &[Self::Vertex];

    /// Heads of the edges leaving `vertex`, in edge order
    ///
    /// Fails for a vertex the graph does not know about.
    fn successors(&self, vertex: Self::Vertex) -> Result<&[Self::Vertex], CycleTrailError>;

    /// Display resource of a vertex; vertices without one are never reported
    fn resource(&self, vertex: Self::Vertex) -> Option<&str>;
}

/// A graph given directly as an adjacency list
///
/// ```
/// use cycle_trail::graph::{AdjacencyGraph, DirectedGraph};
///
/// // x <- y <- z
/// let graph = AdjacencyGraph::from_adjacency_list([("x", vec![]), ("y", vec!["x"]), ("z", vec!["y"])]);
///
/// assert_eq!(graph.vertices(), &["x", "y", "z"]);
/// assert_eq!(graph.successors("z").unwrap(), &["y"]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    vertices: Vec<V>,
    arrows: HashMap<V, Vec<V>>,
}

impl<V> AdjacencyGraph<V>
where
    V: Copy + Eq + Hash,
{
    /// Vertices are taken in list order; a vertex listed twice keeps its last
    /// adjacency
    pub fn from_adjacency_list<I>(list: I) -> Self
    where
        I: IntoIterator<Item = (V, Vec<V>)>,
    {
        let mut vertices = Vec::new();
        let mut arrows = HashMap::new();
        for (vertex, adjacent) in list {
            if arrows.insert(vertex, adjacent).is_none() {
                vertices.push(vertex);
            }
        }
        Self { vertices, arrows }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V> DirectedGraph for AdjacencyGraph<V>
where
    V: Copy + Eq + Hash + Debug + AsRef<str>,
{
    type Vertex = V;

    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn successors(&self, vertex: V) -> Result<&[V], CycleTrailError> {
        self.arrows
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| CycleTrailError::UnknownVertex {
                vertex: format!("{vertex:?}"),
            })
    }

    fn resource(&self, vertex: V) -> Option<&str> {
        self.arrows
            .get_key_value(&vertex)
            .map(|(stored, _)| stored.as_ref())
    }
}
