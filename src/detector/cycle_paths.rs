use std::collections::HashSet;

use super::depth_first::{Frame, is_acyclic};
use crate::error::CycleTrailError;
use crate::graph::DirectedGraph;

/// A closed walk `v0 -> v1 -> ... -> vk` with `vk == v0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<V> {
    vertices: Vec<V>,
}

impl<V: Copy> Cycle<V> {
    /// Vertices in walk order, the start vertex repeated at the end
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn start(&self) -> V {
        self.vertices[0]
    }

    /// Number of edges in the walk
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// Find one cycle that starts and ends at `root`
///
/// Runs a depth-first search from `root` with a seen-set of its own. A seen
/// vertex other than `root` is a branch into some other cycle and is skipped.
/// The first closing edge found, in successor order, wins. Vertices without a
/// display resource are never entered.
pub fn find_cycle_through<G: DirectedGraph>(
    graph: &G,
    root: G::Vertex,
) -> Result<Option<Cycle<G::Vertex>>, CycleTrailError> {
    if graph.resource(root).is_none() {
        return Ok(None);
    }

    let mut seen = HashSet::new();
    seen.insert(root);
    let mut stack = vec![Frame::new(root, graph.successors(root)?)];

    while let Some(frame) = stack.last_mut() {
        let Some(head) = frame.advance() else {
            stack.pop();
            continue;
        };

        if head == root {
            let mut vertices: Vec<_> = stack.iter().map(|frame| frame.vertex).collect();
            vertices.push(root);
            return Ok(Some(Cycle { vertices }));
        }

        if graph.resource(head).is_none() || !seen.insert(head) {
            continue;
        }

        stack.push(Frame::new(head, graph.successors(head)?));
    }

    Ok(None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Acyclic,
    Scanning,
    Failed,
}

/// Lazy sequence of cycles, one per scanned vertex that lies on a cycle
///
/// The acyclicity check runs on the first call to `next`; when it finds no
/// back edge the sequence is empty and no per-vertex search happens. After
/// an error the sequence ends.
pub struct CyclePaths<'g, G: DirectedGraph> {
    graph: &'g G,
    next_root: usize,
    phase: Phase,
}

/// Cycles of `graph`, one per vertex in vertex order
pub fn cycle_paths<G: DirectedGraph>(graph: &G) -> CyclePaths<'_, G> {
    CyclePaths {
        graph,
        next_root: 0,
        phase: Phase::Pending,
    }
}

impl<G: DirectedGraph> CyclePaths<'_, G> {
    /// Outcome of the acyclicity check, once it has run
    pub fn acyclic(&self) -> Option<bool> {
        match self.phase {
            Phase::Acyclic => Some(true),
            Phase::Scanning => Some(false),
            Phase::Pending | Phase::Failed => None,
        }
    }

    fn fail(&mut self, err: CycleTrailError) -> Option<Result<Cycle<G::Vertex>, CycleTrailError>> {
        self.phase = Phase::Failed;
        Some(Err(err))
    }
}

impl<G: DirectedGraph> Iterator for CyclePaths<'_, G> {
    type Item = Result<Cycle<G::Vertex>, CycleTrailError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Pending {
            match is_acyclic(self.graph) {
                Ok(true) => self.phase = Phase::Acyclic,
                Ok(false) => self.phase = Phase::Scanning,
                Err(err) => return self.fail(err),
            }
        }

        if self.phase != Phase::Scanning {
            return None;
        }

        while let Some(&root) = self.graph.vertices().get(self.next_root) {
            self.next_root += 1;
            match find_cycle_through(self.graph, root) {
                Ok(Some(cycle)) => return Some(Ok(cycle)),
                Ok(None) => {}
                Err(err) => return self.fail(err),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::AdjacencyGraph;

    fn all_paths(graph: &AdjacencyGraph<&'static str>) -> Vec<Vec<&'static str>> {
        cycle_paths(graph)
            .map(|cycle| cycle.unwrap().into_vertices())
            .collect()
    }

    #[test]
    fn test_two_vertex_cycle_reported_from_both_ends() {
        let graph = AdjacencyGraph::from_adjacency_list([("u", vec!["v"]), ("v", vec!["u"])]);

        assert_eq!(all_paths(&graph), vec![vec!["u", "v", "u"], vec!["v", "u", "v"]]);
    }

    #[test]
    fn test_cycle_not_through_root_is_skipped() {
        // a -> b -> c -> b
        let graph = AdjacencyGraph::from_adjacency_list([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["b"]),
        ]);

        assert_eq!(find_cycle_through(&graph, "a").unwrap(), None);
        assert_eq!(all_paths(&graph), vec![vec!["b", "c", "b"], vec!["c", "b", "c"]]);
    }

    #[test]
    fn test_long_cycle_behind_a_chain() {
        // d -> e -> f -> g -> e
        let graph = AdjacencyGraph::from_adjacency_list([
            ("d", vec!["e"]),
            ("e", vec!["f"]),
            ("f", vec!["g"]),
            ("g", vec!["e"]),
        ]);

        assert_eq!(
            all_paths(&graph),
            vec![
                vec!["e", "f", "g", "e"],
                vec!["f", "g", "e", "f"],
                vec!["g", "e", "f", "g"],
            ]
        );
    }

    #[test]
    fn test_tree_reports_nothing() {
        let graph = AdjacencyGraph::from_adjacency_list([
            ("root", vec!["left", "right"]),
            ("left", vec!["leaf"]),
            ("right", vec!["leaf"]),
            ("leaf", vec![]),
        ]);

        let mut paths = cycle_paths(&graph);
        assert!(paths.next().is_none());
        assert_eq!(paths.acyclic(), Some(true));
    }

    #[test]
    fn test_self_loop() {
        let graph = AdjacencyGraph::from_adjacency_list([("z", vec!["z"])]);

        assert_eq!(all_paths(&graph), vec![vec!["z", "z"]]);
        let cycle = find_cycle_through(&graph, "z").unwrap().unwrap();
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle.start(), "z");
    }

    #[test]
    fn test_first_cycle_in_successor_order_wins() {
        // Both a -> b -> a and a -> c -> a exist; b is listed first
        let graph = AdjacencyGraph::from_adjacency_list([
            ("a", vec!["b", "c"]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
        ]);

        let cycle = find_cycle_through(&graph, "a").unwrap().unwrap();
        assert_eq!(cycle.vertices(), &["a", "b", "a"]);
    }

    #[test]
    fn test_dead_end_branch_is_abandoned() {
        let graph = AdjacencyGraph::from_adjacency_list([
            ("a", vec!["dead", "b"]),
            ("dead", vec!["end"]),
            ("end", vec![]),
            ("b", vec!["a"]),
        ]);

        let cycle = find_cycle_through(&graph, "a").unwrap().unwrap();
        assert_eq!(cycle.vertices(), &["a", "b", "a"]);
    }

    #[test]
    fn test_seen_vertices_are_not_revisited_within_one_root() {
        // x is a dead end reached through p first; q skips it and closes
        // the cycle directly
        let graph = AdjacencyGraph::from_adjacency_list([
            ("r", vec!["p", "q"]),
            ("p", vec!["x"]),
            ("q", vec!["x", "r"]),
            ("x", vec![]),
        ]);

        let cycle = find_cycle_through(&graph, "r").unwrap().unwrap();
        assert_eq!(cycle.vertices(), &["r", "q", "r"]);
    }

    #[test]
    fn test_error_ends_the_sequence() {
        let graph = AdjacencyGraph::from_adjacency_list([("a", vec!["a", "ghost"])]);

        let mut paths = cycle_paths(&graph);
        // The acyclicity check stops at a -> a before touching "ghost"
        assert_eq!(paths.next().unwrap().unwrap().into_vertices(), vec!["a", "a"]);
        assert_eq!(paths.acyclic(), Some(false));
        assert!(paths.next().is_none());

        let broken = AdjacencyGraph::from_adjacency_list([("a", vec!["ghost"])]);
        let mut paths = cycle_paths(&broken);
        assert!(matches!(
            paths.next(),
            Some(Err(CycleTrailError::UnknownVertex { .. }))
        ));
        assert!(paths.next().is_none());
    }
}
