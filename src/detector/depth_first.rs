use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::error::CycleTrailError;
use crate::graph::DirectedGraph;

/// A vertex on the explicit DFS stack, with the position of the next
/// successor to look at
pub(super) struct Frame<'g, V> {
    pub(super) vertex: V,
    pub(super) adjacent: &'g [V],
    pub(super) next: usize,
}

impl<'g, V: Copy> Frame<'g, V> {
    pub(super) fn new(vertex: V, adjacent: &'g [V]) -> Self {
        Self {
            vertex,
            adjacent,
            next: 0,
        }
    }

    pub(super) fn advance(&mut self) -> Option<V> {
        let head = self.adjacent.get(self.next).copied();
        self.next += 1;
        head
    }
}

/// Depth-first traversal of the whole graph
///
/// Every vertex not yet reached becomes a root, in vertex order. `visitor` is
/// called once per vertex when it is discovered, together with its
/// successors. `back_edge` is called with `(tail, head)` for every edge that
/// points at a vertex on the current DFS path, i.e. every edge that closes a
/// cycle.
pub fn depth_first_iterator<G, F, B>(
    graph: &G,
    mut visitor: F,
    mut back_edge: B,
) -> Result<(), CycleTrailError>
where
    G: DirectedGraph,
    F: FnMut(G::Vertex, &[G::Vertex]),
    B: FnMut(G::Vertex, G::Vertex),
{
    let flow = walk(graph, &mut visitor, &mut |tail, head| {
        back_edge(tail, head);
        ControlFlow::Continue(())
    })?;
    debug_assert!(flow.is_continue());
    Ok(())
}

/// Test whether the graph is acyclic
///
/// Stops at the first back edge, so a cyclic graph is usually rejected long
/// before the traversal completes.
pub fn is_acyclic<G: DirectedGraph>(graph: &G) -> Result<bool, CycleTrailError> {
    let flow = walk(graph, &mut |_, _| {}, &mut |_, _| ControlFlow::Break(()))?;
    Ok(flow.is_continue())
}

fn walk<G, F, B>(graph: &G, visitor: &mut F, back_edge: &mut B) -> Result<ControlFlow<()>, CycleTrailError>
where
    G: DirectedGraph,
    F: FnMut(G::Vertex, &[G::Vertex]),
    B: FnMut(G::Vertex, G::Vertex) -> ControlFlow<()>,
{
    // discovered = on the current path, finished = fully explored
    let mut discovered = HashSet::new();
    let mut finished = HashSet::new();
    let mut stack: Vec<Frame<'_, G::Vertex>> = Vec::new();

    for &root in graph.vertices() {
        if discovered.contains(&root) || finished.contains(&root) {
            continue;
        }

        let adjacent = graph.successors(root)?;
        discovered.insert(root);
        visitor(root, adjacent);
        stack.push(Frame::new(root, adjacent));

        while let Some(frame) = stack.last_mut() {
            let tail = frame.vertex;
            let Some(head) = frame.advance() else {
                stack.pop();
                discovered.remove(&tail);
                finished.insert(tail);
                continue;
            };

            if discovered.contains(&head) {
                if back_edge(tail, head).is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            } else if !finished.contains(&head) {
                let adjacent = graph.successors(head)?;
                discovered.insert(head);
                visitor(head, adjacent);
                stack.push(Frame::new(head, adjacent));
            }
        }
    }

    Ok(ControlFlow::Continue(()))
}
