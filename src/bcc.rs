//! Biconnected components.

use crate::dfs::{Frame, LowLink, Status};
use crate::graph::{Graph, Vertex};
use crate::partition::Bcc;
use log::{debug, trace, warn};

/// Algorithms computing the biconnected components of an undirected graph.
pub trait BccDecomposer {
    /// Partition the edges of `graph` into biconnected components.
    ///
    /// Every component holds both directions of its edges. A bridge is a
    /// component on its own, and so is a self-loop. Isolated vertices
    /// belong to no component.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency of `graph` is not symmetric.
    fn compute<V: Vertex>(&self, graph: &Graph<V>) -> Bcc<V>;
}

/// Depth-first algorithm with an edge stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct TarjanBcc;

impl BccDecomposer for TarjanBcc {
    fn compute<V: Vertex>(&self, graph: &Graph<V>) -> Bcc<V> {
        assert!(
            graph.is_symmetric(),
            "biconnected components need a symmetric adjacency"
        );
        if graph.is_directed() {
            warn!("tarjan-bcc: graph is flagged directed");
        }
        debug!(
            "tarjan-bcc: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count() / 2
        );
        let components = Biconnect::new(graph.adjacency()).run();
        debug!("tarjan-bcc: {} components", components.len());
        Bcc::from_indices(graph, components)
    }
}

/// Traversal state of one [`TarjanBcc`] run.
struct Biconnect<'g> {
    adj: &'g [Vec<usize>],
    state: LowLink,
    parent: Vec<Option<usize>>,
    /// Tree and back edges not yet assigned to a component.
    edges: Vec<(usize, usize)>,
    frames: Vec<Frame>,
    components: Vec<Vec<(usize, usize)>>,
}

impl<'g> Biconnect<'g> {
    fn new(adj: &'g [Vec<usize>]) -> Self {
        Biconnect {
            adj,
            state: LowLink::new(adj.len()),
            parent: vec![None; adj.len()],
            edges: Vec::new(),
            frames: Vec::new(),
            components: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<(usize, usize)>> {
        for v in 0..self.adj.len() {
            if self.state.status[v] == Status::Unvisited {
                self.visit(v);
            }
        }
        debug_assert!(self.edges.is_empty());
        self.components
    }

    fn enter(&mut self, v: usize) {
        self.state.discover(v);
        self.frames.push(Frame::new(v));
    }

    fn visit(&mut self, root: usize) {
        self.enter(root);
        while let Some(frame) = self.frames.last_mut() {
            let v = frame.vertex;
            match frame.next_neighbour(self.adj) {
                Some(w) if w == v => {
                    trace!("tarjan-bcc: self-loop at {}", v);
                    self.components.push(vec![(v, v)]);
                }
                // the tree edge back to the parent; simple graphs only
                Some(w) if self.parent[v] == Some(w) => {}
                Some(w) => match self.state.status[w] {
                    Status::Unvisited => {
                        self.edges.push((v, w));
                        self.parent[w] = Some(v);
                        self.enter(w);
                    }
                    Status::Open => {
                        self.edges.push((v, w));
                        let dfs_w = self.state.dfs[w];
                        self.state.lower(v, dfs_w);
                    }
                    // pushed already from the other endpoint
                    Status::Closed => {
                        let dfs_w = self.state.dfs[w];
                        self.state.lower(v, dfs_w);
                    }
                },
                None => {
                    let _ = self.frames.pop();
                    self.state.status[v] = Status::Closed;
                    if let Some(p) = self.parent[v] {
                        let low_v = self.state.low[v];
                        self.state.lower(p, low_v);
                        if low_v >= self.state.dfs[p] {
                            self.close(p, v);
                        }
                    }
                }
            }
        }
    }

    /// Pop the edge stack down to the tree edge `(p, v)` into a new component.
    fn close(&mut self, p: usize, v: usize) {
        let mut component = Vec::new();
        while let Some((x, y)) = self.edges.pop() {
            component.push((x, y));
            component.push((y, x));
            if (x, y) == (p, v) {
                break;
            }
        }
        trace!(
            "tarjan-bcc: component of {} edges closed at {}",
            component.len() / 2,
            p
        );
        self.components.push(component);
    }
}
