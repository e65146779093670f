//! Strongly connected components.
//!
//! Two algorithms are provided, [`TarjanScc`] (one pass, low-link) and
//! [`KosarajuScc`] (two passes, finish order then transpose). They always
//! produce the same [`Scc`].

use crate::dfs::{Frame, LowLink, Status};
use crate::error::Error;
use crate::graph::{Graph, Vertex};
use crate::partition::Scc;
use log::{debug, trace, warn};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Algorithms computing the strongly connected components of a graph.
pub trait SccDecomposer {
    /// Partition the vertices of `graph` into maximal sets of mutually
    /// reachable vertices.
    ///
    /// An undirected graph is accepted: each of its connected components is
    /// then strongly connected.
    fn compute<V: Vertex>(&self, graph: &Graph<V>) -> Scc<V>;
}

fn log_start<V: Vertex>(name: &str, graph: &Graph<V>) {
    if !graph.is_directed() {
        warn!("{}: computing SCC of an undirected graph", name);
    }
    debug!(
        "{}: {} vertices, {} edges",
        name,
        graph.vertex_count(),
        graph.edge_count()
    );
}

/// Single-pass low-link algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct TarjanScc;

impl SccDecomposer for TarjanScc {
    fn compute<V: Vertex>(&self, graph: &Graph<V>) -> Scc<V> {
        log_start("tarjan", graph);
        let components = Tarjan::new(graph.adjacency()).run();
        debug!("tarjan: {} components", components.len());
        Scc::from_indices(graph, components)
    }
}

/// Traversal state of one [`TarjanScc`] run.
struct Tarjan<'g> {
    adj: &'g [Vec<usize>],
    state: LowLink,
    /// Vertices entered and not yet assigned, in discovery order.
    open: Vec<usize>,
    frames: Vec<Frame>,
    components: Vec<Vec<usize>>,
}

impl<'g> Tarjan<'g> {
    fn new(adj: &'g [Vec<usize>]) -> Self {
        Tarjan {
            adj,
            state: LowLink::new(adj.len()),
            open: Vec::new(),
            frames: Vec::new(),
            components: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<usize>> {
        for v in 0..self.adj.len() {
            if self.state.status[v] == Status::Unvisited {
                self.visit(v);
            }
        }
        self.components
    }

    fn enter(&mut self, v: usize) {
        self.state.discover(v);
        self.open.push(v);
        self.frames.push(Frame::new(v));
    }

    fn visit(&mut self, root: usize) {
        self.enter(root);
        while let Some(frame) = self.frames.last_mut() {
            let v = frame.vertex;
            match frame.next_neighbour(self.adj) {
                Some(w) => match self.state.status[w] {
                    Status::Unvisited => self.enter(w),
                    // back edge to an ancestor, or an edge into an open
                    // component not closed yet
                    Status::Open => {
                        let dfs_w = self.state.dfs[w];
                        self.state.lower(v, dfs_w);
                    }
                    Status::Closed => {}
                },
                None => {
                    let _ = self.frames.pop();
                    if self.state.is_root(v) {
                        self.close(v);
                    }
                    if let Some(parent) = self.frames.last() {
                        let low_v = self.state.low[v];
                        self.state.lower(parent.vertex, low_v);
                    }
                }
            }
        }
    }

    /// Pop the open stack down to `root` into a new component.
    fn close(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some(x) = self.open.pop() {
            self.state.status[x] = Status::Closed;
            component.push(x);
            if x == root {
                break;
            }
        }
        trace!("tarjan: component of {} vertices rooted at {}", component.len(), root);
        self.components.push(component);
    }
}

/// Two-pass algorithm over the graph and its transpose.
#[derive(Clone, Copy, Debug, Default)]
pub struct KosarajuScc;

impl SccDecomposer for KosarajuScc {
    fn compute<V: Vertex>(&self, graph: &Graph<V>) -> Scc<V> {
        log_start("kosaraju", graph);
        let finished = finish_order(graph.adjacency());
        let components = claim_components(&graph.reversed_adjacency(), finished);
        debug!("kosaraju: {} components", components.len());
        Scc::from_indices(graph, components)
    }
}

/// Vertices in increasing depth-first finish time.
fn finish_order(adj: &[Vec<usize>]) -> Vec<usize> {
    let mut status = vec![Status::Unvisited; adj.len()];
    let mut finished = Vec::with_capacity(adj.len());
    let mut frames = Vec::new();
    for root in 0..adj.len() {
        if status[root] != Status::Unvisited {
            continue;
        }
        status[root] = Status::Open;
        frames.push(Frame::new(root));
        while let Some(frame) = frames.last_mut() {
            match frame.next_neighbour(adj) {
                Some(w) => {
                    if status[w] == Status::Unvisited {
                        status[w] = Status::Open;
                        frames.push(Frame::new(w));
                    }
                }
                None => {
                    let v = frame.vertex;
                    status[v] = Status::Closed;
                    finished.push(v);
                    let _ = frames.pop();
                }
            }
        }
    }
    finished
}

/// Pop `finished` and collect, from each vertex not claimed yet, every
/// unclaimed vertex it reaches in `reversed`.
fn claim_components(reversed: &[Vec<usize>], mut finished: Vec<usize>) -> Vec<Vec<usize>> {
    let mut claimed = vec![false; reversed.len()];
    let mut components = Vec::new();
    let mut stack = Vec::new();
    while let Some(v) = finished.pop() {
        if claimed[v] {
            continue;
        }
        claimed[v] = true;
        stack.push(v);
        let mut component = Vec::new();
        while let Some(x) = stack.pop() {
            component.push(x);
            for &y in &reversed[x] {
                if !claimed[y] {
                    claimed[y] = true;
                    stack.push(y);
                }
            }
        }
        trace!("kosaraju: component of {} vertices from {}", component.len(), v);
        components.push(component);
    }
    components
}

/// Choice of SCC algorithm.
///
/// Parsed case-insensitively from `"tarjan"` or `"kosaraju"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SccAlgorithm {
    /// [`TarjanScc`]
    #[default]
    Tarjan,
    /// [`KosarajuScc`]
    Kosaraju,
}

impl SccAlgorithm {
    /// Run the selected algorithm on `graph`.
    pub fn decompose<V: Vertex>(self, graph: &Graph<V>) -> Scc<V> {
        match self {
            SccAlgorithm::Tarjan => TarjanScc.compute(graph),
            SccAlgorithm::Kosaraju => KosarajuScc.compute(graph),
        }
    }
}

impl FromStr for SccAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tarjan" => Ok(SccAlgorithm::Tarjan),
            "kosaraju" => Ok(SccAlgorithm::Kosaraju),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for SccAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SccAlgorithm::Tarjan => write!(f, "tarjan"),
            SccAlgorithm::Kosaraju => write!(f, "kosaraju"),
        }
    }
}
