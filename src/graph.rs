//! Read-only adjacency store.

use crate::bcc::{BccDecomposer, TarjanBcc};
use crate::error::{Error, Result};
use crate::partition::{Bcc, Scc};
use crate::scc::SccAlgorithm;
use std::fmt::{self, Debug, Display, Formatter};

/// Types usable as vertex identifiers.
///
/// Blanket-implemented for every `Ord + Clone + Debug` type.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}

/// A directed or undirected graph over the vertices of type `V`.
///
/// Vertices are kept sorted and each one is addressed internally by its
/// position in that order. Adjacency lists are sorted and duplicate-free.
/// An undirected graph stores every edge in both directions.
///
/// The vertex set and adjacency never change after construction.
/// Components computed on the graph can be attached to it with
/// [`Graph::attach_scc`] and [`Graph::attach_bcc`].
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adj: Vec<Vec<usize>>,
    directed: bool,
    scc: Option<Scc<V>>,
    bcc: Option<Bcc<V>>,
}

/// Position of `v` in the sorted slice `vertices`.
fn lookup<V: Vertex>(vertices: &[V], v: &V) -> Result<usize> {
    vertices
        .binary_search(v)
        .map_err(|_| Error::InvalidGraph(format!("unknown vertex {:?}", v)))
}

/// Sort `vertices` and reject duplicates.
fn sorted_vertices<V: Vertex>(mut vertices: Vec<V>) -> Result<Vec<V>> {
    vertices.sort();
    if let Some(pair) = vertices.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::InvalidGraph(format!(
            "duplicate vertex {:?}",
            pair[0]
        )));
    }
    Ok(vertices)
}

impl<V: Vertex> Graph<V> {
    /// Build a graph from its vertices and adjacency lists.
    ///
    /// `adjacency` yields `(v, neighbours of v)`. A vertex with no entry has
    /// no outgoing edge. Duplicated neighbours are collapsed.
    ///
    /// Fails with [`Error::InvalidGraph`] if `vertices` contains a duplicate,
    /// if an adjacency entry names a vertex outside `vertices`, or if a vertex
    /// has two adjacency entries.
    ///
    /// When `directed` is `false` the adjacency is expected to be symmetric;
    /// this is not checked here (see [`Graph::is_symmetric`]).
    pub fn new<A, N>(vertices: Vec<V>, adjacency: A, directed: bool) -> Result<Self>
    where
        A: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let vertices = sorted_vertices(vertices)?;
        let mut adj: Vec<Option<Vec<usize>>> = vec![None; vertices.len()];
        for (v, nbrs) in adjacency {
            let i = lookup(&vertices, &v)?;
            if adj[i].is_some() {
                return Err(Error::InvalidGraph(format!(
                    "two adjacency lists for vertex {:?}",
                    v
                )));
            }
            let mut list = nbrs
                .into_iter()
                .map(|w| lookup(&vertices, &w))
                .collect::<Result<Vec<_>>>()?;
            list.sort_unstable();
            list.dedup();
            adj[i] = Some(list);
        }
        let adj = adj.into_iter().map(Option::unwrap_or_default).collect();
        Ok(Self::from_parts(vertices, adj, directed))
    }

    /// Build a graph from a list of edges.
    ///
    /// For an undirected graph each `(u, v)` is stored in both directions.
    pub fn from_edges<E>(vertices: Vec<V>, edges: E, directed: bool) -> Result<Self>
    where
        E: IntoIterator<Item = (V, V)>,
    {
        let vertices = sorted_vertices(vertices)?;
        let mut adj = vec![Vec::new(); vertices.len()];
        for (u, v) in edges {
            let i = lookup(&vertices, &u)?;
            let j = lookup(&vertices, &v)?;
            adj[i].push(j);
            if !directed {
                adj[j].push(i);
            }
        }
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Ok(Self::from_parts(vertices, adj, directed))
    }

    fn from_parts(vertices: Vec<V>, adj: Vec<Vec<usize>>, directed: bool) -> Self {
        Self {
            vertices,
            adj,
            directed,
            scc: None,
            bcc: None,
        }
    }

    /// The vertices, sorted.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edge directions.
    ///
    /// Each undirected edge counts twice, a self-loop once.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Whether the graph was built as directed.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Position of `v` in [`Graph::vertices`], or `None` if `v` is not a vertex.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.vertices.binary_search(v).ok()
    }

    /// Sorted neighbours of `v`, or `None` if `v` is not a vertex.
    pub fn neighbours<'a>(&'a self, v: &V) -> Option<impl Iterator<Item = &'a V> + 'a> {
        let i = self.index_of(v)?;
        Some(self.adj[i].iter().map(move |&j| &self.vertices[j]))
    }

    /// Return `true` if `(u, v)` is an edge.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(i), Some(j)) => self.adj[i].binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// Every stored edge `(u, v)`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adj.iter().enumerate().flat_map(move |(i, nbrs)| {
            nbrs.iter()
                .map(move |&j| (&self.vertices[i], &self.vertices[j]))
        })
    }

    /// Return `true` if every edge `(u, v)` has its reverse `(v, u)`.
    pub fn is_symmetric(&self) -> bool {
        self.adj.iter().enumerate().all(|(i, nbrs)| {
            nbrs.iter()
                .all(|&j| self.adj[j].binary_search(&i).is_ok())
        })
    }

    /// The graph with every edge reversed.
    ///
    /// An undirected graph is its own transpose, so a copy is returned.
    /// Attached components are not carried over.
    pub fn transpose(&self) -> Self {
        let adj = if self.directed {
            self.reversed_adjacency()
        } else {
            self.adj.clone()
        };
        Self::from_parts(self.vertices.clone(), adj, self.directed)
    }

    /// Index-level adjacency.
    #[inline]
    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adj
    }

    #[inline]
    pub(crate) fn vertex(&self, i: usize) -> &V {
        &self.vertices[i]
    }

    /// Reversed index-level adjacency, whatever the `directed` flag says.
    ///
    /// Lists come out sorted because sources are scanned in increasing order.
    pub(crate) fn reversed_adjacency(&self) -> Vec<Vec<usize>> {
        let mut rev = vec![Vec::new(); self.adj.len()];
        for (i, nbrs) in self.adj.iter().enumerate() {
            for &j in nbrs {
                rev[j].push(i);
            }
        }
        rev
    }

    /// Strongly connected components computed with `algorithm`.
    pub fn strongly_connected_components(&self, algorithm: SccAlgorithm) -> Scc<V> {
        algorithm.decompose(self)
    }

    /// Biconnected components.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency is not symmetric.
    pub fn biconnected_components(&self) -> Bcc<V> {
        TarjanBcc.compute(self)
    }

    /// Attach strongly connected components to the graph.
    ///
    /// Fails with [`Error::AttachmentMismatch`] unless `scc` covers exactly
    /// the vertices of the graph.
    pub fn attach_scc(&mut self, scc: Scc<V>) -> Result<()> {
        if scc.vertices() != self.vertices.as_slice() {
            return Err(Error::AttachmentMismatch(format!(
                "SCC covers {} vertices, graph has {} and they differ",
                scc.vertices().len(),
                self.vertices.len()
            )));
        }
        self.scc = Some(scc);
        Ok(())
    }

    /// Attach biconnected components to the graph.
    ///
    /// Fails with [`Error::AttachmentMismatch`] unless `bcc` holds as many
    /// edge directions as the graph and each of them is an edge of the graph.
    pub fn attach_bcc(&mut self, bcc: Bcc<V>) -> Result<()> {
        if bcc.edge_count() != self.edge_count() {
            return Err(Error::AttachmentMismatch(format!(
                "BCC holds {} edge directions, graph has {}",
                bcc.edge_count(),
                self.edge_count()
            )));
        }
        if let Some((u, v)) = bcc.edges().iter().find(|(u, v)| !self.has_edge(u, v)) {
            return Err(Error::AttachmentMismatch(format!(
                "BCC edge ({:?}, {:?}) is not in the graph",
                u, v
            )));
        }
        self.bcc = Some(bcc);
        Ok(())
    }

    /// Attached strongly connected components, if any.
    pub fn scc(&self) -> Option<&Scc<V>> {
        self.scc.as_ref()
    }

    /// Attached biconnected components, if any.
    pub fn bcc(&self) -> Option<&Bcc<V>> {
        self.bcc.as_ref()
    }
}

/// Graphs are equal when they have the same vertices and the same edges.
impl<V: PartialEq> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.adj == other.adj
    }
}

impl<V: Eq> Eq for Graph<V> {}

/// One line per vertex: `v: w1 w2 ...`.
impl<V: Display> Display for Graph<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (v, nbrs) in self.vertices.iter().zip(&self.adj) {
            write!(f, "{}:", v)?;
            for &j in nbrs {
                write!(f, " {}", self.vertices[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
