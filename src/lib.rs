//! Decomposition of graphs into strongly connected and biconnected components.
//!
//! A [`Graph`] is built once from its vertices and adjacency lists and is
//! read-only afterwards. Decomposers borrow it and return a canonical
//! partition: [`Scc`] partitions the vertices of a directed graph,
//! [`Bcc`] partitions the edges of an undirected graph.
//!
//!```
//!use graph_components::{Graph, SccAlgorithm, SccDecomposer, KosarajuScc, TarjanScc};
//!
//!let g = Graph::from_edges(
//!    vec!['a', 'b', 'c', 'd'],
//!    vec![('a', 'b'), ('b', 'a'), ('b', 'c'), ('c', 'd'), ('d', 'c')],
//!    true,
//!).unwrap();
//!
//!// Both algorithms agree on the canonical partition
//!let scc = TarjanScc.compute(&g);
//!assert_eq!(scc, KosarajuScc.compute(&g));
//!assert_eq!(scc.to_string(), "(a,b)(c,d)");
//!
//!// Same thing through the algorithm selector
//!let kosaraju: SccAlgorithm = "kosaraju".parse().unwrap();
//!assert_eq!(g.strongly_connected_components(kosaraju), scc);
//!
//!// Undirected graphs split into biconnected components
//!let mut h = Graph::from_edges(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 1), (3, 4)], false).unwrap();
//!let bcc = h.biconnected_components();
//!assert_eq!(bcc.to_string(), "(1-2,1-3,2-3)(3-4)");
//!assert_eq!(bcc.articulation_points(), vec![3]);
//!assert_eq!(bcc.bridges(), vec![(3, 4)]);
//!
//!// Components can be attached to the graph they describe
//!h.attach_bcc(bcc).unwrap();
//!assert!(h.bcc().is_some());
//!```
//!
//! Traversals use explicit stacks, so the depth of a graph is only bounded
//! by memory. Each decomposition keeps its state local to the call: the
//! same graph can be decomposed from several threads at once.

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    unused_labels,
    unused_results
)]

mod bcc;
mod dfs;
mod error;
pub mod example;
mod graph;
mod partition;
mod scc;

pub use crate::bcc::{BccDecomposer, TarjanBcc};
pub use crate::error::{Error, Result};
pub use crate::graph::{Graph, Vertex};
pub use crate::partition::{Bcc, Scc};
pub use crate::scc::{KosarajuScc, SccAlgorithm, SccDecomposer, TarjanScc};
