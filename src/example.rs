//! Graphs used in doc examples and tests.
use crate::Graph;

/// Directed graph on `A..I` with components
/// `{A,B,C}`, `{D,E}`, `{F}`, `{G,H}` and `{I}`.
pub fn directed() -> Graph<char> {
    let adjacency = vec![
        ('A', vec!['B']),
        ('B', vec!['A', 'C', 'D']),
        ('C', vec!['A', 'H']),
        ('D', vec!['G', 'E']),
        ('E', vec!['D', 'F']),
        ('F', vec!['F']),
        ('G', vec!['I', 'H']),
        ('H', vec!['G']),
        ('I', vec![]),
    ];
    let vertices = adjacency.iter().map(|&(v, _)| v).collect();
    Graph::new(vertices, adjacency, true).expect("fixture is a valid graph")
}

/// Undirected graph on `1..6` with biconnected components
/// `{1-2, 1-3, 2-3}`, `{1-6}` and `{2-4, 2-5, 4-5}`.
pub fn undirected() -> Graph<u32> {
    let edges = vec![(1, 2), (1, 3), (1, 6), (2, 3), (2, 4), (2, 5), (4, 5)];
    Graph::from_edges((1..=6).collect(), edges, false).expect("fixture is a valid graph")
}
