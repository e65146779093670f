//! Validated partitions produced by the decompositions.
//!
//! Both types store their components in canonical form: every component is
//! sorted and the components are sorted lexicographically. Two partitions
//! are equal exactly when they have the same components, whatever the
//! order in which those were discovered.

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use std::slice;

/// Sort each component, then the list of components.
fn canonicalize<T: Ord>(components: &mut Vec<Vec<T>>) {
    for c in components.iter_mut() {
        c.sort();
    }
    components.sort();
}

/// Reject empty components.
fn check_non_empty<T>(components: &[Vec<T>]) -> Result<()> {
    match components.iter().position(Vec::is_empty) {
        Some(i) => Err(Error::InvalidPartition(format!("component {} is empty", i))),
        None => Ok(()),
    }
}

/// Partition of the vertices of a graph into strongly connected components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scc<V> {
    vertices: Vec<V>,
    components: Vec<Vec<V>>,
}

impl<V: Vertex> Scc<V> {
    /// Validate and canonicalize a list of components.
    ///
    /// Fails with [`Error::InvalidPartition`] if a vertex appears twice,
    /// in one component or across two, or if a component is empty.
    pub fn new(mut components: Vec<Vec<V>>) -> Result<Self> {
        check_non_empty(&components)?;
        canonicalize(&mut components);
        let mut vertices: Vec<V> = components.iter().flatten().cloned().collect();
        vertices.sort();
        if let Some(pair) = vertices.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::InvalidPartition(format!(
                "vertex {:?} is in more than one place",
                pair[0]
            )));
        }
        Ok(Scc {
            vertices,
            components,
        })
    }

    /// Components given by vertex index in `graph`, known to partition it.
    pub(crate) fn from_indices(graph: &Graph<V>, components: Vec<Vec<usize>>) -> Self {
        debug_assert_eq!(
            components.iter().map(Vec::len).sum::<usize>(),
            graph.vertex_count()
        );
        let mut components: Vec<Vec<V>> = components
            .into_iter()
            .map(|c| c.into_iter().map(|i| graph.vertex(i).clone()).collect())
            .collect();
        canonicalize(&mut components);
        Scc {
            vertices: graph.vertices().to_vec(),
            components,
        }
    }

    /// Index of the component containing `v`.
    pub fn component_of(&self, v: &V) -> Option<usize> {
        self.components
            .iter()
            .position(|c| c.binary_search(v).is_ok())
    }
}

impl<V> Scc<V> {
    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Return `true` if there is no component.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The `i`-th component in canonical order.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&[V]> {
        self.components.get(i).map(Vec::as_slice)
    }

    /// Iterate over the components in canonical order.
    pub fn iter(&self) -> slice::Iter<'_, Vec<V>> {
        self.components.iter()
    }

    /// All components in canonical order.
    #[inline]
    pub fn components(&self) -> &[Vec<V>] {
        &self.components
    }

    /// The covered vertices, sorted.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}

impl<V> Index<usize> for Scc<V> {
    type Output = [V];

    fn index(&self, i: usize) -> &[V] {
        &self.components[i]
    }
}

impl<'a, V> IntoIterator for &'a Scc<V> {
    type Item = &'a Vec<V>;
    type IntoIter = slice::Iter<'a, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `(a,b,c)(d,e)`
impl<V: Display> Display for Scc<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in &self.components {
            write!(f, "(")?;
            for (i, v) in c.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Partition of the edges of an undirected graph into biconnected components.
///
/// Edges are stored as ordered pairs and each component holds both
/// directions of its edges. Vertices are not partitioned: an articulation
/// point belongs to several components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bcc<V> {
    edges: Vec<(V, V)>,
    components: Vec<Vec<(V, V)>>,
}

impl<V: Vertex> Bcc<V> {
    /// Validate and canonicalize a list of components.
    ///
    /// Fails with [`Error::InvalidPartition`] if a pair appears twice, in one
    /// component or across two, if a component holds `(u, v)` but not
    /// `(v, u)`, or if a component is empty.
    pub fn new(mut components: Vec<Vec<(V, V)>>) -> Result<Self> {
        check_non_empty(&components)?;
        canonicalize(&mut components);
        for c in &components {
            if let Some((u, v)) = c
                .iter()
                .find(|(u, v)| c.binary_search(&(v.clone(), u.clone())).is_err())
            {
                return Err(Error::InvalidPartition(format!(
                    "edge ({:?}, {:?}) has no reverse in its component",
                    u, v
                )));
            }
        }
        let mut edges: Vec<(V, V)> = components.iter().flatten().cloned().collect();
        edges.sort();
        if let Some(pair) = edges.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::InvalidPartition(format!(
                "edge {:?} is in more than one place",
                pair[0]
            )));
        }
        Ok(Bcc { edges, components })
    }

    /// Components given by vertex index in `graph`, known to partition its edges.
    pub(crate) fn from_indices(graph: &Graph<V>, components: Vec<Vec<(usize, usize)>>) -> Self {
        let mut components: Vec<Vec<(V, V)>> = components
            .into_iter()
            .map(|c| {
                c.into_iter()
                    .map(|(i, j)| (graph.vertex(i).clone(), graph.vertex(j).clone()))
                    .collect()
            })
            .collect();
        canonicalize(&mut components);
        let mut edges: Vec<(V, V)> = components.iter().flatten().cloned().collect();
        edges.sort();
        debug_assert_eq!(edges.len(), graph.edge_count());
        Bcc { edges, components }
    }

    /// Vertices belonging to more than one component, sorted.
    ///
    /// Self-loop components are not counted.
    pub fn articulation_points(&self) -> Vec<V> {
        let mut seen: Vec<V> = Vec::new();
        for c in self.components.iter().filter(|c| !is_loop(c)) {
            let mut ends: Vec<&V> = c.iter().map(|(u, _)| u).collect();
            ends.dedup();
            seen.extend(ends.into_iter().cloned());
        }
        seen.sort();
        let mut points: Vec<V> = seen
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0].clone())
            .collect();
        points.dedup();
        points
    }

    /// Components made of a single edge, as `(u, v)` with `u < v`.
    pub fn bridges(&self) -> Vec<(V, V)> {
        self.components
            .iter()
            .filter(|c| c.len() == 2 && !is_loop(c))
            .map(|c| c[0].clone())
            .collect()
    }
}

/// A component holding a single self-loop.
fn is_loop<V: PartialEq>(c: &[(V, V)]) -> bool {
    c.len() == 1 && c[0].0 == c[0].1
}

impl<V> Bcc<V> {
    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Return `true` if there is no component.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The `i`-th component in canonical order.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&[(V, V)]> {
        self.components.get(i).map(Vec::as_slice)
    }

    /// Iterate over the components in canonical order.
    pub fn iter(&self) -> slice::Iter<'_, Vec<(V, V)>> {
        self.components.iter()
    }

    /// All components in canonical order.
    #[inline]
    pub fn components(&self) -> &[Vec<(V, V)>] {
        &self.components
    }

    /// Every pair of every component, sorted.
    #[inline]
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    /// Number of edge directions, that is twice the number of edges
    /// not counting self-loops.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V> Index<usize> for Bcc<V> {
    type Output = [(V, V)];

    fn index(&self, i: usize) -> &[(V, V)] {
        &self.components[i]
    }
}

impl<'a, V> IntoIterator for &'a Bcc<V> {
    type Item = &'a Vec<(V, V)>;
    type IntoIter = slice::Iter<'a, Vec<(V, V)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `(a-b,a-c,b-c)(c-d)`, each edge once.
impl<V: Display + Ord> Display for Bcc<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in &self.components {
            write!(f, "(")?;
            let halves = c.iter().filter(|(u, v)| u <= v);
            for (i, (u, v)) in halves.enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}-{}", u, v)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
