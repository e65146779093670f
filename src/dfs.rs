//! Bookkeeping shared by the depth-first traversals.
//!
//! The traversals never recurse: each keeps a stack of [`Frame`]s, one per
//! vertex on the current path, holding how far that vertex's adjacency list
//! has been scanned.

/// Visit state of a vertex during a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Unvisited,
    /// Entered and not yet assigned to a component.
    Open,
    Closed,
}

/// A vertex on the traversal path and the cursor in its adjacency list.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub(crate) vertex: usize,
    cursor: usize,
}

impl Frame {
    #[inline]
    pub(crate) fn new(vertex: usize) -> Self {
        Frame { vertex, cursor: 0 }
    }

    /// Return the next unscanned neighbour and advance past it.
    #[inline]
    pub(crate) fn next_neighbour(&mut self, adj: &[Vec<usize>]) -> Option<usize> {
        let w = adj[self.vertex].get(self.cursor).copied();
        if w.is_some() {
            self.cursor += 1;
        }
        w
    }
}

/// Discovery and low-link tables indexed by vertex.
#[derive(Clone, Debug)]
pub(crate) struct LowLink {
    pub(crate) status: Vec<Status>,
    pub(crate) dfs: Vec<usize>,
    pub(crate) low: Vec<usize>,
    time: usize,
}

impl LowLink {
    /// Every vertex of `0..n` starts unvisited.
    pub(crate) fn new(n: usize) -> Self {
        LowLink {
            status: vec![Status::Unvisited; n],
            dfs: vec![usize::MAX; n],
            low: vec![usize::MAX; n],
            time: 0,
        }
    }

    /// Give `v` the next discovery index and open it.
    #[inline]
    pub(crate) fn discover(&mut self, v: usize) {
        debug_assert_eq!(self.status[v], Status::Unvisited);
        self.status[v] = Status::Open;
        self.dfs[v] = self.time;
        self.low[v] = self.time;
        self.time += 1;
    }

    /// Lower `low[v]` to `value` if smaller.
    #[inline]
    pub(crate) fn lower(&mut self, v: usize, value: usize) {
        if value < self.low[v] {
            self.low[v] = value;
        }
    }

    #[inline]
    pub(crate) fn is_root(&self, v: usize) -> bool {
        self.low[v] == self.dfs[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_scans_each_neighbour_once() {
        let adj = vec![vec![1, 2], vec![], vec![0]];
        let mut frame = Frame::new(0);
        assert_eq!(frame.next_neighbour(&adj), Some(1));
        assert_eq!(frame.next_neighbour(&adj), Some(2));
        assert_eq!(frame.next_neighbour(&adj), None);
        assert_eq!(frame.next_neighbour(&adj), None);
        assert_eq!(Frame::new(1).next_neighbour(&adj), None);
    }

    #[test]
    fn discovery_order() {
        let mut state = LowLink::new(3);
        state.discover(2);
        state.discover(0);
        assert_eq!(state.dfs[2], 0);
        assert_eq!(state.dfs[0], 1);
        assert_eq!(state.status[1], Status::Unvisited);
        assert!(state.is_root(0));
        state.lower(0, 0);
        assert!(!state.is_root(0));
        state.lower(0, 5);
        assert_eq!(state.low[0], 0);
    }
}
