use waygraph_core::VertexId;

use crate::outcome::{Endpoint, LongestPath, SearchError, ShortestPath};
use crate::traits::{AstarPather, WeightedPather};

// ---------------------------------------------------------------------------
// Internal per-vertex search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: Option<VertexId>,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: None,
            generation: 0,
            closed: false,
        }
    }
}

/// Frontier payload: ties on priority fall back to the vertex key.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Slot<'k, K> {
    pub(crate) key: &'k K,
    pub(crate) id: VertexId,
}

/// One level of the explicit longest-path DFS stack.
#[derive(Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) v: VertexId,
    pub(crate) next_edge: usize,
    pub(crate) cost: f64,
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable scratch space for path searches.
///
/// `PathSearch` owns the per-vertex tables and stacks the engines need, so
/// repeated queries on one thread allocate nothing once the tables have
/// grown to the graph size. The graph is only borrowed per call; keep one
/// `PathSearch` per thread and share the graph between them.
#[derive(Default)]
pub struct PathSearch {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // longest-path scratch
    pub(crate) on_path: Vec<bool>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) current: Vec<VertexId>,
    pub(crate) best: Vec<VertexId>,
}

impl PathSearch {
    /// Create an empty search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query over `len` vertices and return its generation.
    ///
    /// Bumping the generation lazily invalidates every node; a node whose
    /// generation differs from the current one reads as untouched.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Tentative cost of `v` in the current query.
    #[inline]
    pub(crate) fn g(&self, v: VertexId) -> f64 {
        let n = &self.nodes[v.index()];
        if n.generation == self.generation {
            n.g
        } else {
            f64::INFINITY
        }
    }

    #[inline]
    pub(crate) fn is_touched(&self, v: VertexId) -> bool {
        self.nodes[v.index()].generation == self.generation
    }

    #[inline]
    pub(crate) fn is_closed(&self, v: VertexId) -> bool {
        let n = &self.nodes[v.index()];
        n.generation == self.generation && n.closed
    }

    /// Record `g` and `parent` for `v`, reopening it if untouched.
    #[inline]
    pub(crate) fn relax(&mut self, v: VertexId, g: f64, parent: Option<VertexId>) {
        let cur_gen = self.generation;
        let n = &mut self.nodes[v.index()];
        if n.generation != cur_gen {
            n.generation = cur_gen;
            n.closed = false;
        }
        n.g = g;
        n.parent = parent;
    }

    #[inline]
    pub(crate) fn close(&mut self, v: VertexId) {
        self.nodes[v.index()].closed = true;
    }

    /// Walk parent links back from `goal` and return keys start → goal.
    pub(crate) fn reconstruct<P: WeightedPather>(&self, pather: &P, goal: VertexId) -> Vec<P::Key> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(v) = cur {
            path.push(pather.key(v).clone());
            cur = self.nodes[v.index()].parent;
        }
        path.reverse();
        path
    }
}

/// Resolve both endpoints of a query.
pub(crate) fn endpoints<P: WeightedPather>(
    pather: &P,
    start: &P::Key,
    goal: &P::Key,
) -> Result<(VertexId, VertexId), SearchError> {
    let s = pather
        .index_of(start)
        .ok_or(SearchError::MissingVertex(Endpoint::Start))?;
    let t = pather
        .index_of(goal)
        .ok_or(SearchError::MissingVertex(Endpoint::Goal))?;
    Ok((s, t))
}

// ---------------------------------------------------------------------------
// One-shot entry points
// ---------------------------------------------------------------------------

/// Shortest path from `start` to `goal` with Dijkstra's algorithm.
///
/// See [`PathSearch::dijkstra`].
pub fn dijkstra<P: WeightedPather>(
    pather: &P,
    start: &P::Key,
    goal: &P::Key,
) -> Result<ShortestPath<P::Key>, SearchError> {
    PathSearch::new().dijkstra(pather, start, goal)
}

/// Shortest path from `start` to `goal` with A*.
///
/// See [`PathSearch::astar`].
pub fn astar<P: AstarPather>(
    pather: &P,
    start: &P::Key,
    goal: &P::Key,
) -> Result<ShortestPath<P::Key>, SearchError> {
    PathSearch::new().astar(pather, start, goal)
}

/// Most expensive simple path from `start` to `goal`.
///
/// See [`PathSearch::longest_path`].
pub fn longest_path<P: WeightedPather>(
    pather: &P,
    start: &P::Key,
    goal: &P::Key,
) -> Result<LongestPath<P::Key>, SearchError> {
    PathSearch::new().longest_path(pather, start, goal)
}
