use std::hash::Hash;

use waygraph_core::{Coord, Edge, Graph, VertexId};

/// Read-only view of a directed graph with weighted (non-negative) edges.
///
/// Vertices are addressed by dense [`VertexId`]s in `0..vertex_count()`.
/// Keys are only used to resolve query endpoints, to break ties between
/// equally good frontier entries, and to report paths.
pub trait WeightedPather {
    type Key: Ord + Clone;

    /// Number of vertices; every id is below this.
    fn vertex_count(&self) -> usize;

    /// Resolve a key to its id.
    fn index_of(&self, key: &Self::Key) -> Option<VertexId>;

    /// The key of `v`.
    fn key(&self, v: VertexId) -> &Self::Key;

    /// Outgoing edges of `v`.
    fn edges(&self, v: VertexId) -> &[Edge];
}

/// Weighted pather with a distance estimate for A*.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`.
    /// Must never overestimate the true cost for A* results to be optimal.
    fn estimate(&self, from: VertexId, to: VertexId) -> f64;
}

impl<K: Eq + Hash + Ord + Clone> WeightedPather for Graph<K> {
    type Key = K;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, key: &K) -> Option<VertexId> {
        Graph::index_of(self, key)
    }

    #[inline]
    fn key(&self, v: VertexId) -> &K {
        Graph::key(self, v)
    }

    #[inline]
    fn edges(&self, v: VertexId) -> &[Edge] {
        Graph::edges(self, v)
    }
}

/// Straight-line distance between vertex coordinates. Admissible when every
/// edge weighs at least the distance between its endpoints.
impl<K: Eq + Hash + Ord + Clone> AstarPather for Graph<K> {
    #[inline]
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        self.coord(from).euclidean(self.coord(to))
    }
}

/// A graph searched with a caller-chosen coordinate heuristic.
///
/// ```
/// use waygraph_core::Graph;
/// use waygraph_paths::{Guided, PathSearch, manhattan};
///
/// let mut g = Graph::new();
/// g.add_vertex(1, 0.0, 0.0);
/// g.add_vertex(2, 1.0, 1.0);
/// g.add_edge(&1, &2, 2.0);
///
/// let guided = Guided::new(&g, manhattan);
/// let found = PathSearch::new().astar(&guided, &1, &2).unwrap();
/// assert_eq!(found.path, vec![1, 2]);
/// ```
pub struct Guided<'g, K, F> {
    graph: &'g Graph<K>,
    estimate: F,
}

impl<'g, K, F> Guided<'g, K, F>
where
    F: Fn(Coord, Coord) -> f64,
{
    /// Search `graph` using `estimate(vertex, goal)` as the heuristic.
    pub fn new(graph: &'g Graph<K>, estimate: F) -> Self {
        Self { graph, estimate }
    }
}

impl<K, F> WeightedPather for Guided<'_, K, F>
where
    K: Eq + Hash + Ord + Clone,
    F: Fn(Coord, Coord) -> f64,
{
    type Key = K;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    fn index_of(&self, key: &K) -> Option<VertexId> {
        self.graph.index_of(key)
    }

    #[inline]
    fn key(&self, v: VertexId) -> &K {
        self.graph.key(v)
    }

    #[inline]
    fn edges(&self, v: VertexId) -> &[Edge] {
        self.graph.edges(v)
    }
}

impl<K, F> AstarPather for Guided<'_, K, F>
where
    K: Eq + Hash + Ord + Clone,
    F: Fn(Coord, Coord) -> f64,
{
    #[inline]
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        (self.estimate)(self.graph.coord(from), self.graph.coord(to))
    }
}
