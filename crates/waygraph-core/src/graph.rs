//! Directed weighted graph keyed by caller-chosen vertex identifiers.
//!
//! Vertices are stored densely in registration order and addressed
//! internally by [`VertexId`]. Adjacency lists keep edge insertion order so
//! that every traversal of the graph is deterministic.
//!
//! Two registration policies are part of the contract:
//!
//! - registering a key twice is a no-op (the first coordinates win);
//! - an edge naming an unregistered endpoint is silently dropped.
//!
//! Neither is reported as an error. Both mutators return `bool` so callers
//! that care can tell whether the graph changed.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::geom::Coord;

// ---------------------------------------------------------------------------
// VertexId / Edge / Vertex
// ---------------------------------------------------------------------------

/// Dense index of a vertex inside one [`Graph`].
///
/// Ids are handed out in registration order starting at 0 and are only
/// meaningful for the graph that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Wrap a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index, suitable for addressing per-vertex tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A directed edge to `to` with a non-negative `weight`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

/// A registered vertex: its key, its position and its outgoing edges.
#[derive(Clone, Debug)]
pub struct Vertex<K> {
    key: K,
    coord: Coord,
    edges: Vec<Edge>,
}

impl<K> Vertex<K> {
    /// The caller-facing key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The vertex position.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the edge to `to`, if there is one.
    pub fn weight_to(&self, to: VertexId) -> Option<f64> {
        self.edges.iter().find(|e| e.to == to).map(|e| e.weight)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph with weighted edges and planar vertex coordinates.
///
/// Edge weights are expected to be non-negative; shortest-path searches rely
/// on it but the graph does not enforce it.
///
/// Searches only need `&Graph`, so a fully built graph can be shared between
/// threads and queried concurrently. Mutation needs `&mut Graph`.
#[derive(Clone, Debug)]
pub struct Graph<K> {
    vertices: Vec<Vertex<K>>,
    index: HashMap<K, VertexId>,
    edge_count: usize,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<K> Graph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no vertex is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of distinct directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The vertex with the given id.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this graph.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex<K> {
        &self.vertices[id.0]
    }

    /// The key of the vertex with the given id.
    #[inline]
    pub fn key(&self, id: VertexId) -> &K {
        &self.vertices[id.0].key
    }

    /// The position of the vertex with the given id.
    #[inline]
    pub fn coord(&self, id: VertexId) -> Coord {
        self.vertices[id.0].coord
    }

    /// Outgoing edges of the vertex with the given id, in insertion order.
    #[inline]
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        &self.vertices[id.0].edges
    }

    /// All vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K>> + '_ {
        self.vertices.iter()
    }
}

impl<K: Eq + Hash + Clone> Graph<K> {
    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Register a vertex at `(x, y)`.
    ///
    /// Registering an existing key leaves the graph untouched (the first
    /// coordinates are kept) and returns `false`.
    pub fn add_vertex(&mut self, key: K, x: f64, y: f64) -> bool {
        self.add_vertex_at(key, Coord::new(x, y))
    }

    /// Register a vertex at `coord`. Same policy as [`add_vertex`](Self::add_vertex).
    pub fn add_vertex_at(&mut self, key: K, coord: Coord) -> bool {
        if self.index.contains_key(&key) {
            log::debug!("add_vertex: key already registered, ignoring");
            return false;
        }
        if !coord.is_finite() {
            log::warn!("add_vertex: non-finite coordinates {coord}");
        }
        let id = VertexId(self.vertices.len());
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex {
            key,
            coord,
            edges: Vec::new(),
        });
        true
    }

    /// Add the directed edge `from → to`.
    ///
    /// If either endpoint is unregistered the edge is dropped and `false` is
    /// returned. Adding an edge that already exists replaces its weight in
    /// place. The reverse edge is never implied.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q, weight: f64) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(u), Some(v)) = (self.index_of(from), self.index_of(to)) else {
            log::debug!("add_edge: endpoint not registered, dropping edge");
            return false;
        };
        if !(weight.is_finite() && weight >= 0.0) {
            log::warn!(
                "add_edge: weight {weight} on edge {} -> {} breaks the non-negative weight precondition",
                u.0,
                v.0
            );
        }

        let edges = &mut self.vertices[u.0].edges;
        match edges.iter_mut().find(|e| e.to == v) {
            Some(existing) => existing.weight = weight,
            None => {
                edges.push(Edge { to: v, weight });
                self.edge_count += 1;
            }
        }
        true
    }

    /// Whether `key` is registered.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// The id of `key`, if registered.
    pub fn index_of<Q>(&self, key: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// The position of `key`, if registered.
    pub fn coord_of<Q>(&self, key: &Q) -> Option<Coord>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|id| self.coord(id))
    }

    /// Weight of the edge `from → to`, if both vertices and the edge exist.
    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.vertices[u.0].weight_to(v)
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_impl {
    use std::hash::Hash;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Graph;

    #[derive(Serialize, Deserialize)]
    struct VertexRepr<K> {
        key: K,
        x: f64,
        y: f64,
    }

    #[derive(Serialize, Deserialize)]
    struct EdgeRepr<K> {
        from: K,
        to: K,
        weight: f64,
    }

    #[derive(Serialize, Deserialize)]
    struct GraphRepr<K> {
        vertices: Vec<VertexRepr<K>>,
        edges: Vec<EdgeRepr<K>>,
    }

    impl<K: Serialize + Clone> Serialize for Graph<K> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let vertices = self
                .vertices()
                .map(|v| VertexRepr {
                    key: v.key().clone(),
                    x: v.coord().x,
                    y: v.coord().y,
                })
                .collect();
            let edges = self
                .vertices()
                .flat_map(|v| {
                    v.edges().iter().map(|e| EdgeRepr {
                        from: v.key().clone(),
                        to: self.key(e.to).clone(),
                        weight: e.weight,
                    })
                })
                .collect();
            GraphRepr { vertices, edges }.serialize(serializer)
        }
    }

    /// Rebuilds through the public mutators, so duplicate vertices and
    /// dangling edges follow the usual registration policies.
    impl<'de, K: Deserialize<'de> + Eq + Hash + Clone> Deserialize<'de> for Graph<K> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = GraphRepr::<K>::deserialize(deserializer)?;
            let mut graph = Graph::with_capacity(repr.vertices.len());
            for v in repr.vertices {
                graph.add_vertex(v.key, v.x, v.y);
            }
            for e in repr.edges {
                graph.add_edge(&e.from, &e.to, e.weight);
            }
            Ok(graph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_vertex("A", 0.0, 0.0);
        g.add_vertex("B", 1.0, 0.0);
        g.add_vertex("C", 2.0, 0.0);
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "C", 1.0);
        g.add_edge("A", "C", 5.0);
        g
    }

    #[test]
    fn registration_order_ids() {
        let g = line();
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.index_of("A"), Some(VertexId::new(0)));
        assert_eq!(g.index_of("C"), Some(VertexId::new(2)));
        assert_eq!(g.key(VertexId::new(1)), &"B");
        let keys: Vec<_> = g.vertices().map(|v| *v.key()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicate_vertex_is_ignored() {
        let mut g = line();
        assert!(!g.add_vertex("A", 9.0, 9.0));
        assert_eq!(g.len(), 3);
        assert_eq!(g.coord_of("A"), Some(Coord::new(0.0, 0.0)));
    }

    #[test]
    fn dangling_edge_is_dropped() {
        let mut g = line();
        assert!(!g.add_edge("A", "Z", 1.0));
        assert!(!g.add_edge("Z", "A", 1.0));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges(g.index_of("A").unwrap()).len(), 2);
        assert!(!g.contains("Z"));
    }

    #[test]
    fn edges_are_directed() {
        let g = line();
        assert_eq!(g.edge_weight("A", "B"), Some(1.0));
        assert_eq!(g.edge_weight("B", "A"), None);
    }

    #[test]
    fn re_adding_edge_replaces_weight_in_place() {
        let mut g = line();
        assert!(g.add_edge("A", "B", 7.0));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight("A", "B"), Some(7.0));
        let a = g.index_of("A").unwrap();
        let first = g.edges(a)[0];
        assert_eq!(first.to, g.index_of("B").unwrap());
        assert_eq!(first.weight, 7.0);
    }

    #[test]
    fn self_loop_is_accepted() {
        let mut g = line();
        assert!(g.add_edge("B", "B", 0.5));
        assert_eq!(g.edge_weight("B", "B"), Some(0.5));
    }

    #[test]
    fn owned_string_keys_borrow_as_str() {
        let mut g: Graph<String> = Graph::with_capacity(2);
        g.add_vertex("x".to_string(), 0.0, 0.0);
        g.add_vertex("y".to_string(), 0.0, 1.0);
        assert!(g.add_edge("x", "y", 2.0));
        assert_eq!(g.edge_weight("x", "y"), Some(2.0));
        let y = g.index_of("y").unwrap();
        assert_eq!(g.vertex(y).coord(), Coord::new(0.0, 1.0));
        assert_eq!(g.vertex(g.index_of("x").unwrap()).weight_to(y), Some(2.0));
    }

    #[test]
    fn empty_graph() {
        let g: Graph<u32> = Graph::default();
        assert!(g.is_empty());
        assert_eq!(g.vertices().count(), 0);
        assert_eq!(g.index_of(&0), None);
    }
}
