use waygraph_core::Coord;

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    a.euclidean(b)
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    a.manhattan(b)
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> f64 {
    a.chebyshev(b)
}

/// The null heuristic. A* guided by it expands like Dijkstra up to the goal.
#[inline]
pub fn zero(_: Coord, _: Coord) -> f64 {
    0.0
}
