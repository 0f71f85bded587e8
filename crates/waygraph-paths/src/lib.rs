//! Path searches over directed weighted graphs.
//!
//! This crate provides three searches between a start and a goal vertex:
//!
//! - **Dijkstra** shortest path ([`PathSearch::dijkstra`], or the O(V²)
//!   [`PathSearch::dijkstra_scan`] with identical output)
//! - **A\*** shortest path guided by a distance estimate ([`PathSearch::astar`])
//! - **Longest simple path** by exhaustive backtracking ([`PathSearch::longest_path`])
//!
//! [`PathSearch`] owns and reuses internal tables so that repeated queries
//! incur no allocations after warm-up; the one-shot functions [`dijkstra`],
//! [`astar`] and [`longest_path`] create a fresh one per call. Searches only
//! borrow the graph, so a built graph can be queried from many threads, each
//! with its own `PathSearch`.
//!
//! Failures are reported through [`SearchError`]: a missing endpoint, an
//! unreachable goal, or a search stopped by its [`Limits`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`WeightedPather`] | Dijkstra, longest path |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Graph`](waygraph_core::Graph) implements both, estimating with the
//! Euclidean distance between vertex coordinates. [`Guided`] swaps in another
//! heuristic.
//!
//! ```
//! use waygraph_core::Graph;
//! use waygraph_paths::{astar, dijkstra, longest_path};
//!
//! let mut g = Graph::new();
//! g.add_vertex("A", 0.0, 0.0);
//! g.add_vertex("B", 1.0, 0.0);
//! g.add_vertex("C", 2.0, 0.0);
//! g.add_edge("A", "B", 1.0);
//! g.add_edge("B", "C", 1.0);
//! g.add_edge("A", "C", 5.0);
//!
//! let short = dijkstra(&g, &"A", &"C").unwrap();
//! assert_eq!(short.path, ["A", "B", "C"]);
//! assert_eq!((short.cost, short.expanded), (2.0, 3));
//!
//! assert_eq!(astar(&g, &"A", &"C").unwrap().path, short.path);
//!
//! let long = longest_path(&g, &"A", &"C").unwrap();
//! assert_eq!((long.path, long.cost), (vec!["A", "C"], 5.0));
//! ```

mod astar;
mod dijkstra;
mod distance;
mod limits;
mod longest;
mod outcome;
mod queue;
mod search;
mod traits;

#[cfg(test)]
mod testutil;

pub use distance::{chebyshev, euclidean, manhattan, zero};
pub use limits::{CancelToken, Limits};
pub use outcome::{Endpoint, LongestPath, SearchError, ShortestPath};
pub use queue::{Prioritized, PriorityQueue};
pub use search::{PathSearch, astar, dijkstra, longest_path};
pub use traits::{AstarPather, Guided, WeightedPather};
