//! Search results and failures.

use std::fmt;

/// A start-to-goal path found by Dijkstra or A*.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath<K> {
    /// Vertex keys from start to goal inclusive.
    pub path: Vec<K>,
    /// Sum of the edge weights along `path`.
    pub cost: f64,
    /// Vertices removed from the frontier during the search.
    pub expanded: usize,
}

/// The most expensive simple start-to-goal path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongestPath<K> {
    /// Vertex keys from start to goal inclusive; no key repeats.
    pub path: Vec<K>,
    /// Sum of the edge weights along `path`.
    pub cost: f64,
    /// Vertex visits made while enumerating simple paths.
    pub explored: usize,
}

/// Which end of a query was not found in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The start or goal key is not registered. Nothing was expanded.
    MissingVertex(Endpoint),
    /// The frontier ran dry before the goal was reached.
    Unreachable { expanded: usize },
    /// A [`Limits`](crate::Limits) bound stopped the search.
    Interrupted { expanded: usize },
}

impl SearchError {
    /// Expansions performed before the search gave up.
    pub fn expanded(&self) -> usize {
        match *self {
            Self::MissingVertex(_) => 0,
            Self::Unreachable { expanded } | Self::Interrupted { expanded } => expanded,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVertex(end) => write!(f, "{end} vertex is not in the graph"),
            Self::Unreachable { expanded } => {
                write!(f, "goal is unreachable ({expanded} expanded)")
            }
            Self::Interrupted { expanded } => {
                write!(f, "search interrupted after {expanded} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
