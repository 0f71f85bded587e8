//! Plain-text search scenarios.
//!
//! A scenario is a graph plus the start and goal of a query:
//!
//! ```text
//! <vertex_count> <edge_count>
//! <id> <x> <y>            (vertex_count lines)
//! <from> <to> <weight>    (edge_count lines)
//! <start_id> <goal_id>    (last line)
//! ```
//!
//! Ids are integers, coordinates and weights are decimals. Blank lines are
//! skipped and surrounding whitespace is ignored. The start/goal pair is
//! always read from the last line; extra lines between the edges and it are
//! ignored. Edges that name an unknown vertex follow the graph's usual policy
//! and are dropped.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::geom::Coord;
use crate::graph::Graph;

/// Vertex key type used by text scenarios.
pub type ScenarioKey = i64;

/// A parsed scenario: the graph and the query endpoints.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub graph: Graph<ScenarioKey>,
    pub start: ScenarioKey,
    pub goal: ScenarioKey,
    /// Vertex count declared in the header.
    pub vertex_count: usize,
    /// Edge count declared in the header. Dropped edges are still counted.
    pub edge_count: usize,
}

impl Scenario {
    /// Parse a scenario from text.
    pub fn parse(s: &str) -> Result<Self, ScenarioError> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        let (&(line, header), body) = lines.split_first().ok_or(ScenarioError::Empty)?;
        let mut parts = header.split_whitespace();
        let vertex_count: usize = field(&mut parts, line, "vertex count")?;
        let edge_count: usize = field(&mut parts, line, "edge count")?;

        // Declared counts are checked against the input before anything is
        // sized from them.
        if body.len() < vertex_count {
            return Err(ScenarioError::Truncated {
                expected: "vertex line",
            });
        }
        if body.len() < vertex_count.saturating_add(edge_count) {
            return Err(ScenarioError::Truncated {
                expected: "edge line",
            });
        }

        let (vertex_lines, rest) = body.split_at(vertex_count);
        let (edge_lines, rest) = rest.split_at(edge_count);
        let Some((&(goal_line, goal_text), skipped)) = rest.split_last() else {
            return Err(ScenarioError::Truncated {
                expected: "start/goal line",
            });
        };

        let mut graph = Graph::with_capacity(vertex_count);

        for &(line, text) in vertex_lines {
            let mut parts = text.split_whitespace();
            let id: ScenarioKey = field(&mut parts, line, "vertex id")?;
            let x: f64 = field(&mut parts, line, "x coordinate")?;
            let y: f64 = field(&mut parts, line, "y coordinate")?;
            graph.add_vertex(id, x, y);
        }

        for &(line, text) in edge_lines {
            let mut parts = text.split_whitespace();
            let from: ScenarioKey = field(&mut parts, line, "edge source")?;
            let to: ScenarioKey = field(&mut parts, line, "edge target")?;
            let weight: f64 = field(&mut parts, line, "edge weight")?;
            graph.add_edge(&from, &to, weight);
        }

        if !skipped.is_empty() {
            log::warn!(
                "scenario: ignoring {} line(s) before the start/goal line",
                skipped.len()
            );
        }
        let mut parts = goal_text.split_whitespace();
        let start: ScenarioKey = field(&mut parts, goal_line, "start id")?;
        let goal: ScenarioKey = field(&mut parts, goal_line, "goal id")?;

        log::debug!(
            "scenario: {} vertices, {} edges kept of {} declared, {start} -> {goal}",
            graph.len(),
            graph.edge_count(),
            edge_count
        );

        Ok(Self {
            graph,
            start,
            goal,
            vertex_count,
            edge_count,
        })
    }

    /// Read and parse a scenario from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ScenarioError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Read and parse the scenario file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Position of the start vertex, if it is registered.
    pub fn start_coord(&self) -> Option<Coord> {
        self.graph.coord_of(&self.start)
    }

    /// Position of the goal vertex, if it is registered.
    pub fn goal_coord(&self) -> Option<Coord> {
        self.graph.coord_of(&self.goal)
    }

    /// Straight-line distance between start and goal, if both exist.
    pub fn start_goal_distance(&self) -> Option<f64> {
        Some(self.start_coord()?.euclidean(self.goal_coord()?))
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn field<T: FromStr>(
    parts: &mut SplitWhitespace<'_>,
    line: usize,
    name: &'static str,
) -> Result<T, ScenarioError> {
    let raw = parts
        .next()
        .ok_or(ScenarioError::MissingField { line, field: name })?;
    raw.parse().map_err(|_| ScenarioError::InvalidField {
        line,
        field: name,
        value: raw.to_string(),
    })
}

/// Errors that can occur when loading a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// Reading the input failed.
    Io(io::Error),
    /// The input contains no non-blank line.
    Empty,
    /// The input ended before a required line.
    Truncated { expected: &'static str },
    /// A line has fewer fields than required.
    MissingField { line: usize, field: &'static str },
    /// A field could not be parsed.
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl ScenarioError {
    /// Whether this is an I/O error caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "scenario: {e}"),
            Self::Empty => write!(f, "scenario: input is empty"),
            Self::Truncated { expected } => {
                write!(f, "scenario: input ended, expected a {expected}")
            }
            Self::MissingField { line, field } => {
                write!(f, "scenario: line {line}: missing {field}")
            }
            Self::InvalidField { line, field, value } => {
                write!(f, "scenario: line {line}: invalid {field} \u{201c}{value}\u{201d}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
4 5
1 0 0
2 1 0
3 2 0
4 1 1
1 2 1
2 3 1
1 3 5
1 4 2
4 3 2
1 3
";

    #[test]
    fn parse_sample() {
        let sc = Scenario::parse(SAMPLE).unwrap();
        assert_eq!(sc.vertex_count, 4);
        assert_eq!(sc.edge_count, 5);
        assert_eq!(sc.graph.len(), 4);
        assert_eq!(sc.graph.edge_count(), 5);
        assert_eq!((sc.start, sc.goal), (1, 3));
        assert_eq!(sc.graph.edge_weight(&1, &3), Some(5.0));
        assert_eq!(sc.graph.coord_of(&4), Some(Coord::new(1.0, 1.0)));
        assert_eq!(sc.start_goal_distance(), Some(2.0));
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let text = "\n  2 1  \n\n1 0.5 0.5\n2 1.5 0.5\n\n1 2 3.25\n1 2\n\n";
        let sc: Scenario = text.parse().unwrap();
        assert_eq!(sc.graph.edge_weight(&1, &2), Some(3.25));
        assert_eq!(sc.graph.coord_of(&1), Some(Coord::new(0.5, 0.5)));
    }

    #[test]
    fn dangling_edges_are_dropped_but_counted() {
        let text = "2 2\n1 0 0\n2 1 0\n1 2 1\n1 9 1\n1 2\n";
        let sc = Scenario::parse(text).unwrap();
        assert_eq!(sc.edge_count, 2);
        assert_eq!(sc.graph.edge_count(), 1);
    }

    #[test]
    fn goal_outside_graph_still_parses() {
        let text = "1 0\n1 0 0\n1 7\n";
        let sc = Scenario::parse(text).unwrap();
        assert_eq!(sc.goal, 7);
        assert_eq!(sc.goal_coord(), None);
        assert_eq!(sc.start_goal_distance(), None);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(Scenario::parse("  \n\n"), Err(ScenarioError::Empty)));
    }

    #[test]
    fn truncated_input() {
        let err = Scenario::parse("2 0\n1 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Truncated {
                expected: "vertex line"
            }
        ));

        let err = Scenario::parse("1 0\n1 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Truncated {
                expected: "start/goal line"
            }
        ));
    }

    #[test]
    fn truncated_edges() {
        let err = Scenario::parse("2 2\n1 0 0\n2 1 0\n1 2 1\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Truncated {
                expected: "start/goal line"
            }
        ));

        let err = Scenario::parse("1 3\n1 0 0\n1 1 1\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Truncated {
                expected: "edge line"
            }
        ));
    }

    #[test]
    fn oversized_header_is_rejected() {
        for header in ["18446744073709551615 0", "1000000000000 0", "1 18446744073709551615"] {
            let text = format!("{header}\n1 0 0\n1 1\n");
            let err = Scenario::parse(&text).unwrap_err();
            assert!(matches!(err, ScenarioError::Truncated { .. }), "{header}: {err}");
        }
    }

    #[test]
    fn start_goal_comes_from_last_line() {
        let text = "2 1\n1 0 0\n2 1 0\n1 2 1\n1 2\n2 1\n\n";
        let sc = Scenario::parse(text).unwrap();
        assert_eq!((sc.start, sc.goal), (2, 1));
        assert_eq!(sc.graph.edge_count(), 1);
    }

    #[test]
    fn invalid_start_goal_names_last_line() {
        let err = Scenario::parse("1 0\n1 0 0\nstray\n1 x\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidField {
                line: 4,
                field: "goal id",
                ..
            }
        ));
    }

    #[test]
    fn invalid_field_names_line() {
        let err = Scenario::parse("1 1\n1 0 0\n1 1 heavy\n1 1\n").unwrap_err();
        match err {
            ScenarioError::InvalidField { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "edge weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_field_names_line() {
        let err = Scenario::parse("1 0\n1 0\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::MissingField {
                line: 2,
                field: "y coordinate"
            }
        ));
        assert_eq!(err.to_string(), "scenario: line 2: missing y coordinate");
    }

    #[test]
    fn load_missing_file() {
        let err = Scenario::load("/nonexistent/waygraph/scenario.txt").unwrap_err();
        assert!(err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn from_reader() {
        let sc = Scenario::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(sc.graph.len(), 4);
    }
}
