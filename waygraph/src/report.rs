//! Search report for a scenario: all three searches side by side.

use std::fmt;

use serde::Serialize;
use waygraph_core::{Scenario, ScenarioKey};
use waygraph_paths::{LongestPath, PathSearch, SearchError, ShortestPath};

use crate::config::RunConfig;

/// Results of running every configured search on one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub vertices: usize,
    pub edges: usize,
    pub start: ScenarioKey,
    pub goal: ScenarioKey,
    /// Straight-line start–goal distance; `None` if an endpoint is missing.
    pub straight_line: Option<f64>,
    pub dijkstra: Result<ShortestPath<ScenarioKey>, SearchError>,
    pub astar: Result<ShortestPath<ScenarioKey>, SearchError>,
    /// `None` when the longest-path search was disabled.
    pub longest: Option<Result<LongestPath<ScenarioKey>, SearchError>>,
}

impl Report {
    /// Run the searches selected by `config` on `scenario`.
    pub fn build(scenario: &Scenario, config: &RunConfig) -> Self {
        let limits = config.limits();
        let graph = &scenario.graph;
        let (start, goal) = (&scenario.start, &scenario.goal);
        let mut search = PathSearch::new();

        let dijkstra = search.dijkstra_with(graph, start, goal, &limits);
        let astar = search.astar_with(graph, start, goal, &limits);
        let longest = config
            .longest_path
            .then(|| search.longest_path_with(graph, start, goal, &limits));

        log::info!(
            "report: {start} -> {goal}, dijkstra {}, astar {}",
            outcome_label(&dijkstra),
            outcome_label(&astar)
        );

        Self {
            vertices: scenario.vertex_count,
            edges: scenario.edge_count,
            start: scenario.start,
            goal: scenario.goal,
            straight_line: scenario.start_goal_distance(),
            dijkstra,
            astar,
            longest,
        }
    }
}

fn outcome_label<T>(r: &Result<T, SearchError>) -> &'static str {
    match r {
        Ok(_) => "found",
        Err(SearchError::MissingVertex(_)) => "missing vertex",
        Err(SearchError::Unreachable { .. }) => "unreachable",
        Err(SearchError::Interrupted { .. }) => "interrupted",
    }
}

fn join_keys(path: &[ScenarioKey]) -> String {
    path.iter()
        .map(ScenarioKey::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn no_path(err: &SearchError) -> &'static str {
    match err {
        SearchError::Interrupted { .. } => "No path (search interrupted)",
        _ => "No path",
    }
}

fn write_shortest(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    result: &Result<ShortestPath<ScenarioKey>, SearchError>,
) -> fmt::Result {
    writeln!(f, "###### {title} ######")?;
    match result {
        Ok(found) => {
            writeln!(f, "Shortest path: {}", join_keys(&found.path))?;
            writeln!(f, "Shortest length: {:.3}", found.cost)?;
            writeln!(f, "Number of expanded nodes: {}", found.expanded)
        }
        Err(err) => {
            writeln!(f, "Shortest path: {}", no_path(err))?;
            writeln!(f, "Shortest length: INF")?;
            writeln!(f, "Number of expanded nodes: {}", err.expanded())
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}, Edges: {}", self.vertices, self.edges)?;
        writeln!(f, "Start: {}, Goal: {}", self.start, self.goal)?;
        match self.straight_line {
            Some(d) => writeln!(f, "Euclidean distance (start-goal): {d:.3}")?,
            None => writeln!(f, "Euclidean distance (start-goal): n/a")?,
        }

        write_shortest(f, "Shortest path by Dijkstra's Algorithm:", &self.dijkstra)?;
        write_shortest(f, "Shortest path by A* Algorithm", &self.astar)?;

        if let Some(longest) = &self.longest {
            writeln!(f, "###### Longest Path by DFS ######")?;
            match longest {
                Ok(found) => {
                    writeln!(f, "Longest path: {}", join_keys(&found.path))?;
                    writeln!(f, "Longest length: {:.3}", found.cost)?;
                }
                Err(err) => {
                    writeln!(f, "Longest path: {}", no_path(err))?;
                    writeln!(f, "Longest length: INF")?;
                }
            }
        }
        Ok(())
    }
}
