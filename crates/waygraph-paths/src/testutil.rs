//! Graph fixtures and exhaustive reference searches for tests.

use rand::Rng;
use waygraph_core::Graph;

/// `A(0,0) → B(1,0) → C(2,0)` with unit weights, plus `A → C` of weight 5.
pub(crate) fn abc() -> Graph<&'static str> {
    let mut g = Graph::new();
    g.add_vertex("A", 0.0, 0.0);
    g.add_vertex("B", 1.0, 0.0);
    g.add_vertex("C", 2.0, 0.0);
    g.add_edge("A", "B", 1.0);
    g.add_edge("B", "C", 1.0);
    g.add_edge("A", "C", 5.0);
    g
}

/// A random graph on keys `0..n` (`1 <= n <= max_vertices`) on an integer
/// grid. Every edge weighs strictly more than the straight-line distance
/// between its endpoints, so the Euclidean heuristic is consistent.
pub(crate) fn random_graph<R: Rng>(rng: &mut R, max_vertices: u32, density: f64) -> Graph<u32> {
    let n = rng.random_range(1..=max_vertices);
    let mut g = Graph::with_capacity(n as usize);
    for k in 0..n {
        let x = rng.random_range(0..10) as f64;
        let y = rng.random_range(0..10) as f64;
        g.add_vertex(k, x, y);
    }
    for u in 0..n {
        for v in 0..n {
            if u == v || !rng.random_bool(density) {
                continue;
            }
            let (Some(a), Some(b)) = (g.coord_of(&u), g.coord_of(&v)) else {
                continue;
            };
            let weight = a.euclidean(b) + rng.random_range(0..5) as f64 + 0.5;
            g.add_edge(&u, &v, weight);
        }
    }
    g
}

/// Sum of edge weights along `path`, accumulated from the start.
pub(crate) fn path_cost<K: Eq + std::hash::Hash + Clone>(g: &Graph<K>, path: &[K]) -> f64 {
    path.windows(2)
        .map(|w| g.edge_weight(&w[0], &w[1]).expect("path uses existing edges"))
        .fold(0.0, |acc, w| acc + w)
}

/// Every simple path from `start` to `goal` with its cost.
pub(crate) fn brute_force_paths(g: &Graph<u32>, start: u32, goal: u32) -> Vec<(Vec<u32>, f64)> {
    fn walk(g: &Graph<u32>, goal: u32, path: &mut Vec<u32>, cost: f64, out: &mut Vec<(Vec<u32>, f64)>) {
        let Some(&u) = path.last() else {
            return;
        };
        if u == goal {
            out.push((path.clone(), cost));
            return;
        }
        let Some(ui) = g.index_of(&u) else {
            return;
        };
        for e in g.edges(ui) {
            let v = *g.key(e.to);
            if path.contains(&v) {
                continue;
            }
            path.push(v);
            walk(g, goal, path, cost + e.weight, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    if g.contains(&start) && g.contains(&goal) {
        walk(g, goal, &mut vec![start], 0.0, &mut out);
    }
    out
}

/// Costs of every simple path from `start` to `goal`.
pub(crate) fn brute_force_costs(g: &Graph<u32>, start: u32, goal: u32) -> Vec<f64> {
    brute_force_paths(g, start, goal)
        .into_iter()
        .map(|(_, cost)| cost)
        .collect()
}
