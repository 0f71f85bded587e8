use waygraph_core::VertexId;

use crate::limits::Limits;
use crate::outcome::{SearchError, ShortestPath};
use crate::queue::{Prioritized, PriorityQueue};
use crate::search::{PathSearch, Slot, endpoints};
use crate::traits::WeightedPather;

impl PathSearch {
    /// Compute the shortest path from `start` to `goal` with Dijkstra's
    /// algorithm, using a binary heap frontier.
    ///
    /// Every vertex reachable from `start` is expanded (there is no early
    /// exit at the goal), so `expanded` counts the reachable set. Among
    /// vertices at equal distance the smaller key is expanded first.
    /// Output is identical to [`dijkstra_scan`](Self::dijkstra_scan).
    pub fn dijkstra<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        self.dijkstra_with(pather, start, goal, &Limits::none())
    }

    /// [`dijkstra`](Self::dijkstra) bounded by `limits`.
    pub fn dijkstra_with<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
        limits: &Limits,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        let (s, t) = endpoints(pather, start, goal)?;
        self.begin(pather.vertex_count());
        self.relax(s, 0.0, None);

        let mut open = PriorityQueue::with_capacity(pather.vertex_count());
        open.enqueue(Prioritized::new(
            0.0,
            Slot {
                key: pather.key(s),
                id: s,
            },
        ));

        let mut expanded = 0;
        while let Some(entry) = open.dequeue() {
            let ci = entry.item.id;
            // Stale entries: already finalized, or superseded by a cheaper push.
            if self.is_closed(ci) || entry.priority != self.g(ci) {
                continue;
            }
            limits.check(expanded)?;
            self.close(ci);
            expanded += 1;
            log::trace!("dijkstra: expand {} at {}", ci.index(), entry.priority);

            let current_g = entry.priority;
            for e in pather.edges(ci) {
                if self.is_closed(e.to) {
                    continue;
                }
                let tentative = current_g + e.weight;
                if tentative < self.g(e.to) {
                    self.relax(e.to, tentative, Some(ci));
                    open.enqueue(Prioritized::new(
                        tentative,
                        Slot {
                            key: pather.key(e.to),
                            id: e.to,
                        },
                    ));
                }
            }
        }

        self.finish_dijkstra(pather, t, expanded)
    }

    /// Compute the shortest path from `start` to `goal` with Dijkstra's
    /// algorithm, scanning every candidate for the minimum on each step.
    ///
    /// O(V²) but allocation-free. Same output as [`dijkstra`](Self::dijkstra).
    pub fn dijkstra_scan<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        self.dijkstra_scan_with(pather, start, goal, &Limits::none())
    }

    /// [`dijkstra_scan`](Self::dijkstra_scan) bounded by `limits`.
    pub fn dijkstra_scan_with<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
        limits: &Limits,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        let (s, t) = endpoints(pather, start, goal)?;
        let len = pather.vertex_count();
        self.begin(len);
        self.relax(s, 0.0, None);

        let mut expanded = 0;
        loop {
            // Candidate with the smallest (distance, key); untouched
            // vertices are at infinity and never selected.
            let mut best: Option<(f64, VertexId)> = None;
            for i in 0..len {
                let v = VertexId::new(i);
                if !self.is_touched(v) || self.is_closed(v) {
                    continue;
                }
                let g = self.g(v);
                if g == f64::INFINITY {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((bg, bv)) => g
                        .total_cmp(&bg)
                        .then_with(|| pather.key(v).cmp(pather.key(bv)))
                        .is_lt(),
                };
                if better {
                    best = Some((g, v));
                }
            }
            let Some((current_g, ci)) = best else {
                break;
            };

            limits.check(expanded)?;
            self.close(ci);
            expanded += 1;
            log::trace!("dijkstra_scan: expand {} at {current_g}", ci.index());

            for e in pather.edges(ci) {
                if self.is_closed(e.to) {
                    continue;
                }
                let tentative = current_g + e.weight;
                if tentative < self.g(e.to) {
                    self.relax(e.to, tentative, Some(ci));
                }
            }
        }

        self.finish_dijkstra(pather, t, expanded)
    }

    fn finish_dijkstra<P: WeightedPather>(
        &self,
        pather: &P,
        goal: VertexId,
        expanded: usize,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        let cost = self.g(goal);
        if cost == f64::INFINITY {
            log::debug!("dijkstra: goal unreachable, {expanded} expanded");
            return Err(SearchError::Unreachable { expanded });
        }
        let path = self.reconstruct(pather, goal);
        log::debug!(
            "dijkstra: {} vertices, cost {cost}, {expanded} expanded",
            path.len()
        );
        Ok(ShortestPath {
            path,
            cost,
            expanded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Endpoint;
    use crate::testutil::{abc, brute_force_costs, path_cost, random_graph};
    use crate::{CancelToken, dijkstra};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use waygraph_core::Graph;

    #[test]
    fn abc_scenario() {
        let g = abc();
        let found = dijkstra(&g, &"A", &"C").unwrap();
        assert_eq!(found.path, vec!["A", "B", "C"]);
        assert_eq!(found.cost, 2.0);
        assert_eq!(found.expanded, 3);

        let scanned = PathSearch::new().dijkstra_scan(&g, &"A", &"C").unwrap();
        assert_eq!(scanned, found);
    }

    #[test]
    fn start_is_goal() {
        let g = abc();
        let found = dijkstra(&g, &"B", &"B").unwrap();
        assert_eq!(found.path, vec!["B"]);
        assert_eq!(found.cost, 0.0);
        // B and C are reachable from B.
        assert_eq!(found.expanded, 2);
    }

    #[test]
    fn missing_endpoints() {
        let g = abc();
        let mut ps = PathSearch::new();
        assert_eq!(
            ps.dijkstra(&g, &"A", &"Z"),
            Err(SearchError::MissingVertex(Endpoint::Goal))
        );
        assert_eq!(
            ps.dijkstra_scan(&g, &"Z", &"A"),
            Err(SearchError::MissingVertex(Endpoint::Start))
        );
    }

    #[test]
    fn unreachable_reports_expansions() {
        let g = abc();
        // Edges only point "rightwards".
        let err = dijkstra(&g, &"C", &"A").unwrap_err();
        assert_eq!(err, SearchError::Unreachable { expanded: 1 });

        let mut g = abc();
        g.add_vertex("D", 5.0, 5.0);
        let err = PathSearch::new().dijkstra_scan(&g, &"A", &"D").unwrap_err();
        assert_eq!(err, SearchError::Unreachable { expanded: 3 });
    }

    #[test]
    fn dropped_edge_has_no_effect() {
        let mut g = abc();
        g.add_edge("A", "Z", 0.0);
        g.add_edge("Z", "C", 0.0);
        let found = dijkstra(&g, &"A", &"C").unwrap();
        assert_eq!(found.path, vec!["A", "B", "C"]);
        assert_eq!(found.cost, 2.0);
    }

    #[test]
    fn equal_cost_ties_prefer_smaller_keys() {
        // Two routes of cost 2 to d: via b and via c. c is registered and
        // linked first, but b sorts first and is therefore expanded first.
        let mut g = Graph::new();
        for (k, x) in [('a', 0.0), ('c', 1.0), ('b', 1.0), ('d', 2.0)] {
            g.add_vertex(k, x, 0.0);
        }
        g.add_edge(&'a', &'c', 1.0);
        g.add_edge(&'a', &'b', 1.0);
        g.add_edge(&'c', &'d', 1.0);
        g.add_edge(&'b', &'d', 1.0);

        let heap = dijkstra(&g, &'a', &'d').unwrap();
        let scan = PathSearch::new().dijkstra_scan(&g, &'a', &'d').unwrap();
        assert_eq!(heap.path, vec!['a', 'b', 'd']);
        assert_eq!(heap, scan);
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = Graph::new();
        for k in 0..4u8 {
            g.add_vertex(k, 0.0, 0.0);
        }
        g.add_edge(&0, &1, 0.0);
        g.add_edge(&1, &2, 0.0);
        g.add_edge(&0, &2, 0.0);
        g.add_edge(&2, &3, 1.0);
        let found = dijkstra(&g, &0, &3).unwrap();
        assert_eq!(found.cost, 1.0);
        assert_eq!(found.path.first(), Some(&0));
        assert_eq!(found.path.last(), Some(&3));
    }

    #[test]
    fn limits_interrupt_search() {
        let g = abc();
        let mut ps = PathSearch::new();
        let err = ps
            .dijkstra_with(&g, &"A", &"C", &Limits::none().max_expanded(1))
            .unwrap_err();
        assert_eq!(err, SearchError::Interrupted { expanded: 1 });

        let token = CancelToken::new();
        token.cancel();
        let err = ps
            .dijkstra_scan_with(&g, &"A", &"C", &Limits::none().cancel_on(token))
            .unwrap_err();
        assert_eq!(err, SearchError::Interrupted { expanded: 0 });

        // A budget equal to the work needed is enough.
        let ok = ps.dijkstra_with(&g, &"A", &"C", &Limits::none().max_expanded(3));
        assert!(ok.is_ok());
    }

    #[test]
    fn reused_search_context() {
        let g = abc();
        let mut ps = PathSearch::new();
        for _ in 0..3 {
            assert_eq!(ps.dijkstra(&g, &"A", &"C").unwrap().cost, 2.0);
            assert_eq!(ps.dijkstra(&g, &"B", &"C").unwrap().cost, 1.0);
            assert!(ps.dijkstra(&g, &"C", &"A").is_err());
        }
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ps = PathSearch::new();
        for _ in 0..300 {
            let g = random_graph(&mut rng, 7, 0.35);
            let n = g.len() as u32;
            for start in 0..n {
                for goal in 0..n {
                    let costs = brute_force_costs(&g, start, goal);
                    let heap = ps.dijkstra(&g, &start, &goal);
                    let scan = ps.dijkstra_scan(&g, &start, &goal);
                    assert_eq!(heap, scan);
                    match costs.iter().copied().reduce(f64::min) {
                        None => assert!(matches!(heap, Err(SearchError::Unreachable { .. }))),
                        Some(best) => {
                            let found = heap.unwrap();
                            assert_eq!(found.cost, best);
                            assert_eq!(found.path.first(), Some(&start));
                            assert_eq!(found.path.last(), Some(&goal));
                            assert_eq!(path_cost(&g, &found.path), found.cost);
                        }
                    }
                }
            }
        }
    }
}
