use crate::limits::Limits;
use crate::outcome::{SearchError, ShortestPath};
use crate::queue::{Prioritized, PriorityQueue};
use crate::search::{PathSearch, Slot, endpoints};
use crate::traits::AstarPather;

impl PathSearch {
    /// Compute the shortest path from `start` to `goal` using A*.
    ///
    /// The frontier is ordered by `g + estimate(v, goal)`, ties broken by
    /// vertex key. The search stops as soon as the goal is popped. Results
    /// are optimal when the pather's estimate is admissible and consistent.
    ///
    /// An unreachable goal reports zero expansions.
    pub fn astar<P: AstarPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        self.astar_with(pather, start, goal, &Limits::none())
    }

    /// [`astar`](Self::astar) bounded by `limits`.
    pub fn astar_with<P: AstarPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
        limits: &Limits,
    ) -> Result<ShortestPath<P::Key>, SearchError> {
        let (s, t) = endpoints(pather, start, goal)?;
        self.begin(pather.vertex_count());
        self.relax(s, 0.0, None);

        let mut open = PriorityQueue::new();
        open.enqueue(Prioritized::new(
            pather.estimate(s, t),
            Slot {
                key: pather.key(s),
                id: s,
            },
        ));

        let mut expanded = 0;
        let found = 'search: loop {
            let Some(entry) = open.dequeue() else {
                break 'search false;
            };
            let ci = entry.item.id;

            // Skip stale entries.
            if self.is_closed(ci) {
                continue;
            }
            limits.check(expanded)?;
            self.close(ci);
            expanded += 1;
            log::trace!("astar: expand {} at f = {}", ci.index(), entry.priority);

            if ci == t {
                break 'search true;
            }

            let current_g = self.g(ci);
            for e in pather.edges(ci) {
                if self.is_closed(e.to) {
                    continue;
                }
                let tentative = current_g + e.weight;
                if !self.is_touched(e.to) || tentative < self.g(e.to) {
                    self.relax(e.to, tentative, Some(ci));
                    open.enqueue(Prioritized::new(
                        tentative + pather.estimate(e.to, t),
                        Slot {
                            key: pather.key(e.to),
                            id: e.to,
                        },
                    ));
                }
            }
        };

        if !found {
            log::debug!("astar: goal unreachable after {expanded} expansions");
            return Err(SearchError::Unreachable { expanded: 0 });
        }

        let cost = self.g(t);
        let path = self.reconstruct(pather, t);
        log::debug!(
            "astar: {} vertices, cost {cost}, {expanded} expanded",
            path.len()
        );
        Ok(ShortestPath {
            path,
            cost,
            expanded,
        })
    }
}
