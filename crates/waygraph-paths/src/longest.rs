//! Longest simple path by exhaustive backtracking.
//!
//! Finding the longest simple path is NP-hard, so this enumerates every
//! simple path out of the start. Use [`Limits`] to bound it on anything but
//! small graphs.

use crate::limits::Limits;
use crate::outcome::{LongestPath, SearchError};
use crate::search::{Frame, PathSearch, endpoints};
use crate::traits::WeightedPather;

impl PathSearch {
    /// Find the most expensive simple path from `start` to `goal`.
    ///
    /// Every simple path leaving `start` is explored depth-first with an
    /// explicit stack; a path that reaches the goal is recorded when its
    /// cost is strictly greater than the best so far, so among equally
    /// expensive paths the first one found (following edge insertion order)
    /// wins.
    pub fn longest_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
    ) -> Result<LongestPath<P::Key>, SearchError> {
        self.longest_path_with(pather, start, goal, &Limits::none())
    }

    /// [`longest_path`](Self::longest_path) bounded by `limits`, which are
    /// checked once per vertex visit.
    pub fn longest_path_with<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: &P::Key,
        goal: &P::Key,
        limits: &Limits,
    ) -> Result<LongestPath<P::Key>, SearchError> {
        let (s, t) = endpoints(pather, start, goal)?;

        let Self {
            on_path,
            frames,
            current,
            best,
            ..
        } = self;
        on_path.clear();
        on_path.resize(pather.vertex_count(), false);
        frames.clear();
        current.clear();
        best.clear();

        let mut best_cost = f64::NEG_INFINITY;
        let mut found = false;

        limits.check(0)?;
        let mut explored = 1;
        current.push(s);
        if s == t {
            best.extend_from_slice(current.as_slice());
            best_cost = 0.0;
            found = true;
        } else {
            on_path[s.index()] = true;
            frames.push(Frame {
                v: s,
                next_edge: 0,
                cost: 0.0,
            });
        }

        while let Some(frame) = frames.last_mut() {
            let edges = pather.edges(frame.v);
            let Some(e) = edges.get(frame.next_edge).copied() else {
                // Exhausted: backtrack.
                on_path[frame.v.index()] = false;
                current.pop();
                frames.pop();
                continue;
            };
            frame.next_edge += 1;
            if on_path[e.to.index()] {
                continue;
            }

            let cost = frame.cost + e.weight;
            limits.check(explored)?;
            explored += 1;

            if e.to == t {
                // A simple path cannot pass through the goal and come back
                // to it, so the goal is always a leaf.
                if !found || cost > best_cost {
                    best.clear();
                    best.extend_from_slice(current.as_slice());
                    best.push(t);
                    best_cost = cost;
                    found = true;
                    log::trace!("longest_path: new best {cost} over {} vertices", best.len());
                }
                continue;
            }

            on_path[e.to.index()] = true;
            current.push(e.to);
            frames.push(Frame {
                v: e.to,
                next_edge: 0,
                cost,
            });
        }

        if !found {
            log::debug!("longest_path: goal unreachable, {explored} visits");
            return Err(SearchError::Unreachable { expanded: explored });
        }

        let path = best.iter().map(|&v| pather.key(v).clone()).collect();
        log::debug!(
            "longest_path: {} vertices, cost {best_cost}, {explored} visits",
            best.len()
        );
        Ok(LongestPath {
            path,
            cost: best_cost,
            explored,
        })
    }
}
