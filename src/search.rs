//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! that keeps an explicit closed set, breaks ties on the heuristic and can be bounded by an
//! expansion budget. All search state lives in the arena built here and is dropped on return.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Heap entry. Entries may go stale when a cheaper route to the same node is found later; stale
/// entries are skipped when popped because their node has been closed by then.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    heuristic: K,
    index: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key since BinaryHeap pops the greatest element: lowest estimated
        // cost first, then lowest heuristic (closest to the goal), then earliest discovered.
        let by_cost = |a: &K, b: &K| b.partial_cmp(a).unwrap_or(Ordering::Equal);
        by_cost(&self.estimated_cost, &other.estimated_cost)
            .then_with(|| by_cost(&self.heuristic, &other.heuristic))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Book-keeping for a discovered node.
struct SearchNode<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

/// Walks the parent links back from `end` and returns nodes and accumulated costs, start first.
fn reverse_path<N, C>(parents: &FxIndexMap<N, SearchNode<C>>, end: usize) -> (Vec<N>, Vec<C>)
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    let (mut path, mut costs): (Vec<N>, Vec<C>) =
        std::iter::successors(Some(end), |&i| parents.get_index(i).map(|(_, v)| v.parent))
            .map_while(|i| parents.get_index(i))
            .map(|(node, value)| (node.clone(), value.cost))
            .unzip();
    path.reverse();
    costs.reverse();
    (path, costs)
}

/// Runs A* from `start` until `success` holds for a selected node. Returns the path (inclusive
/// on both ends) and the accumulated cost at every node on it, or [None] if the frontier runs
/// dry or `max_expansions` nodes have been expanded without reaching a goal.
///
/// A successor is only (re)recorded on a strict cost improvement, and closed nodes are never
/// reopened; with a consistent heuristic this yields minimum-cost paths.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Option<(Vec<N>, Vec<C>)>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy + Add<Output = C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let h = heuristic(start);
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        heuristic: h,
        index: 0,
    });
    let mut parents: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        SearchNode {
            parent: usize::MAX,
            cost: Zero::zero(),
            closed: false,
        },
    );
    let mut expansions = 0usize;
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        let (cost, successors) = {
            let (node, entry) = parents.get_index_mut(index)?;
            if entry.closed {
                continue;
            }
            if success(node) {
                debug!(
                    "Goal reached after {} expansions, {} nodes discovered",
                    expansions,
                    parents.len()
                );
                return Some(reverse_path(&parents, index));
            }
            if max_expansions.is_some_and(|limit| expansions >= limit) {
                warn!("Search budget of {} expansions exhausted", expansions);
                return None;
            }
            entry.closed = true;
            expansions += 1;
            (entry.cost, successors(node))
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    let known = e.get();
                    if !known.closed && new_cost < known.cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(SearchNode {
                            parent: index,
                            cost: new_cost,
                            closed: false,
                        });
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                heuristic: h,
                index: n,
            });
        }
    }
    debug!(
        "Frontier exhausted after {} expansions without reaching a goal",
        expansions
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes on a line, each connected to its successor.
    fn line(n: i32) -> impl FnMut(&i32) -> Vec<(i32, u32)> {
        move |&x| {
            [x - 1, x + 1]
                .into_iter()
                .filter(|&y| (0..n).contains(&y))
                .map(|y| (y, 1))
                .collect()
        }
    }

    #[test]
    fn finds_path_on_line() {
        let (path, costs) = astar(&0, line(6), |&x| (5 - x) as u32, |&x| x == 5, None).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(costs, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn start_is_goal() {
        let (path, costs) = astar(&3, line(6), |_| 0u32, |&x| x == 3, None).unwrap();
        assert_eq!(path, vec![3]);
        assert_eq!(costs, vec![0]);
    }

    #[test]
    fn unreachable_goal() {
        assert!(astar(&0, line(4), |_| 0u32, |&x| x == 9, None).is_none());
    }

    #[test]
    fn budget_stops_search() {
        assert!(astar(&0, line(10), |_| 0u32, |&x| x == 9, Some(3)).is_none());
        assert!(astar(&0, line(10), |_| 0u32, |&x| x == 9, Some(9)).is_some());
    }

    #[test]
    fn cheaper_detour_replaces_direct_edge() {
        // 0 -> 2 directly costs 10, via 1 it costs 2.
        let graph = |&x: &u8| -> Vec<(u8, f64)> {
            match x {
                0 => vec![(2, 10.0), (1, 1.0)],
                1 => vec![(2, 1.0)],
                _ => vec![],
            }
        };
        let (path, costs) = astar(&0, graph, |_| 0.0, |&x| x == 2, None).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(costs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn ties_prefer_lower_heuristic() {
        let mut h_seen = Vec::new();
        let graph = |&x: &u8| -> Vec<(u8, u32)> {
            match x {
                0 => vec![(1, 1), (2, 2)],
                _ => vec![],
            }
        };
        // Both successors have f = 2, node 2 has the lower heuristic and must be expanded
        // first even though it was discovered second.
        let h = |&x: &u8| match x {
            1 => 1,
            2 => 0,
            _ => 1,
        };
        let result = astar(
            &0,
            graph,
            h,
            |&x| {
                h_seen.push(x);
                false
            },
            None,
        );
        assert!(result.is_none());
        assert_eq!(h_seen, vec![0, 2, 1]);
    }
}
