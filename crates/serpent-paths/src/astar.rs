use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serpent_core::Point;

use crate::board::Board;
use crate::traits::AstarPather;

/// One search record. Lives only for the duration of one search; nodes are
/// stored in a per-call arena and refer to their predecessor by index.
struct SearchNode {
    pos: Point,
    g: i32,
    h: i32,
    parent: Option<usize>,
}

impl SearchNode {
    #[inline]
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Open-set entry, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest route for a snake whose head is at `start` toward `goal` on a
/// `width × height` board.
///
/// `body` is the snake, head first. Every segment except the tail blocks the
/// search. The returned path excludes `start` and ends at `goal`; it is empty
/// when the goal cannot be reached.
pub fn find_path(
    start: Point,
    goal: Point,
    body: &[Point],
    width: i32,
    height: i32,
) -> Vec<Point> {
    let view = Board::new(width, height).snake_view(body);
    astar_path(&view, start, goal)
}

/// A* search from `from` to `to` over any [`AstarPather`].
///
/// Returns the path from the step after `from` up to and including `to`, or
/// an empty path when `to` is unreachable (or equal to `from`).
///
/// Improved routes to a cell already in the open set are pushed as new
/// entries; the outdated ones are dropped when popped, since by then the
/// cell has been closed through the cheaper entry.
pub fn astar_path<P: AstarPather>(pather: &P, from: Point, to: Point) -> Vec<Point> {
    let mut nodes = vec![SearchNode {
        pos: from,
        g: 0,
        h: pather.estimate(from, to),
        parent: None,
    }];
    let mut best: HashMap<Point, usize> = HashMap::from([(from, 0)]);
    let mut closed: HashSet<Point> = HashSet::new();
    let mut open = BinaryHeap::from([OpenEntry {
        f: nodes[0].f(),
        node: 0,
    }]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(OpenEntry { node: ci, .. }) = open.pop() {
        let current = nodes[ci].pos;

        // Stale entry for a cell already finalized.
        if !closed.insert(current) {
            continue;
        }

        if current == to {
            let path = reconstruct(&nodes, ci);
            log::trace!(
                "astar {from} -> {to}: {} steps, {} closed",
                path.len(),
                closed.len()
            );
            return path;
        }

        let current_g = nodes[ci].g;
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            let tentative_g = current_g + pather.cost(current, np);
            let ni = nodes.len();
            match best.entry(np) {
                Entry::Occupied(mut e) => {
                    if tentative_g >= nodes[*e.get()].g {
                        continue;
                    }
                    e.insert(ni);
                }
                Entry::Vacant(e) => {
                    e.insert(ni);
                }
            }
            nodes.push(SearchNode {
                pos: np,
                g: tentative_g,
                h: pather.estimate(np, to),
                parent: Some(ci),
            });
            open.push(OpenEntry {
                f: nodes[ni].f(),
                node: ni,
            });
        }
    }

    log::trace!("astar {from} -> {to}: unreachable, {} closed", closed.len());
    Vec::new()
}

/// Walk predecessor links back to (but not including) the start node.
fn reconstruct(nodes: &[SearchNode], goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal;
    while let Some(parent) = nodes[ci].parent {
        path.push(nodes[ci].pos);
        ci = parent;
    }
    path.reverse();
    path
}
