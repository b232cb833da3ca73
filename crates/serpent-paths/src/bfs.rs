use std::collections::{HashMap, VecDeque};

use serpent_core::Point;

use crate::traits::Pather;

/// Breadth-first shortest distance from `from` to `to`, in steps.
///
/// Every step costs 1. Returns `None` when `to` cannot be reached.
pub fn bfs_distance<P: Pather>(pather: &P, from: Point, to: Point) -> Option<i32> {
    let mut dist: HashMap<Point, i32> = HashMap::from([(from, 0)]);
    let mut queue = VecDeque::from([from]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        let current_dist = dist[&cp];
        if cp == to {
            return Some(current_dist);
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, current_dist + 1);
            queue.push_back(np);
        }
    }

    None
}
