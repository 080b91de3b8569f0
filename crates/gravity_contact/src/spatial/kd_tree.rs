//! Balanced 2D k-d tree stored implicitly in a flat array.
//!
//! Each sub-slice `[lo, hi)` has its splitting point at `lo + (hi - lo) / 2`.
//! Even depths split on `x`, odd depths on `y`.
use std::cmp::Ordering;

use glam::DVec2;

use crate::spatial::{
    entries_from_points, query_is_satisfiable, BestK, Candidate, Entry, Neighbor, SpatialIndex,
};

/// Static k-d tree over 2D points carrying a payload each.
#[derive(Debug, Clone)]
pub struct KdTree<T> {
    entries: Vec<Entry<T>>,
}

#[inline]
fn axis_value(p: DVec2, depth: usize) -> f64 {
    if depth % 2 == 0 {
        p.x
    } else {
        p.y
    }
}

#[inline]
fn mid_of(lo: usize, hi: usize) -> usize {
    lo + (hi - lo) / 2
}

fn build<T>(entries: &mut [Entry<T>], depth: usize) {
    if entries.len() <= 1 {
        return;
    }

    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |a, b| compare_on_axis(a, b, depth));

    let (left, rest) = entries.split_at_mut(mid);
    build(left, depth + 1);
    build(&mut rest[1..], depth + 1);
}

fn compare_on_axis<T>(a: &Entry<T>, b: &Entry<T>, depth: usize) -> Ordering {
    axis_value(a.position, depth)
        .total_cmp(&axis_value(b.position, depth))
        .then(a.order.cmp(&b.order))
}

impl<T> KdTree<T> {
    /// Builds a balanced tree. Point order is remembered for tie-breaking.
    pub fn new(points: Vec<(DVec2, T)>) -> Self {
        let mut entries = entries_from_points(points);
        build(&mut entries, 0);
        Self { entries }
    }

    fn search(
        &self,
        lo: usize,
        hi: usize,
        depth: usize,
        point: DVec2,
        max_distance: f64,
        best: &mut BestK,
    ) {
        if lo >= hi {
            return;
        }

        let mid = mid_of(lo, hi);
        let entry = &self.entries[mid];

        let distance = entry.position.distance(point);
        if distance <= max_distance {
            best.offer(Candidate {
                distance,
                order: entry.order,
                slot: mid,
            });
        }

        let delta = axis_value(point, depth) - axis_value(entry.position, depth);
        let (near, far) = if delta <= 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };

        self.search(near.0, near.1, depth + 1, point, max_distance, best);

        // Points across the plane are at least |delta| away.
        if delta.abs() <= best.bound(max_distance) {
            self.search(far.0, far.1, depth + 1, point, max_distance, best);
        }
    }
}

impl<T> SpatialIndex<T> for KdTree<T> {
    fn from_points(points: Vec<(DVec2, T)>) -> Self {
        Self::new(points)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn nearest(&self, point: DVec2, k: usize, max_distance: f64) -> Vec<Neighbor<'_, T>> {
        if !query_is_satisfiable(k, max_distance) || self.entries.is_empty() {
            return Vec::new();
        }

        let mut best = BestK::new(k);
        self.search(0, self.entries.len(), 0, point, max_distance, &mut best);

        best.into_sorted()
            .into_iter()
            .map(|c| Neighbor {
                payload: &self.entries[c.slot].payload,
                distance: c.distance,
            })
            .collect()
    }
}
