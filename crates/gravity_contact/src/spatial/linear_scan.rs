//! Brute-force index that checks every point on each query.
use glam::DVec2;

use crate::spatial::{
    entries_from_points, query_is_satisfiable, BestK, Candidate, Entry, Neighbor, SpatialIndex,
};

/// O(n) per query. Useful for tiny populations and as a reference for [`crate::spatial::KdTree`].
#[derive(Debug, Clone)]
pub struct LinearScanIndex<T> {
    entries: Vec<Entry<T>>,
}

impl<T> LinearScanIndex<T> {
    pub fn new(points: Vec<(DVec2, T)>) -> Self {
        Self {
            entries: entries_from_points(points),
        }
    }
}

impl<T> SpatialIndex<T> for LinearScanIndex<T> {
    fn from_points(points: Vec<(DVec2, T)>) -> Self {
        Self::new(points)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn nearest(&self, point: DVec2, k: usize, max_distance: f64) -> Vec<Neighbor<'_, T>> {
        if !query_is_satisfiable(k, max_distance) {
            return Vec::new();
        }

        let mut best = BestK::new(k);
        for (slot, entry) in self.entries.iter().enumerate() {
            let distance = entry.position.distance(point);
            if distance <= max_distance {
                best.offer(Candidate {
                    distance,
                    order: entry.order,
                    slot,
                });
            }
        }

        best.into_sorted()
            .into_iter()
            .map(|c| Neighbor {
                payload: &self.entries[c.slot].payload,
                distance: c.distance,
            })
            .collect()
    }
}
