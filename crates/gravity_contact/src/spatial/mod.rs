//! Spatial indices answering bounded-radius nearest-neighbor queries in 2D.
//!
//! Both implementations share one contract: results are at most `k` points with
//! Euclidean distance `<= max_distance`, sorted by ascending distance with ties
//! broken by insertion order. A query point that is itself indexed comes back
//! with distance 0; filtering it is the caller's job.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use glam::DVec2;

pub mod kd_tree;
pub mod linear_scan;

pub use kd_tree::KdTree;
pub use linear_scan::LinearScanIndex;

/// A single query hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, T> {
    pub payload: &'a T,
    pub distance: f64,
}

/// Trait for read-only point indices built once from a point list.
pub trait SpatialIndex<T> {
    /// Builds the index, taking ownership of the points.
    fn from_points(points: Vec<(DVec2, T)>) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns up to `k` points within `max_distance` of `point`, nearest first.
    fn nearest(&self, point: DVec2, k: usize, max_distance: f64) -> Vec<Neighbor<'_, T>>;
}

/// Indexed point with its insertion order, shared by the index implementations.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub position: DVec2,
    pub order: usize,
    pub payload: T,
}

pub(crate) fn entries_from_points<T>(points: Vec<(DVec2, T)>) -> Vec<Entry<T>> {
    points
        .into_iter()
        .enumerate()
        .map(|(order, (position, payload))| Entry {
            position,
            order,
            payload,
        })
        .collect()
}

/// Whether a query can return anything at all.
#[inline]
pub(crate) fn query_is_satisfiable(k: usize, max_distance: f64) -> bool {
    k > 0 && max_distance >= 0.0
}

/// Candidate hit, ordered by `(distance, order)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub distance: f64,
    pub order: usize,
    pub slot: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.order.cmp(&other.order))
    }
}

/// Bounded max-heap keeping the `k` best candidates seen so far.
pub(crate) struct BestK {
    k: usize,
    heap: BinaryHeap<Candidate>,
}

impl BestK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.min(64)),
        }
    }

    pub fn offer(&mut self, candidate: Candidate) {
        if self.heap.len() < self.k {
            self.heap.push(candidate);
        } else if self.heap.peek().is_some_and(|worst| candidate < *worst) {
            self.heap.pop();
            self.heap.push(candidate);
        }
    }

    /// Largest distance still worth exploring.
    pub fn bound(&self, max_distance: f64) -> f64 {
        if self.heap.len() < self.k {
            return max_distance;
        }
        self.heap.peek().map_or(max_distance, |c| c.distance)
    }

    pub fn into_sorted(self) -> Vec<Candidate> {
        self.heap.into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(distance: f64, order: usize) -> Candidate {
        Candidate {
            distance,
            order,
            slot: order,
        }
    }

    #[test]
    fn candidates_order_by_distance_then_insertion() {
        assert!(candidate(0.1, 5) < candidate(0.2, 0));
        assert!(candidate(0.1, 1) < candidate(0.1, 2));
        assert_eq!(candidate(0.3, 4), candidate(0.3, 4));
    }

    #[test]
    fn best_k_keeps_smallest() {
        let mut best = BestK::new(2);
        best.offer(candidate(3.0, 0));
        best.offer(candidate(1.0, 1));
        assert_eq!(best.bound(10.0), 3.0);
        best.offer(candidate(2.0, 2));
        best.offer(candidate(2.0, 3));
        let kept: Vec<_> = best.into_sorted().iter().map(|c| c.order).collect();
        assert_eq!(kept, [1, 2]);
    }

    #[test]
    fn bound_is_radius_until_full() {
        let mut best = BestK::new(3);
        best.offer(candidate(0.5, 0));
        assert_eq!(best.bound(0.25), 0.25);
    }

    #[test]
    fn unsatisfiable_queries() {
        assert!(!query_is_satisfiable(0, 1.0));
        assert!(!query_is_satisfiable(3, -0.1));
        assert!(!query_is_satisfiable(3, f64::NAN));
        assert!(query_is_satisfiable(1, 0.0));
    }
}
