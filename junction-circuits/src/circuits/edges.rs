//! Pairwise connections between junction boxes

use super::point::Point;
use itertools::Itertools;

/// A candidate connection between two boxes, `source < target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    distance: f64,
}

impl Edge {
    /// Smaller endpoint index
    pub fn source(&self) -> usize {
        self.source
    }

    /// Larger endpoint index
    pub fn target(&self) -> usize {
        self.target
    }

    /// Straight-line length of the connection
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

/// Every unordered pair of `points`, shortest connection first.
///
/// Pairs are generated as `(i, j)` with `i < j`, `i` in the outer loop, then
/// stable-sorted by distance so equal lengths keep that order.
pub fn connection_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..points.len())
        .tuple_combinations()
        .map(|(source, target)| Edge {
            source,
            target,
            distance: points[source].distance_to(&points[target]),
        })
        .collect();

    edges.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    edges
}
