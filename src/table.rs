use std::cmp::Ordering;

use crate::bounds::Rect;
use crate::point::Point;

/// A symbol table keyed by points in the plane.
///
/// This trait is the shared contract between the two implementations:
/// [`BruteTable`](crate::BruteTable), which scans an ordered map, and
/// [`KdTree`](crate::KdTree), which prunes a binary space partition.
/// Consumers generic over `PointTable` can swap one for the other, and the
/// test suite runs the same property checks against both.
pub trait PointTable<V> {
    /// Returns the number of distinct points stored.
    fn len(&self) -> usize;

    /// Returns `true` if the table holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the point with the given value, overwriting the value if the
    /// exact point is already stored.
    fn put(&mut self, p: Point, value: V);

    /// Returns the value stored for the point, or `None`.
    fn get(&self, p: Point) -> Option<&V>;

    /// Returns `true` if the exact point is stored.
    fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Returns every stored point exactly once. The order is not part of the
    /// contract.
    fn points(&self) -> Vec<Point>;

    /// Returns the stored points inside the rectangle, boundary included.
    fn range(&self, rect: &Rect) -> Vec<Point>;

    /// Returns the stored point closest to `p`, excluding `p` itself, or
    /// `None` if no other point is stored. Ties are broken deterministically
    /// but arbitrarily.
    fn nearest(&self, p: Point) -> Option<Point>;

    /// Returns up to `k` stored points closest to `p`, excluding `p` itself,
    /// sorted closest-first. Fewer than `k` are returned if the table holds
    /// fewer than `k` other points.
    fn nearest_k(&self, p: Point, k: usize) -> Vec<Point>;
}

/// A point paired with its squared distance to the current query.
///
/// Ordered by distance with the point order as tie-break, so a
/// `BinaryHeap<Candidate>` keeps the farthest candidate on top. Both
/// k-nearest implementations bound such a heap to `k` entries and evict the
/// top whenever it overflows.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub dist_sq: f64,
    pub point: Point,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Candidate) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Candidate) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then_with(|| self.point.cmp(&other.point))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Candidate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
