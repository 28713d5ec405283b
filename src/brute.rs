use std::collections::{BTreeMap, BinaryHeap};

use crate::bounds::Rect;
use crate::point::Point;
use crate::table::{Candidate, PointTable};

/// The brute-force point symbol table.
///
/// Wraps an ordered map keyed by point; every spatial query is a linear scan
/// over the keys. It serves as the reference implementation the 2d-tree is
/// checked against, and is perfectly adequate for small tables.
#[derive(Debug, Default)]
pub struct BruteTable<V> {
    map: BTreeMap<Point, V>,
}

impl<V> BruteTable<V> {
    /// Creates an empty table.
    pub fn new() -> BruteTable<V> {
        BruteTable {
            map: BTreeMap::new(),
        }
    }
}

impl<V> PointTable<V> for BruteTable<V> {
    fn len(&self) -> usize {
        self.map.len()
    }

    fn put(&mut self, p: Point, value: V) {
        self.map.insert(p, value);
    }

    fn get(&self, p: Point) -> Option<&V> {
        self.map.get(&p)
    }

    fn points(&self) -> Vec<Point> {
        self.map.keys().copied().collect()
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        self.map
            .keys()
            .copied()
            .filter(|&q| rect.contains(q))
            .collect()
    }

    fn nearest(&self, p: Point) -> Option<Point> {
        let mut best: Option<Candidate> = None;
        for &q in self.map.keys() {
            if q == p {
                continue;
            }
            let dist_sq = q.distance_squared_to(p);
            if best.is_none_or(|b| dist_sq < b.dist_sq) {
                best = Some(Candidate { dist_sq, point: q });
            }
        }
        best.map(|b| b.point)
    }

    fn nearest_k(&self, p: Point, k: usize) -> Vec<Point> {
        if k == 0 {
            return Vec::new();
        }
        // Farthest candidate on top; evict it whenever the heap overflows k.
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
        for &q in self.map.keys() {
            if q == p {
                continue;
            }
            let dist_sq = q.distance_squared_to(p);
            if heap.len() < k {
                heap.push(Candidate { dist_sq, point: q });
            } else if let Some(worst) = heap.peek() {
                if dist_sq < worst.dist_sq {
                    heap.pop();
                    heap.push(Candidate { dist_sq, point: q });
                }
            }
        }
        heap.into_sorted_vec().into_iter().map(|c| c.point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn test_points_iterate_in_coordinate_order() {
        let mut table = BruteTable::new();
        table.put(pt(0.9, 0.1), 0);
        table.put(pt(0.2, 0.8), 1);
        table.put(pt(0.5, 0.1), 2);

        // Map order is y-major, independent of insertion order.
        assert_eq!(table.points(), vec![pt(0.5, 0.1), pt(0.9, 0.1), pt(0.2, 0.8)]);
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let mut table = BruteTable::new();
        table.put(pt(0.5, 0.5), "a");
        table.put(pt(0.5, 0.5), "b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(pt(0.5, 0.5)), Some(&"b"));
    }
}
