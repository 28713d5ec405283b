use std::collections::{BinaryHeap, VecDeque};

use crate::bounds::Rect;
use crate::point::Point;
use crate::table::{Candidate, PointTable};

#[derive(Debug)]
struct Node<V> {
    point: Point,
    value: V,
    /// Axis-aligned rectangle bounding every point in this subtree, fixed at
    /// insertion time.
    rect: Rect,
    left: Link<V>,
    right: Link<V>,
}

type Link<V> = Option<Box<Node<V>>>;

/// A point symbol table backed by a 2d-tree.
///
/// The tree recursively partitions its domain by alternating coordinate
/// comparisons: the root splits on x, its children on y, and so on. Each node
/// carries the rectangle it was confined to when inserted, and range and
/// nearest-neighbor queries use those rectangles to skip entire subtrees
/// whose region cannot contain an answer.
///
/// The splitting axis is a function of depth, so it is threaded through the
/// recursive calls as a flag rather than stored per node.
///
/// There is no rebalancing: the shape of the tree is determined entirely by
/// insertion order. Uniformly distributed insertions give an expected height
/// of O(log n); inserting points in sorted coordinate order degrades the
/// tree to a linear chain.
#[derive(Debug)]
pub struct KdTree<V> {
    root: Link<V>,
    bounds: Rect,
    len: usize,
}

impl<V> KdTree<V> {
    /// Creates an empty tree over the unit square `[0, 1] x [0, 1]`.
    pub fn new() -> KdTree<V> {
        KdTree::with_bounds(Rect::unit())
    }

    /// Creates an empty tree over the given domain.
    ///
    /// Points outside the domain are still stored and found by exact lookup,
    /// but the pruning in `range`, `nearest` and `nearest_k` assumes every
    /// stored point lies inside the domain.
    pub fn with_bounds(bounds: Rect) -> KdTree<V> {
        KdTree {
            root: None,
            bounds,
            len: 0,
        }
    }

    /// Returns the domain rectangle the partition is rooted at.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single node.
    ///
    /// Diagnostic for the no-rebalancing behavior; sorted insertion order
    /// makes this equal to `len()`.
    pub fn height(&self) -> usize {
        fn node_height<V>(link: &Link<V>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + node_height(&node.left).max(node_height(&node.right)),
            }
        }
        node_height(&self.root)
    }

    fn put_node(link: &mut Link<V>, p: Point, value: V, rect: Rect, by_x: bool, len: &mut usize) {
        let Some(node) = link else {
            *link = Some(Box::new(Node {
                point: p,
                value,
                rect,
                left: None,
                right: None,
            }));
            *len += 1;
            return;
        };
        if node.point == p {
            node.value = value;
            return;
        }
        let go_left = if by_x {
            p.x() < node.point.x()
        } else {
            p.y() < node.point.y()
        };
        if go_left {
            let sub = node.rect.split_left(by_x, node.point);
            Self::put_node(&mut node.left, p, value, sub, !by_x, len);
        } else {
            let sub = node.rect.split_right(by_x, node.point);
            Self::put_node(&mut node.right, p, value, sub, !by_x, len);
        }
    }

    fn range_node<'a>(link: &'a Link<V>, rect: &Rect, out: &mut Vec<Point>) {
        let Some(node) = link else { return };
        // A subtree whose rectangle misses the query cannot hold a match.
        if !node.rect.intersects(rect) {
            return;
        }
        if rect.contains(node.point) {
            out.push(node.point);
        }
        Self::range_node(&node.left, rect, out);
        Self::range_node(&node.right, rect, out);
    }

    fn nearest_node(link: &Link<V>, p: Point, by_x: bool, best: &mut Option<Candidate>) {
        let Some(node) = link else { return };
        // A subtree cannot beat the champion if even its bounding rectangle
        // is farther away.
        if let Some(b) = best {
            if node.rect.distance_squared_to(p) >= b.dist_sq {
                return;
            }
        }
        if node.point != p {
            let dist_sq = node.point.distance_squared_to(p);
            if best.is_none_or(|b| dist_sq < b.dist_sq) {
                *best = Some(Candidate {
                    dist_sq,
                    point: node.point,
                });
            }
        }
        // Descend the half-plane containing the query first; the entry check
        // above then usually rules out the other side.
        let toward_left = if by_x {
            p.x() < node.point.x()
        } else {
            p.y() < node.point.y()
        };
        let (first, second) = if toward_left {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };
        Self::nearest_node(first, p, !by_x, best);
        Self::nearest_node(second, p, !by_x, best);
    }

    fn nearest_k_node(
        link: &Link<V>,
        p: Point,
        k: usize,
        by_x: bool,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        let Some(node) = link else { return };
        if heap.len() >= k {
            if let Some(worst) = heap.peek() {
                if node.rect.distance_squared_to(p) >= worst.dist_sq {
                    return;
                }
            }
        }
        if node.point != p {
            let dist_sq = node.point.distance_squared_to(p);
            if heap.len() < k {
                heap.push(Candidate {
                    dist_sq,
                    point: node.point,
                });
            } else if let Some(worst) = heap.peek() {
                if dist_sq < worst.dist_sq {
                    heap.pop();
                    heap.push(Candidate {
                        dist_sq,
                        point: node.point,
                    });
                }
            }
        }
        let toward_left = if by_x {
            p.x() < node.point.x()
        } else {
            p.y() < node.point.y()
        };
        let (first, second) = if toward_left {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };
        Self::nearest_k_node(first, p, k, !by_x, heap);
        Self::nearest_k_node(second, p, k, !by_x, heap);
    }
}

impl<V> Default for KdTree<V> {
    fn default() -> KdTree<V> {
        KdTree::new()
    }
}

impl<V> PointTable<V> for KdTree<V> {
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, p: Point, value: V) {
        let bounds = self.bounds;
        Self::put_node(&mut self.root, p, value, bounds, true, &mut self.len);
    }

    fn get(&self, p: Point) -> Option<&V> {
        let mut link = self.root.as_deref();
        let mut by_x = true;
        while let Some(node) = link {
            if node.point == p {
                return Some(&node.value);
            }
            let go_left = if by_x {
                p.x() < node.point.x()
            } else {
                p.y() < node.point.y()
            };
            link = if go_left {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            by_x = !by_x;
        }
        None
    }

    fn points(&self) -> Vec<Point> {
        // Breadth-first walk; any complete traversal satisfies the contract.
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<V>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(node.point);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut out = Vec::new();
        Self::range_node(&self.root, rect, &mut out);
        out
    }

    fn nearest(&self, p: Point) -> Option<Point> {
        let mut best: Option<Candidate> = None;
        Self::nearest_node(&self.root, p, true, &mut best);
        best.map(|b| b.point)
    }

    fn nearest_k(&self, p: Point, k: usize) -> Vec<Point> {
        if k == 0 {
            return Vec::new();
        }
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
        Self::nearest_k_node(&self.root, p, k, true, &mut heap);
        heap.into_sorted_vec().into_iter().map(|c| c.point).collect()
    }
}
