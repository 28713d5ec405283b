use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// An immutable point in the plane.
///
/// Equality is exact coordinate equality, with no tolerance. Construction
/// rejects non-finite coordinates, which is what makes the total order below
/// (`y`, then `x`, via `total_cmp`) agree with `PartialEq` and allows points
/// to key an ordered map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point from finite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Point> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidArgument("point coordinates must be finite"));
        }
        Ok(Point { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// All comparisons in the crate are done on squared distances to avoid
    /// the square root.
    pub fn distance_squared_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

// Coordinates are finite by construction, so equality is reflexive.
impl Eq for Point {}

impl Ord for Point {
    fn cmp(&self, other: &Point) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
