use std::fmt;

use crate::error::{Error, Result};
use crate::point::Point;

/// An immutable axis-aligned rectangle with closed bounds.
///
/// Both containment and intersection treat the edges as part of the
/// rectangle, so a point exactly on a boundary counts as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// Creates a new rectangle from its corner coordinates.
    ///
    /// Requires finite coordinates with `xmin <= xmax` and `ymin <= ymax`.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Rect> {
        if !xmin.is_finite() || !ymin.is_finite() || !xmax.is_finite() || !ymax.is_finite() {
            return Err(Error::InvalidArgument("rectangle bounds must be finite"));
        }
        if xmin > xmax || ymin > ymax {
            return Err(Error::InvalidArgument(
                "rectangle requires xmin <= xmax and ymin <= ymax",
            ));
        }
        Ok(Rect {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// The unit square `[0, 1] x [0, 1]`, the default 2d-tree domain.
    pub fn unit() -> Rect {
        Rect {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 1.0,
            ymax: 1.0,
        }
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Checks whether the point lies inside the rectangle (closed bounds).
    pub fn contains(&self, p: Point) -> bool {
        p.x() >= self.xmin && p.x() <= self.xmax && p.y() >= self.ymin && p.y() <= self.ymax
    }

    /// Checks whether the two rectangles overlap, edge contact included.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Squared distance from the point to the nearest edge or corner of the
    /// rectangle, or zero if the point is inside.
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = if p.x() < self.xmin {
            self.xmin - p.x()
        } else if p.x() > self.xmax {
            p.x() - self.xmax
        } else {
            0.0
        };
        let dy = if p.y() < self.ymin {
            self.ymin - p.y()
        } else if p.y() > self.ymax {
            p.y() - self.ymax
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// The sub-rectangle on the lesser side of the splitting line through
    /// `at`: max x clipped when splitting on x, max y clipped otherwise.
    ///
    /// Unchecked on purpose: when `at` lies inside `self` the result is
    /// always valid, and tree insertion never calls it otherwise.
    pub(crate) fn split_left(&self, by_x: bool, at: Point) -> Rect {
        if by_x {
            Rect {
                xmin: self.xmin,
                ymin: self.ymin,
                xmax: at.x(),
                ymax: self.ymax,
            }
        } else {
            Rect {
                xmin: self.xmin,
                ymin: self.ymin,
                xmax: self.xmax,
                ymax: at.y(),
            }
        }
    }

    /// The sub-rectangle on the greater-or-equal side of the splitting line
    /// through `at`.
    pub(crate) fn split_right(&self, by_x: bool, at: Point) -> Rect {
        if by_x {
            Rect {
                xmin: at.x(),
                ymin: self.ymin,
                xmax: self.xmax,
                ymax: self.ymax,
            }
        } else {
            Rect {
                xmin: self.xmin,
                ymin: at.y(),
                xmax: self.xmax,
                ymax: self.ymax,
            }
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
