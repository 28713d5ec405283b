use wasm_bindgen::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::Rect;
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::table::PointTable;

/// WASM wrapper for the 2d-tree point symbol table.
///
/// Values are `u32` handles chosen by the caller (typically indices into a
/// JS-side array). Coordinates cross the boundary as flat `f64` arrays in
/// `[x, y, x, y, ...]` layout.
#[wasm_bindgen(js_name = PointTable)]
pub struct PointTableWasm {
    inner: KdTree<u32>,
}

#[wasm_bindgen(js_class = PointTable)]
impl PointTableWasm {
    /// Creates an empty table over the unit square.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PointTableWasm {
        PointTableWasm {
            inner: KdTree::new(),
        }
    }

    /// Creates an empty table over the given domain rectangle.
    #[wasm_bindgen(js_name = withBounds)]
    pub fn with_bounds(
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    ) -> Result<PointTableWasm, JsValue> {
        let bounds =
            Rect::new(xmin, ymin, xmax, ymax).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(PointTableWasm {
            inner: KdTree::with_bounds(bounds),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts a point with a value, overwriting on an exact duplicate.
    pub fn put(&mut self, x: f64, y: f64, value: u32) -> Result<(), JsValue> {
        let p = Point::new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.put(p, value);
        Ok(())
    }

    /// Returns the value stored at the exact point, or `undefined`.
    pub fn get(&self, x: f64, y: f64) -> Result<Option<u32>, JsValue> {
        let p = Point::new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.inner.get(p).copied())
    }

    pub fn contains(&self, x: f64, y: f64) -> Result<bool, JsValue> {
        let p = Point::new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.inner.contains(p))
    }

    /// Returns every stored point as flat coordinates.
    pub fn points(&self) -> Vec<f64> {
        flatten(&self.inner.points())
    }

    /// Returns the points inside the rectangle (closed bounds) as flat
    /// coordinates.
    pub fn range(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Vec<f64>, JsValue> {
        let rect =
            Rect::new(xmin, ymin, xmax, ymax).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(flatten(&self.inner.range(&rect)))
    }

    /// Returns `[x, y]` of the stored point closest to the query, excluding
    /// the query point itself, or an empty array.
    pub fn nearest(&self, x: f64, y: f64) -> Result<Vec<f64>, JsValue> {
        let p = Point::new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(match self.inner.nearest(p) {
            Some(q) => vec![q.x(), q.y()],
            None => Vec::new(),
        })
    }

    /// Returns up to `k` closest stored points, closest first, as flat
    /// coordinates.
    #[wasm_bindgen(js_name = nearestK)]
    pub fn nearest_k(&self, x: f64, y: f64, k: usize) -> Result<Vec<f64>, JsValue> {
        let p = Point::new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(flatten(&self.inner.nearest_k(p, k)))
    }

    /// Fills the table with `count` random points inside its domain, valued
    /// by insertion index.
    #[wasm_bindgen(js_name = randomPoints)]
    pub fn random_points(&mut self, count: usize) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let bounds = self.inner.bounds();
        for i in 0..count {
            let x = rng.gen_range(bounds.xmin()..=bounds.xmax());
            let y = rng.gen_range(bounds.ymin()..=bounds.ymax());
            // Coordinates drawn from finite bounds are always finite.
            if let Ok(p) = Point::new(x, y) {
                self.inner.put(p, i as u32);
            }
        }
    }
}

impl Default for PointTableWasm {
    fn default() -> PointTableWasm {
        PointTableWasm::new()
    }
}

fn flatten(points: &[Point]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x());
        out.push(p.y());
    }
    out
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
