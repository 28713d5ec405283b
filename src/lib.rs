//! # kdtwo
//!
//! `kdtwo` is a Rust library for 2D point symbol tables, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). It maps points in the plane to values
//! and answers exact lookups, axis-aligned rectangular range queries, and
//! (k-)nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Two interchangeable implementations**: a brute-force ordered-map table and a
//!   2d-tree, both behind the [`PointTable`] trait so they can be swapped and
//!   cross-checked.
//! - **Geometric pruning**: the 2d-tree tracks an axis-aligned bounding rectangle per
//!   node and skips whole subtrees during range and nearest-neighbor search.
//! - **WASM-first**: built with `wasm-bindgen` for seamless integration with
//!   JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use kdtwo::{KdTree, Point, PointTable, Rect};
//!
//! let mut table = KdTree::new();
//! table.put(Point::new(0.5, 0.5)?, "center");
//! table.put(Point::new(0.2, 0.8)?, "upper left");
//! table.put(Point::new(0.9, 0.1)?, "lower right");
//!
//! let rect = Rect::new(0.0, 0.4, 0.6, 1.0)?;
//! assert_eq!(table.range(&rect).len(), 2);
//!
//! let query = Point::new(0.5, 0.6)?;
//! assert_eq!(table.nearest(query), Some(Point::new(0.5, 0.5)?));
//! # Ok::<(), kdtwo::Error>(())
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`PointTable`] trait, implemented by
//! [`KdTree`] and [`BruteTable`].

mod bounds;
mod brute;
mod error;
mod kdtree;
mod point;
mod table;
mod wasm;

pub use bounds::Rect;
pub use brute::BruteTable;
pub use error::Error;
pub use error::Result;
pub use kdtree::KdTree;
pub use point::Point;
pub use table::PointTable;
pub use wasm::PointTableWasm;
