//! Builds a table from points on stdin and prints query diagnostics.
//!
//! Usage: point_queries <qx> <qy> <k> < points.txt
//!
//! The input is whitespace-separated coordinate pairs; each point is stored
//! with its insertion index as the value.

use std::error::Error;
use std::io::Read;

use kdtwo::{KdTree, Point, PointTable, Rect};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <qx> <qy> <k>", args[0]);
        std::process::exit(1);
    }
    let qx: f64 = args[1].parse()?;
    let qy: f64 = args[2].parse()?;
    let k: usize = args[3].parse()?;
    let query = Point::new(qx, qy)?;
    let rect = Rect::new(-1.0, -1.0, 1.0, 1.0)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let coords: Vec<f64> = input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    if coords.len() % 2 != 0 {
        return Err("expected an even number of coordinates".into());
    }

    let mut table = KdTree::with_bounds(rect);
    for (i, pair) in coords.chunks(2).enumerate() {
        table.put(Point::new(pair[0], pair[1])?, i as u32);
    }

    println!("table.is_empty()? {}", table.is_empty());
    println!("table.len() = {}", table.len());
    println!("table.contains({query})? {}", table.contains(query));
    println!("table.range({rect}):");
    for p in table.range(&rect) {
        println!("  {p}");
    }
    match table.nearest(query) {
        Some(p) => println!("table.nearest({query}) = {p}"),
        None => println!("table.nearest({query}) = none"),
    }
    println!("table.nearest_k({query}, {k}):");
    for p in table.nearest_k(query, k) {
        println!("  {p}");
    }

    Ok(())
}
