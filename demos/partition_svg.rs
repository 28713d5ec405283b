//! Renders a random point cloud with a range query and a nearest-neighbor
//! query as an SVG.

use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kdtwo::{KdTree, Point, PointTable, Rect};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(2026);
    let mut table = KdTree::new();
    for i in 0..500u32 {
        let p = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))?;
        table.put(p, i);
    }

    let rect = Rect::new(0.2, 0.55, 0.5, 0.9)?;
    let in_range = table.range(&rect);
    let query = Point::new(0.7, 0.3)?;
    let neighbors = table.nearest_k(query, 10);

    let root = SVGBackend::new("point_partition.svg", (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    // All stored points.
    chart.draw_series(
        table
            .points()
            .into_iter()
            .map(|p| Circle::new((p.x(), p.y()), 3, BLACK.filled())),
    )?;

    // The query rectangle and its matches.
    chart.draw_series(std::iter::once(Rectangle::new(
        [(rect.xmin(), rect.ymin()), (rect.xmax(), rect.ymax())],
        BLUE.mix(0.2).filled(),
    )))?;
    chart.draw_series(
        in_range
            .into_iter()
            .map(|p| Circle::new((p.x(), p.y()), 4, BLUE.filled())),
    )?;

    // The nearest-neighbor query and its k winners.
    chart.draw_series(std::iter::once(Circle::new(
        (query.x(), query.y()),
        5,
        RED.filled(),
    )))?;
    chart.draw_series(
        neighbors
            .into_iter()
            .map(|p| Circle::new((p.x(), p.y()), 4, RED.mix(0.5).filled())),
    )?;

    root.present()?;
    println!("wrote point_partition.svg");
    Ok(())
}
