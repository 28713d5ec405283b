use kdtwo::{BruteTable, KdTree, Point, PointTable, Rect};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort();
    points
}

fn check_full_domain_round_trip(table: &mut impl PointTable<u32>) {
    let inserted = [
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        pt(0.5, 0.5),
        pt(0.0, 1.0),
        pt(1.0, 0.0),
        pt(0.25, 0.75),
    ];
    for (i, &p) in inserted.iter().enumerate() {
        table.put(p, i as u32);
    }

    // The unit square is the whole domain: everything comes back.
    let mut expected = inserted.to_vec();
    expected.sort();
    assert_eq!(sorted(table.range(&Rect::unit())), expected);
}

fn check_boundary_points_included(table: &mut impl PointTable<u32>) {
    let rect = Rect::new(0.25, 0.25, 0.75, 0.75).unwrap();
    table.put(pt(0.25, 0.5), 0); // left edge
    table.put(pt(0.75, 0.5), 1); // right edge
    table.put(pt(0.5, 0.25), 2); // bottom edge
    table.put(pt(0.5, 0.75), 3); // top edge
    table.put(pt(0.25, 0.25), 4); // corner
    table.put(pt(0.5, 0.5), 5); // interior
    table.put(pt(0.2, 0.2), 6); // outside
    table.put(pt(0.76, 0.5), 7); // just outside

    let found = table.range(&rect);
    assert_eq!(found.len(), 6);
    assert!(!found.contains(&pt(0.2, 0.2)));
    assert!(!found.contains(&pt(0.76, 0.5)));
}

fn check_disjoint_rect_is_empty(table: &mut impl PointTable<u32>) {
    table.put(pt(0.1, 0.1), 0);
    table.put(pt(0.2, 0.3), 1);
    table.put(pt(0.4, 0.2), 2);

    let rect = Rect::new(0.6, 0.6, 0.9, 0.9).unwrap();
    assert!(table.range(&rect).is_empty());
}

fn check_degenerate_rect(table: &mut impl PointTable<u32>) {
    // A zero-width rectangle is a vertical segment; points exactly on the
    // line are inside it.
    table.put(pt(0.5, 0.2), 0);
    table.put(pt(0.5, 0.6), 1);
    table.put(pt(0.5, 0.9), 2);
    table.put(pt(0.4, 0.5), 3);

    let segment = Rect::new(0.5, 0.0, 0.5, 0.7).unwrap();
    assert_eq!(
        sorted(table.range(&segment)),
        vec![pt(0.5, 0.2), pt(0.5, 0.6)]
    );

    // A zero-area rectangle is a single point.
    let dot = Rect::new(0.4, 0.5, 0.4, 0.5).unwrap();
    assert_eq!(table.range(&dot), vec![pt(0.4, 0.5)]);
}

#[test]
fn test_full_domain_round_trip_brute() {
    check_full_domain_round_trip(&mut BruteTable::new());
}

#[test]
fn test_full_domain_round_trip_kdtree() {
    check_full_domain_round_trip(&mut KdTree::new());
}

#[test]
fn test_boundary_points_included_brute() {
    check_boundary_points_included(&mut BruteTable::new());
}

#[test]
fn test_boundary_points_included_kdtree() {
    check_boundary_points_included(&mut KdTree::new());
}

#[test]
fn test_disjoint_rect_is_empty_brute() {
    check_disjoint_rect_is_empty(&mut BruteTable::new());
}

#[test]
fn test_disjoint_rect_is_empty_kdtree() {
    check_disjoint_rect_is_empty(&mut KdTree::new());
}

#[test]
fn test_degenerate_rect_brute() {
    check_degenerate_rect(&mut BruteTable::new());
}

#[test]
fn test_degenerate_rect_kdtree() {
    check_degenerate_rect(&mut KdTree::new());
}
