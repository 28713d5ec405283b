use kdtwo::{BruteTable, KdTree, Point, PointTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn check_nearest_excludes_query(table: &mut impl PointTable<u32>) {
    let p = pt(0.5, 0.5);
    table.put(p, 0);

    // A table containing only the query point has no nearest neighbor.
    assert_eq!(table.nearest(p), None);
    assert!(table.nearest_k(p, 5).is_empty());

    table.put(pt(0.6, 0.6), 1);
    assert_eq!(table.nearest(p), Some(pt(0.6, 0.6)));
    assert_eq!(table.nearest_k(p, 5), vec![pt(0.6, 0.6)]);
}

fn check_nearest_k_edge_cases(table: &mut impl PointTable<u32>) {
    let points = [
        pt(0.1, 0.1),
        pt(0.2, 0.2),
        pt(0.3, 0.3),
        pt(0.4, 0.4),
        pt(0.5, 0.5),
    ];
    for (i, &p) in points.iter().enumerate() {
        table.put(p, i as u32);
    }
    let query = pt(0.1, 0.1);

    // k = 0 returns nothing.
    assert!(table.nearest_k(query, 0).is_empty());

    // k >= n - 1 returns every point except the query itself.
    for k in [4, 5, 100] {
        let mut found = table.nearest_k(query, k);
        found.sort();
        assert_eq!(found, points[1..].to_vec());
    }

    // A query point that is not stored competes with nothing.
    let mut found = table.nearest_k(pt(0.9, 0.9), 5);
    found.sort();
    assert_eq!(found, points.to_vec());

    // Partial k returns the k closest, closest first.
    assert_eq!(
        table.nearest_k(query, 2),
        vec![pt(0.2, 0.2), pt(0.3, 0.3)]
    );
}

#[test]
fn test_nearest_excludes_query_brute() {
    check_nearest_excludes_query(&mut BruteTable::new());
}

#[test]
fn test_nearest_excludes_query_kdtree() {
    check_nearest_excludes_query(&mut KdTree::new());
}

#[test]
fn test_nearest_k_edge_cases_brute() {
    check_nearest_k_edge_cases(&mut BruteTable::new());
}

#[test]
fn test_nearest_k_edge_cases_kdtree() {
    check_nearest_k_edge_cases(&mut KdTree::new());
}

#[test]
fn test_nearest_is_member_of_minimal_distance_set() {
    // Four stored points at equal distance from the center: either table may
    // pick any of them, but the winner must come from that set and must be
    // stable across repeated calls.
    let corners = [
        pt(0.4, 0.4),
        pt(0.4, 0.6),
        pt(0.6, 0.4),
        pt(0.6, 0.6),
    ];
    let query = pt(0.5, 0.5);

    let mut brute = BruteTable::new();
    let mut tree = KdTree::new();
    for (i, &p) in corners.iter().enumerate() {
        brute.put(p, i as u32);
        tree.put(p, i as u32);
    }

    let from_brute = brute.nearest(query).unwrap();
    let from_tree = tree.nearest(query).unwrap();
    assert!(corners.contains(&from_brute));
    assert!(corners.contains(&from_tree));
    assert_eq!(brute.nearest(query), Some(from_brute));
    assert_eq!(tree.nearest(query), Some(from_tree));

    // With k = 4 the tie disappears: both must return the whole set.
    let mut b4 = brute.nearest_k(query, 4);
    let mut t4 = tree.nearest_k(query, 4);
    b4.sort();
    t4.sort();
    let mut expected = corners.to_vec();
    expected.sort();
    assert_eq!(b4, expected);
    assert_eq!(b4, t4);
}

#[test]
fn test_nearest_k_is_sorted_closest_first() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut tree = KdTree::new();
    for i in 0..200 {
        tree.put(pt(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)), i);
    }

    let query = pt(0.42, 0.58);
    let found = tree.nearest_k(query, 10);
    assert_eq!(found.len(), 10);
    for pair in found.windows(2) {
        assert!(
            pair[0].distance_squared_to(query) <= pair[1].distance_squared_to(query)
        );
    }
    // The first entry agrees with the single-nearest query.
    assert_eq!(tree.nearest(query), Some(found[0]));
}
