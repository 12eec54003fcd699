//! Black-box decomposition scenarios: figure-eight, simple square,
//! square-with-hole, a pinched hourglass, and a self-intersecting ring
//! nested inside a container ring.

use geo::Area;
use geo_decompose::{coord, decompose, DecomposedRing, LineString};

fn closed_ring(coords: &[(f64, f64)]) -> LineString<f64> {
    let mut pts: Vec<_> = coords.iter().map(|&(x, y)| coord! { x: x, y: y }).collect();
    pts.push(pts[0]);
    LineString::new(pts)
}

fn sorted_vertices(ring: &DecomposedRing) -> Vec<(i64, i64)> {
    // Scenario coordinates are small integers; scale-and-round avoids float
    // ordering headaches without pretending this is a tolerance-based test.
    let mut v: Vec<(i64, i64)> = ring.coords[..ring.coords.len() - 1]
        .iter()
        .map(|c| ((c.x * 1000.0).round() as i64, (c.y * 1000.0).round() as i64))
        .collect();
    v.sort_unstable();
    v
}

fn signed_area(ring: &DecomposedRing) -> f64 {
    let polygon = geo_types::Polygon::new(LineString::new(ring.coords.clone()), vec![]);
    polygon.signed_area()
}

#[test]
fn figure_eight_splits_into_two_opposite_triangles() {
    let ring = closed_ring(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
    let result = decompose(&[ring]).unwrap();

    assert_eq!(result.len(), 2);
    for r in &result {
        assert_eq!(r.parent, None);
        assert_eq!(r.net_winding, Some(r.winding as i64));
        assert_eq!(r.coords.first(), r.coords.last());
        assert_eq!(r.coords.len(), 4);
    }

    let windings: Vec<i32> = result.iter().map(|r| r.winding).collect();
    assert!(windings.contains(&1) && windings.contains(&-1));

    let expected_a = {
        let mut v = vec![(0, 0), (2000, 0), (1000, 1000)];
        v.sort_unstable();
        v
    };
    let expected_b = {
        let mut v = vec![(1000, 1000), (0, 2000), (2000, 2000)];
        v.sort_unstable();
        v
    };
    let actual: Vec<Vec<(i64, i64)>> = result.iter().map(sorted_vertices).collect();
    assert!(actual.contains(&expected_a));
    assert!(actual.contains(&expected_b));
}

#[test]
fn simple_square_is_unchanged() {
    let ring = closed_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let result = decompose(&[ring]).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].winding, 1);
    assert_eq!(result[0].parent, None);
    assert_eq!(result[0].net_winding, Some(1));
    assert_eq!(
        sorted_vertices(&result[0]),
        {
            let mut v = vec![(0, 0), (1000, 0), (1000, 1000), (0, 1000)];
            v.sort_unstable();
            v
        }
    );
}

#[test]
fn square_with_disjoint_hole() {
    let outer = closed_ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let inner = closed_ring(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
    let result = decompose(&[outer, inner]).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].winding, 1);
    assert_eq!(result[0].parent, None);
    assert_eq!(result[0].net_winding, Some(1));
    assert_eq!(result[1].winding, -1);
    assert_eq!(result[1].parent, Some(0));
    assert_eq!(result[1].net_winding, Some(0));
}

#[test]
fn pinched_hourglass_splits_into_two_triangles_with_no_parent() {
    // The two diagonals of a square, traversed as a single ring, cross at
    // its center — a self-intersection at a point that is not itself one
    // of the ring's four vertices.
    let ring = closed_ring(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let result = decompose(&[ring]).unwrap();

    assert_eq!(result.len(), 2);
    let windings: Vec<i32> = result.iter().map(|r| r.winding).collect();
    assert!(windings.contains(&1) && windings.contains(&-1));
    for r in &result {
        assert_eq!(r.parent, None);
        assert_eq!(r.coords.len(), 4);
        assert!(signed_area(r).abs() > 0.0);
    }
}

#[test]
fn self_intersecting_ring_nested_inside_container_gets_container_as_parent() {
    let outer = closed_ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let inner_figure_eight = closed_ring(&[(1.0, 1.0), (3.0, 1.0), (1.0, 3.0), (3.0, 3.0)]);
    let result = decompose(&[outer, inner_figure_eight]).unwrap();

    assert_eq!(result.len(), 3);

    let outer_area = result.iter().map(|r| signed_area(r).abs()).fold(0.0_f64, f64::max);
    let outer_idx = result
        .iter()
        .position(|r| (signed_area(r).abs() - outer_area).abs() < 1e-9)
        .unwrap();
    assert_eq!(result[outer_idx].parent, None);

    for (i, r) in result.iter().enumerate() {
        if i == outer_idx {
            continue;
        }
        assert_eq!(r.parent, Some(outer_idx));
        assert_eq!(r.net_winding, Some(result[outer_idx].winding as i64 + r.winding as i64));
    }
}

#[test]
fn invalid_input_is_rejected() {
    let err = decompose(&[]).unwrap_err();
    assert!(matches!(err, geo_decompose::Error::InvalidInput { .. }));

    let duplicate_vertex = closed_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let also_shares_origin = closed_ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
    let err = decompose(&[duplicate_vertex, also_shares_origin]).unwrap_err();
    assert!(matches!(err, geo_decompose::Error::InvalidInput { .. }));
}

#[test]
fn output_area_sums_to_netwinding_weighted_signed_area() {
    // Sum of net_winding * signed_area(ring) equals the winding-aware area
    // of the input polygon. For a disjoint hole, that's simply
    // outer_area - hole_area (outer is net +1, the hole cancels it to net 0
    // so contributes nothing).
    let outer = closed_ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let inner = closed_ring(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
    let result = decompose(&[outer, inner]).unwrap();

    let total: f64 = result
        .iter()
        .map(|r| r.net_winding.unwrap() as f64 * signed_area(r))
        .sum();
    assert!((total - 16.0).abs() < 1e-9);
}
