//! The top-level entry point: wires the normalizer, intersection adapter,
//! graph builder, seeder, walker, and post-processor together.

use geo_types::LineString;

use crate::error::Error;
use crate::primitives::is_convex;
use crate::walk::DecomposedRing;
use crate::{graph, intersect, normalize, post, seed, walk};

/// Decomposes a (possibly self-intersecting, possibly multi-ring) planar
/// polygon into simple, non-self-intersecting output rings.
///
/// `rings` need not be closed (the normalizer closes them), and need not be
/// given in any particular winding order; ring 0 is not required to be
/// outer.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `rings` is empty, a ring has fewer
/// than 3 distinct vertices, or any non-closing vertex repeats across
/// rings. Returns [`Error::GraphInconsistency`] if the pseudo-vertex /
/// intersection graph cannot be fully wired — this indicates a defect in
/// the intersection adapter or the graph builder, not a property of the
/// input.
pub fn decompose(rings: &[LineString<f64>]) -> Result<Vec<DecomposedRing>, Error> {
    let normalized = normalize::normalize(rings)?;
    let records = intersect::find_intersections(&normalized.rings);

    let mut output = if records.is_empty() {
        debug!("no self/cross intersections; taking the fast path");
        fast_path(&normalized.rings)
    } else {
        let graph = graph::build(&normalized.rings, &records)?;
        let queue = seed::seed_queue(&graph, normalized.rings.len());
        walk::walk(&graph, queue)?
    };

    post::assign_parents(&mut output);
    post::compute_net_windings(&mut output);
    Ok(output)
}

/// One output ring per input ring, skipping graph construction entirely.
/// Winding is derived with the same extremal-vertex convexity test the
/// seeder uses, just read directly off the ring's own vertex sequence
/// instead of the graph.
fn fast_path(rings: &[LineString<f64>]) -> Vec<DecomposedRing> {
    rings
        .iter()
        .map(|ring| {
            let coords = &ring.0;
            let n = coords.len() - 1;
            let leftmost = (0..n)
                .reduce(|best, i| {
                    if (coords[i].x, coords[i].y) < (coords[best].x, coords[best].y) {
                        i
                    } else {
                        best
                    }
                })
                .expect("normalized ring must have at least 3 vertices");
            let prev = coords[(leftmost + n - 1) % n];
            let next = coords[(leftmost + 1) % n];
            let winding = if is_convex(prev, coords[leftmost], next, true) {
                1
            } else {
                -1
            };
            DecomposedRing {
                coords: coords.clone(),
                parent: None,
                winding,
                net_winding: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    fn closed_ring(coords: &[(f64, f64)]) -> LineString<f64> {
        let mut pts: Vec<_> = coords.iter().map(|&(x, y)| coord! { x: x, y: y }).collect();
        pts.push(pts[0]);
        LineString::new(pts)
    }

    #[test]
    fn fast_path_emits_one_ring_per_input_ring() {
        let outer = closed_ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let inner = closed_ring(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
        let result = decompose(&[outer, inner]).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].parent, None);
        assert_eq!(result[1].parent, Some(0));
        assert_eq!(result[0].net_winding, Some(1));
    }

    #[test]
    fn propagates_invalid_input() {
        let err = decompose(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
