//! Assigns containment parents to output rings the walker never reached,
//! and propagates net winding numbers down the resulting parent tree.
//!
//! Containment and area are delegated to `geo`'s own [`Contains`] and
//! [`Area`] algorithms — point-in-polygon and polygon-area are someone
//! else's problem, not this module's.

use geo::{Area, Contains};
use geo_types::{LineString, Point, Polygon};

use crate::walk::DecomposedRing;

fn to_polygon(ring: &DecomposedRing) -> Polygon<f64> {
    Polygon::new(LineString::new(ring.coords.clone()), vec![])
}

/// Assigns a containment parent to every ring the walker left without one
/// (rings produced from an input ring that happened to sit wholly inside
/// another output ring, with no graph interaction between them). Among
/// rings with `parent == None`, each candidate is tested against every
/// *other* output ring (whether or not that ring has a parent of its own);
/// the smallest-area ring that strictly contains it wins.
pub fn assign_parents(rings: &mut [DecomposedRing]) {
    let unparented: Vec<usize> = (0..rings.len()).filter(|&i| rings[i].parent.is_none()).collect();
    if unparented.len() <= 1 {
        // Zero or one rootless ring: nothing to disambiguate.
        return;
    }

    let polygons: Vec<Polygon<f64>> = rings.iter().map(to_polygon).collect();
    let areas: Vec<f64> = polygons.iter().map(|p| p.unsigned_area()).collect();

    for &candidate in &unparented {
        // Any point of the candidate ring works: if the candidate lies
        // wholly inside another ring, every one of its points — including
        // its own boundary vertices — lies strictly inside that ring too.
        let representative = Point::from(rings[candidate].coords[0]);

        let mut best: Option<(usize, f64)> = None;
        for other in 0..rings.len() {
            if other == candidate {
                continue;
            }
            if polygons[other].contains(&representative) {
                let better = match best {
                    None => true,
                    Some((_, best_area)) => areas[other] < best_area,
                };
                if better {
                    best = Some((other, areas[other]));
                }
            }
        }

        rings[candidate].parent = best.map(|(parent, _)| parent);
    }
}

/// Fills `net_winding` for every ring via a top-down traversal of the
/// parent tree: `net_winding = winding` at a root, `parent.net_winding +
/// winding` otherwise.
pub fn compute_net_windings(rings: &mut [DecomposedRing]) {
    let parents: Vec<Option<usize>> = rings.iter().map(|r| r.parent).collect();
    let windings: Vec<i32> = rings.iter().map(|r| r.winding).collect();
    let mut resolved: Vec<Option<i64>> = vec![None; rings.len()];

    fn resolve(idx: usize, parents: &[Option<usize>], windings: &[i32], resolved: &mut [Option<i64>]) -> i64 {
        if let Some(value) = resolved[idx] {
            return value;
        }
        let value = match parents[idx] {
            None => windings[idx] as i64,
            Some(parent) => resolve(parent, parents, windings, resolved) + windings[idx] as i64,
        };
        resolved[idx] = Some(value);
        value
    }

    for i in 0..rings.len() {
        let net = resolve(i, &parents, &windings, &mut resolved);
        rings[i].net_winding = Some(net);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    fn ring_of(coords: &[(f64, f64)], parent: Option<usize>, winding: i32) -> DecomposedRing {
        let mut pts: Vec<_> = coords.iter().map(|&(x, y)| coord! { x: x, y: y }).collect();
        pts.push(pts[0]);
        DecomposedRing {
            coords: pts,
            parent,
            winding,
            net_winding: None,
        }
    }

    #[test]
    fn nested_ring_without_graph_link_gets_smallest_containing_parent() {
        let outer = ring_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], None, 1);
        let mid = ring_of(&[(1.0, 1.0), (8.0, 1.0), (8.0, 8.0), (1.0, 8.0)], None, 1);
        let inner = ring_of(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 3.0)], None, -1);
        let mut rings = vec![outer, mid, inner];
        assign_parents(&mut rings);
        assert_eq!(rings[2].parent, Some(1));
        assert_eq!(rings[1].parent, Some(0));
        assert_eq!(rings[0].parent, None);
    }

    #[test]
    fn single_rootless_ring_is_left_alone() {
        let only = ring_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], None, 1);
        let mut rings = vec![only];
        assign_parents(&mut rings);
        assert_eq!(rings[0].parent, None);
    }

    #[test]
    fn net_winding_accumulates_down_the_tree() {
        let mut rings = vec![
            ring_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], None, 1),
            ring_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], Some(0), -1),
            ring_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], Some(1), 1),
        ];
        compute_net_windings(&mut rings);
        assert_eq!(rings[0].net_winding, Some(1));
        assert_eq!(rings[1].net_winding, Some(0));
        assert_eq!(rings[2].net_winding, Some(1));
    }
}
