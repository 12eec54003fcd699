//! Small geometry primitives the graph builder and walker share: exact
//! coordinate equality, Euclidean modular ring indexing, and an orientation
//! predicate backed by a robust (non-cancelling) determinant.

use geo_types::Coord;

/// A 2-D ring vertex or intersection coordinate.
pub type Coordinate = Coord<f64>;

/// `(ring index, edge index)`, identifying the segment from vertex `edge` to
/// vertex `edge + 1 (mod ring length - 1)` of ring `ring`.
pub type RingEdge = (usize, usize);

/// Euclidean modulus: `floor_mod(-1, 4) == 3`, unlike `%` which would yield
/// `-1`. Used throughout for wrapping ring-vertex indices.
pub fn floor_mod(i: isize, n: usize) -> usize {
    debug_assert!(n > 0);
    let n = n as isize;
    (((i % n) + n) % n) as usize
}

/// Exact (non-approximate) coordinate equality. Intersections are produced
/// by a single shared computation of the crossing point, so two pseudo
/// coordinates that represent "the same" point compare bit-for-bit equal;
/// this crate never snaps or rounds coordinates.
pub fn coords_eq(a: Coordinate, b: Coordinate) -> bool {
    a.x == b.x && a.y == b.y
}

/// Orientation of the turn `p -> q -> r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Signed-area orientation predicate, backed by `robust::orient2d` so that
/// near-collinear triples at an extremal seeding vertex don't fall prey to
/// catastrophic cancellation. Walking itself never calls this: once the
/// graph is built, ring identity is resolved by index, not by re-evaluating
/// geometry.
pub fn orient2d(p: Coordinate, q: Coordinate, r: Coordinate) -> Orientation {
    let sign = robust::orient2d(
        robust::Coord { x: p.x, y: p.y },
        robust::Coord { x: q.x, y: q.y },
        robust::Coord { x: r.x, y: r.y },
    );
    if sign > 0.0 {
        Orientation::CounterClockwise
    } else if sign < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True when the turn `prev -> vertex -> next` is convex as seen from a
/// right-handed traversal (`right_handed == true`) or a left-handed one.
/// Used both by the winding seeder (to derive a ring's initial winding) and
/// by the walker (to decide whether an unfinished ring at an intersection
/// hugs the outside or nests inside the current one).
pub fn is_convex(prev: Coordinate, vertex: Coordinate, next: Coordinate, right_handed: bool) -> bool {
    let orientation = orient2d(prev, vertex, next);
    match orientation {
        Orientation::Collinear => true,
        Orientation::Clockwise => !right_handed,
        Orientation::CounterClockwise => right_handed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_mod_wraps_negative_indices() {
        assert_eq!(floor_mod(-1, 4), 3);
        assert_eq!(floor_mod(-5, 4), 3);
        assert_eq!(floor_mod(4, 4), 0);
        assert_eq!(floor_mod(7, 4), 3);
    }

    #[test]
    fn coords_eq_is_exact() {
        let a = Coordinate { x: 1.0, y: 2.0 };
        let b = Coordinate { x: 1.0, y: 2.0 };
        let c = Coordinate { x: 1.0, y: 2.0000001 };
        assert!(coords_eq(a, b));
        assert!(!coords_eq(a, c));
    }

    #[test]
    fn orient2d_detects_turns() {
        let p = Coordinate { x: 0.0, y: 0.0 };
        let q = Coordinate { x: 1.0, y: 0.0 };
        let r_ccw = Coordinate { x: 1.0, y: 1.0 };
        let r_cw = Coordinate { x: 1.0, y: -1.0 };
        assert_eq!(orient2d(p, q, r_ccw), Orientation::CounterClockwise);
        assert_eq!(orient2d(p, q, r_cw), Orientation::Clockwise);
    }
}
