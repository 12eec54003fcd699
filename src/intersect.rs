//! Adapter over the external segment-intersection engine.
//!
//! `geo::line_intersection` already solves "do these two segments cross, and
//! where" for us; this module's job is purely the bookkeeping the graph
//! builder needs on top of that: pruning candidate pairs with an R-tree (the
//! same approach `geo`'s own `RstarEdgeSetIntersector` uses for its
//! `geomgraph` relate algorithm), rejecting shared-endpoint touches, and
//! producing the two-records-per-crossing, fractional-parameter shape the
//! graph builder expects.

use geo::line_intersection::{line_intersection, LineIntersection};
use geo_types::{Line, LineString};
use rstar::{RTree, RTreeObject, AABB};

use crate::primitives::Coordinate;

/// One viewpoint of a binary edge crossing: the point, which edge it came
/// from, and the fractional parameter along that edge.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionRecord {
    pub point: Coordinate,
    pub ring0: usize,
    pub edge0: usize,
    pub frac0: f64,
    pub ring1: usize,
    pub edge1: usize,
    pub frac1: f64,
    /// Set on exactly one of the two records produced for a given crossing.
    pub unique: bool,
}

struct Segment {
    ring: usize,
    edge: usize,
    start: Coordinate,
    end: Coordinate,
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.start.x, self.start.y], [self.end.x, self.end.y])
    }
}

/// Fractional distance of `point` along `start -> end`, assuming `point`
/// lies on the segment (callers only use this for points already known to
/// lie on the line, from the intersection engine itself).
fn param_along(start: Coordinate, end: Coordinate, point: Coordinate) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return 0.0;
    }
    ((point.x - start.x) * dx + (point.y - start.y) * dy) / len_sq
}

fn edges_share_endpoint(rings: &[LineString<f64>], a: &Segment, b: &Segment) -> bool {
    if a.ring != b.ring {
        return false;
    }
    let ring_len = rings[a.ring].0.len() - 1;
    a.edge == b.edge
        || crate::primitives::floor_mod(a.edge as isize + 1, ring_len) == b.edge
        || crate::primitives::floor_mod(b.edge as isize + 1, ring_len) == a.edge
}

/// Finds every strict (interior, non-endpoint) crossing between edges of
/// `rings`, both within a single ring (self-intersections) and across rings
/// (cross-intersections). Adjacent edges of the same ring, which only ever
/// meet at their shared ring vertex, are skipped — that vertex is already
/// represented by a ring-vertex pseudo-vertex, not a binary intersection.
pub fn find_intersections(rings: &[LineString<f64>]) -> Vec<IntersectionRecord> {
    let mut segments = Vec::new();
    for (ring_index, ring) in rings.iter().enumerate() {
        let ring_len = ring.0.len() - 1;
        for edge_index in 0..ring_len {
            segments.push(Segment {
                ring: ring_index,
                edge: edge_index,
                start: ring.0[edge_index],
                end: ring.0[edge_index + 1],
            });
        }
    }

    let tree = RTree::bulk_load(segments);
    let mut records = Vec::new();

    for (a, b) in tree.intersection_candidates_with_other_tree(&tree) {
        // `intersection_candidates_with_other_tree` on a tree against itself
        // yields each unordered pair twice (plus self-pairs); keep one
        // direction via pointer identity so every crossing is visited once.
        if (a as *const Segment as usize) >= (b as *const Segment as usize) {
            continue;
        }
        if edges_share_endpoint(rings, a, b) {
            continue;
        }

        let line_a = Line::new(a.start, a.end);
        let line_b = Line::new(b.start, b.end);
        let Some(LineIntersection::SinglePoint {
            intersection,
            is_proper,
        }) = line_intersection(line_a, line_b)
        else {
            continue;
        };
        if !is_proper {
            continue;
        }

        let frac_a = param_along(a.start, a.end, intersection);
        let frac_b = param_along(b.start, b.end, intersection);

        records.push(IntersectionRecord {
            point: intersection,
            ring0: a.ring,
            edge0: a.edge,
            frac0: frac_a,
            ring1: b.ring,
            edge1: b.edge,
            frac1: frac_b,
            unique: true,
        });
        records.push(IntersectionRecord {
            point: intersection,
            ring0: b.ring,
            edge0: b.edge,
            frac0: frac_b,
            ring1: a.ring,
            edge1: a.edge,
            frac1: frac_a,
            unique: false,
        });
    }

    debug!("found {} self/cross-intersection viewpoints", records.len());
    records
}
