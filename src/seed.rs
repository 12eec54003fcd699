//! Derives each input ring's initial winding from the convexity of its
//! left-most vertex, and orders the resulting work queue so the walker
//! processes outermost rings first.

use crate::graph::Graph;
use crate::primitives::is_convex;

/// A unit of work for the walker: start at `isect`, assume `winding`, and
/// (if this ring turns out to be nested) report to `parent`.
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry {
    pub isect: usize,
    pub parent: Option<usize>,
    pub winding: i32,
}

/// Picks, for `ring`'s range of ring-vertex intersections, the one with the
/// smallest x (ties broken by smallest y).
fn leftmost_ring_vertex(graph: &Graph, ring: usize) -> usize {
    let range = graph.ring_ranges[ring].clone();
    range
        .reduce(|best, candidate| {
            let b = graph.isects[best].coord;
            let c = graph.isects[candidate].coord;
            if (c.x, c.y) < (b.x, b.y) {
                candidate
            } else {
                best
            }
        })
        .expect("ring must have at least one vertex")
}

/// Finds the predecessor of `isect` by scanning every intersection for one
/// whose `next1`/`next2` points at it — the inverse of the forward links
/// the graph builder resolved.
fn predecessor_of(graph: &Graph, isect: usize) -> Option<usize> {
    graph
        .isects
        .iter()
        .position(|candidate| candidate.next1() == Some(isect) || candidate.next2() == Some(isect))
}

/// Builds one seed entry per input ring and returns them ordered so that,
/// used as a LIFO stack (`Vec::pop`), the ring whose left-most vertex has
/// the largest x pops first. This ordering — outermost-in-the-sense-of-x
/// first — is what makes the walker's parent/winding prediction sound;
/// popping smallest-x first would assign incorrect parents to rings nested
/// inside other rings.
pub fn seed_queue(graph: &Graph, ring_count: usize) -> Vec<QueueEntry> {
    let mut entries: Vec<QueueEntry> = (0..ring_count)
        .map(|ring| {
            let chosen = leftmost_ring_vertex(graph, ring);
            let predecessor = predecessor_of(graph, chosen).unwrap_or(chosen);
            // Ring-vertex intersections are always walkable only via edge2.
            let successor = graph.isects[chosen]
                .next2()
                .expect("ring-vertex intersection must have a resolved outgoing edge");

            let winding = if is_convex(
                graph.isects[predecessor].coord,
                graph.isects[chosen].coord,
                graph.isects[successor].coord,
                true,
            ) {
                1
            } else {
                -1
            };
            trace!("ring {ring}: seed isect {chosen}, winding {winding}");

            QueueEntry {
                isect: chosen,
                parent: None,
                winding,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        let ca = graph.isects[a.isect].coord;
        let cb = graph.isects[b.isect].coord;
        (ca.x, ca.y).partial_cmp(&(cb.x, cb.y)).expect("coordinates must not be NaN")
    });
    entries
}
