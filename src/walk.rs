//! Pops seeded and predicted work from the queue and walks the graph to
//! extract simple output rings.

use crate::error::Error;
use crate::graph::Graph;
use crate::primitives::{coords_eq, is_convex, Coordinate, RingEdge};
use crate::seed::QueueEntry;

/// One simple output ring, with the winding and (tentative) parent it was
/// walked or predicted with. `net_winding` is filled in later by
/// [`crate::post`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposedRing {
    pub coords: Vec<Coordinate>,
    pub parent: Option<usize>,
    pub winding: i32,
    pub net_winding: Option<i64>,
}

fn side_next(graph: &Graph, isect: usize, edge: RingEdge) -> Result<usize, Error> {
    let node = &graph.isects[isect];
    let next = if node.edge1 == edge {
        node.next1()
    } else if node.edge2 == edge {
        node.next2()
    } else {
        None
    };
    next.ok_or_else(|| Error::GraphInconsistency {
        reason: format!("intersection {isect} has no resolved next-intersection along edge {edge:?}"),
    })
}

fn is_walkable(graph: &Graph, isect: usize, edge: RingEdge) -> bool {
    let node = &graph.isects[isect];
    if node.edge1 == edge {
        node.walkable1.get()
    } else {
        node.walkable2.get()
    }
}

fn set_walkable(graph: &Graph, isect: usize, edge: RingEdge, value: bool) {
    let node = &graph.isects[isect];
    if node.edge1 == edge {
        node.walkable1.set(value);
    } else {
        node.walkable2.set(value);
    }
}

/// Walks the graph until `queue` (used as a LIFO stack — see
/// [`crate::seed::seed_queue`] for why the ordering matters) is drained,
/// emitting one output ring per popped entry.
pub fn walk(graph: &Graph, mut queue: Vec<QueueEntry>) -> Result<Vec<DecomposedRing>, Error> {
    let mut output: Vec<DecomposedRing> = Vec::new();

    while let Some(entry) = queue.pop() {
        let start_isect = entry.isect;
        let current_parent = entry.parent;
        let current_winding = entry.winding;

        let mut coords = vec![graph.isects[start_isect].coord];

        let start_node = &graph.isects[start_isect];
        let (mut walking_edge, mut nxt_isect) = if start_node.walkable1.get() {
            (start_node.edge1, side_next(graph, start_isect, start_node.edge1)?)
        } else if start_node.walkable2.get() {
            (start_node.edge2, side_next(graph, start_isect, start_node.edge2)?)
        } else {
            return Err(Error::GraphInconsistency {
                reason: format!("queued intersection {start_isect} has no walkable side"),
            });
        };
        let mut current_isect = start_isect;

        while !coords_eq(graph.isects[nxt_isect].coord, graph.isects[start_isect].coord) {
            coords.push(graph.isects[nxt_isect].coord);

            // This walk will visit `nxt_isect` itself; drop any stale queue
            // entry seeded or predicted for it.
            queue.retain(|pending| pending.isect != nxt_isect);

            let arrival_node = &graph.isects[nxt_isect];
            let (arrival_edge, departure_edge) = if walking_edge == arrival_node.edge1 {
                (arrival_node.edge1, arrival_node.edge2)
            } else {
                (arrival_node.edge2, arrival_node.edge1)
            };

            // We're about to depart via `departure_edge`; that side is now spent.
            set_walkable(graph, nxt_isect, departure_edge, false);

            if is_walkable(graph, nxt_isect, arrival_edge) {
                let next_along_departure = side_next(graph, nxt_isect, departure_edge)?;
                let convex = is_convex(
                    graph.isects[current_isect].coord,
                    graph.isects[nxt_isect].coord,
                    graph.isects[next_along_departure].coord,
                    current_winding == 1,
                );
                let prediction = if convex {
                    // The next ring through here hugs the outside of this one.
                    QueueEntry {
                        isect: nxt_isect,
                        parent: current_parent,
                        winding: -current_winding,
                    }
                } else {
                    // The next ring through here nests inside this one.
                    QueueEntry {
                        isect: nxt_isect,
                        parent: Some(output.len()),
                        winding: current_winding,
                    }
                };
                queue.push(prediction);
            }

            current_isect = nxt_isect;
            walking_edge = departure_edge;
            nxt_isect = side_next(graph, nxt_isect, departure_edge)?;
        }

        coords.push(graph.isects[nxt_isect].coord);
        trace!(
            "closed ring of {} vertices, winding {current_winding}, parent {current_parent:?}",
            coords.len()
        );
        output.push(DecomposedRing {
            coords,
            parent: current_parent,
            winding: current_winding,
            net_winding: None,
        });
    }

    Ok(output)
}
