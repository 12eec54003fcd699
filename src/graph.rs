//! The pseudo-vertex / intersection graph.
//!
//! Two parallel arena-indexed structures are built in one pass: the
//! pseudo-vertex lists, one per `(ring, edge)`, and the intersection list.
//! Links are plain integer indices rather than owning references, and the
//! mutable bits — the "walkable" flags the walker flips, and the
//! next-intersection pointers resolved during construction — live behind
//! `Cell` the way `geo`'s own geometry-graph code
//! (`relate/geomgraph/edge_intersection.rs`) keeps per-slot mutable state.

use std::cell::Cell;
use std::ops::Range;

use geo_types::LineString;

use crate::error::Error;
use crate::index::{IsectLocation, SpatialIndex};
use crate::intersect::IntersectionRecord;
use crate::primitives::{floor_mod, Coordinate, RingEdge};

/// A point on a specific incoming edge: a pseudo-vertex.
pub struct PseudoVertex {
    pub coord: Coordinate,
    /// Fractional distance along `edge_in`, in `[0, 1]`. Ring PVs carry 1.0.
    pub param: f64,
    pub edge_in: RingEdge,
    pub edge_out: RingEdge,
    next_isect_along_edge_in: Cell<Option<usize>>,
}

/// A point where a ring vertex sits, or two edges cross: an intersection.
pub struct Isect {
    pub coord: Coordinate,
    pub edge1: RingEdge,
    pub edge2: RingEdge,
    next1: Cell<Option<usize>>,
    next2: Cell<Option<usize>>,
    pub walkable1: Cell<bool>,
    pub walkable2: Cell<bool>,
}

impl Isect {
    /// The next intersection encountered walking forward along `edge1`.
    pub fn next1(&self) -> Option<usize> {
        self.next1.get()
    }

    /// The next intersection encountered walking forward along `edge2`.
    pub fn next2(&self) -> Option<usize> {
        self.next2.get()
    }
}

/// The built graph: every ring-vertex and self/cross intersection, wired
/// with next-intersection pointers per incident edge.
pub struct Graph {
    pub isects: Vec<Isect>,
    /// `N`: the count of ring-vertex intersections, which occupy indices
    /// `0..vertex_count`.
    pub vertex_count: usize,
    /// The contiguous range of ring-vertex intersection indices belonging
    /// to each input ring, in input order.
    pub ring_ranges: Vec<Range<usize>>,
}

fn unresolved(what: &str, coord: Coordinate) -> Error {
    Error::GraphInconsistency {
        reason: format!("{what} at ({}, {})", coord.x, coord.y),
    }
}

/// Builds the graph from the normalized rings and the intersection records
/// the adapter produced for them.
pub fn build(rings: &[LineString<f64>], records: &[IntersectionRecord]) -> Result<Graph, Error> {
    let edge_counts: Vec<usize> = rings.iter().map(|r| r.0.len() - 1).collect();
    let mut pv_lists: Vec<Vec<Vec<PseudoVertex>>> =
        edge_counts.iter().map(|&n| vec![Vec::new(); n]).collect();
    let mut isects: Vec<Isect> = Vec::new();
    let mut ring_ranges = Vec::with_capacity(rings.len());

    // --- Step 1: seed PVs and ISECTs for ring vertices. ---
    for (r, ring) in rings.iter().enumerate() {
        let num_edges = edge_counts[r];
        let start = isects.len();
        for j in 0..num_edges {
            pv_lists[r][j].push(PseudoVertex {
                coord: ring.0[j + 1],
                param: 1.0,
                edge_in: (r, j),
                edge_out: (r, (j + 1) % num_edges),
                next_isect_along_edge_in: Cell::new(None),
            });
            isects.push(Isect {
                coord: ring.0[j],
                edge1: (r, floor_mod(j as isize - 1, num_edges)),
                edge2: (r, j),
                next1: Cell::new(None),
                next2: Cell::new(None),
                walkable1: Cell::new(false),
                walkable2: Cell::new(true),
            });
        }
        ring_ranges.push(start..isects.len());
    }
    let vertex_count = isects.len();
    debug!("seeded {vertex_count} ring-vertex intersections across {} rings", rings.len());

    // --- Step 2: PVs (and, for the unique viewpoint, ISECTs) for self/cross intersections. ---
    for rec in records {
        pv_lists[rec.ring0][rec.edge0].push(PseudoVertex {
            coord: rec.point,
            param: rec.frac0,
            edge_in: (rec.ring0, rec.edge0),
            edge_out: (rec.ring1, rec.edge1),
            next_isect_along_edge_in: Cell::new(None),
        });
        if rec.unique {
            isects.push(Isect {
                coord: rec.point,
                edge1: (rec.ring0, rec.edge0),
                edge2: (rec.ring1, rec.edge1),
                next1: Cell::new(None),
                next2: Cell::new(None),
                walkable1: Cell::new(true),
                walkable2: Cell::new(true),
            });
        }
    }
    debug!("resolved {} total intersections ({} self/cross)", isects.len(), isects.len() - vertex_count);

    // --- Step 3: sort each PV list by param ascending; the ring PV (param = 1) sorts last. ---
    for ring_lists in pv_lists.iter_mut() {
        for edge_list in ring_lists.iter_mut() {
            edge_list.sort_by(|a, b| {
                a.param
                    .partial_cmp(&b.param)
                    .expect("pseudo-vertex parameter must not be NaN")
            });
        }
    }

    // --- Step 4: load every ISECT into the spatial index, keyed by coordinate. ---
    let locations: Vec<IsectLocation> = isects
        .iter()
        .enumerate()
        .map(|(i, isect)| IsectLocation {
            coord: isect.coord,
            isect: i,
        })
        .collect();
    let spatial_index = SpatialIndex::build(locations);

    // --- Step 5: resolve each PV's next-intersection-along-its-incoming-edge. ---
    for (r, &num_edges) in edge_counts.iter().enumerate() {
        for e in 0..num_edges {
            let list_len = pv_lists[r][e].len();
            for k in 0..list_len {
                let next_coord = if k + 1 < list_len {
                    pv_lists[r][e][k + 1].coord
                } else {
                    let next_edge = (e + 1) % num_edges;
                    pv_lists[r][next_edge][0].coord
                };
                let next_idx = spatial_index
                    .locate(next_coord)
                    .ok_or_else(|| unresolved("no intersection found while wiring pseudo-vertices", next_coord))?;
                pv_lists[r][e][k].next_isect_along_edge_in.set(Some(next_idx));
            }
        }
    }

    // --- Step 6: resolve each ISECT's next1/next2 from the PVs that reference it. ---
    for (r, &num_edges) in edge_counts.iter().enumerate() {
        for e in 0..num_edges {
            for pv in &pv_lists[r][e] {
                let isect_idx = spatial_index
                    .locate(pv.coord)
                    .ok_or_else(|| unresolved("pseudo-vertex has no matching intersection", pv.coord))?;
                let next = pv.next_isect_along_edge_in.get();
                let isect = &isects[isect_idx];
                if isect_idx < vertex_count {
                    // Ring-vertex intersections have a single incoming PV;
                    // its resolved "next" already describes forward
                    // progress along the outgoing edge.
                    isect.next2.set(next);
                } else if isect.edge1 == pv.edge_in {
                    isect.next1.set(next);
                } else if isect.edge2 == pv.edge_in {
                    isect.next2.set(next);
                } else {
                    return Err(Error::GraphInconsistency {
                        reason: format!(
                            "pseudo-vertex incoming edge {:?} matches neither side of intersection {isect_idx}",
                            pv.edge_in
                        ),
                    });
                }
            }
        }
    }

    Ok(Graph {
        isects,
        vertex_count,
        ring_ranges,
    })
}
