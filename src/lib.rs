//! `geo-decompose` breaks a complex, possibly self-intersecting, possibly
//! multi-ring planar polygon into a collection of simple (non-self-
//! intersecting, one-ring) polygons that partition the original polygon's
//! traced interior, and annotates each output ring with its winding
//! number, net winding number, and containment parent.
//!
//! Input rings may cross-intersect each other and self-intersect within a
//! single ring; the first ring need not enclose the others; winding
//! orientation is arbitrary. The crate does not parse coordinates, talk to
//! any particular geometry I/O format, or do any styling — those are left
//! to callers. It does lean on the wider `geo` ecosystem for the pieces
//! that are genuinely someone else's job: [`geo::line_intersection`] for
//! pairwise segment crossings, [`geo::Contains`]/[`geo::Area`] for
//! point-in-polygon and polygon-area, and [`rstar`] for the spatial index
//! that maps a coordinate back to its intersection.
//!
//! # Algorithm
//!
//! 1. [`normalize`] closes open rings and checks vertex uniqueness.
//! 2. [`intersect`] finds every self/cross intersection between edges.
//! 3. [`graph`] builds the pseudo-vertex / intersection graph from both.
//! 4. [`seed`] derives each input ring's initial winding and orders the
//!    walker's work queue.
//! 5. [`walk`] extracts simple output rings by walking the graph.
//! 6. [`post`] assigns containment parents the walk didn't reach and
//!    propagates net winding numbers down the resulting tree.
//!
//! [`decompose`] wires all of the above together; most callers only need
//! that one function.

#[macro_use]
extern crate log;

pub mod decompose;
pub mod error;
pub mod graph;
pub mod index;
pub mod intersect;
pub mod normalize;
pub mod post;
pub mod primitives;
pub mod seed;
pub mod walk;

pub use crate::decompose::decompose;
pub use crate::error::Error;
pub use crate::walk::DecomposedRing;

pub use geo_types::{coord, line_string, Coord, LineString};
