//! Closes open rings, checks vertex uniqueness, and flattens the input into
//! the indexed ring list the rest of the engine operates on.

use std::collections::HashSet;

use geo_types::LineString;

use crate::error::Error;
use crate::primitives::Coordinate;

/// A coordinate's bit pattern, used as a hash key. Two coordinates compare
/// equal here iff they are bit-for-bit identical floats — exactly the
/// exactness `coords_eq` uses elsewhere, kept consistent on purpose.
fn coord_key(c: Coordinate) -> (u64, u64) {
    (c.x.to_bits(), c.y.to_bits())
}

/// The result of normalizing a polygon's rings: closed rings plus the total
/// count of non-closing vertices across all of them.
pub struct Normalized {
    pub rings: Vec<LineString<f64>>,
    pub vertex_count: usize,
}

/// Close any open ring, then verify that every non-closing vertex across
/// every ring is unique.
///
/// Returns [`Error::InvalidInput`] if a ring is empty, has fewer than 3
/// distinct vertices, or if any coordinate pair repeats.
pub fn normalize(rings: &[LineString<f64>]) -> Result<Normalized, Error> {
    if rings.is_empty() {
        return Err(Error::InvalidInput {
            reason: "polygon has no rings".to_string(),
        });
    }

    let mut closed_rings = Vec::with_capacity(rings.len());
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut vertex_count = 0usize;

    for (ring_index, ring) in rings.iter().enumerate() {
        let mut coords: Vec<Coordinate> = ring.0.clone();
        if coords.len() < 3 {
            return Err(Error::InvalidInput {
                reason: format!("ring {ring_index} has fewer than 3 vertices"),
            });
        }
        let first = coords[0];
        let last = *coords.last().unwrap();
        if first != last {
            coords.push(first);
        }
        // Non-closing vertices are every coordinate except the final,
        // duplicated closing one.
        for coord in &coords[..coords.len() - 1] {
            let key = coord_key(*coord);
            if !seen.insert(key) {
                return Err(Error::InvalidInput {
                    reason: format!(
                        "duplicate vertex ({}, {}) in ring {ring_index}",
                        coord.x, coord.y
                    ),
                });
            }
            vertex_count += 1;
        }
        closed_rings.push(LineString::new(coords));
    }

    Ok(Normalized {
        rings: closed_rings,
        vertex_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString::new(coords.iter().map(|&(x, y)| coord! { x: x, y: y }).collect())
    }

    #[test]
    fn closes_open_ring() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let normalized = normalize(&[square]).unwrap();
        assert_eq!(normalized.rings[0].0.len(), 5);
        assert_eq!(normalized.rings[0].0.first(), normalized.rings[0].0.last());
        assert_eq!(normalized.vertex_count, 4);
    }

    #[test]
    fn rejects_duplicate_vertex_across_rings() {
        let a = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let err = normalize(&[a, b]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn rejects_empty_polygon() {
        let err = normalize(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
