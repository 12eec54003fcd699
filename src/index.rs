//! The R-tree of intersections, used only to map a coordinate back to its
//! [`Isect`](crate::graph::Isect) index. Every crossing's coordinate is
//! unique within one call's graph, so `locate_at_point` returning the first
//! match is sufficient.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::primitives::Coordinate;

/// A record keyed by an intersection's coordinate, carrying its index into
/// the graph's intersection list as payload.
#[derive(Debug, Clone, Copy)]
pub struct IsectLocation {
    pub coord: Coordinate,
    pub isect: usize,
}

impl RTreeObject for IsectLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.coord.x, self.coord.y])
    }
}

impl PointDistance for IsectLocation {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.coord.x - point[0];
        let dy = self.coord.y - point[1];
        dx * dx + dy * dy
    }
}

/// Thin wrapper around `rstar::RTree<IsectLocation>` exposing exactly the
/// two operations the graph builder needs: insert and exact-point lookup.
pub struct SpatialIndex {
    tree: RTree<IsectLocation>,
}

impl SpatialIndex {
    pub fn build(locations: Vec<IsectLocation>) -> Self {
        Self {
            tree: RTree::bulk_load(locations),
        }
    }

    /// Returns the intersection index whose coordinate matches `coord`
    /// exactly, if any.
    pub fn locate(&self, coord: Coordinate) -> Option<usize> {
        self.tree
            .locate_at_point(&[coord.x, coord.y])
            .map(|loc| loc.isect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn locates_exact_coordinate() {
        let locations = vec![
            IsectLocation {
                coord: coord! { x: 0.0, y: 0.0 },
                isect: 0,
            },
            IsectLocation {
                coord: coord! { x: 1.0, y: 1.0 },
                isect: 1,
            },
        ];
        let index = SpatialIndex::build(locations);
        assert_eq!(index.locate(coord! { x: 1.0, y: 1.0 }), Some(1));
        assert_eq!(index.locate(coord! { x: 5.0, y: 5.0 }), None);
    }
}
