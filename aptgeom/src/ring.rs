// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Assembly of node chains into closed rings.

use std::collections::HashSet;

use geo::{Area, Coord, LineString, Polygon};

use crate::apt::Node;
use crate::curve::{chain_edges, Resolution};
use crate::geom::constants::{MIN_RING_AREA_DEG2, VERTEX_TOLERANCE_DEG};
use crate::Error;

/// Whether a ring bounds a polygon or a hole in it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RingRole {
    /// Wound counter-clockwise in (longitude, latitude).
    Outer,
    /// Wound clockwise in (longitude, latitude).
    Hole,
}

/// How the last node of a chain connects to the first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Closure {
    /// The last node repeats the first node.
    Explicit,
    /// An edge from the last to the first node closes the ring.
    Implicit,
}

impl Closure {
    /// Detects the closure from the position of the first and last node.
    pub fn detect(nodes: &[Node]) -> Self {
        match (nodes.first(), nodes.last()) {
            (Some(first), Some(last))
                if nodes.len() > 1 && first.position() == last.position() =>
            {
                Self::Explicit
            }
            _ => Self::Implicit,
        }
    }
}

/// Assembles the chain into a closed ring wound according to its `role`.
///
/// The vertices of all edges are concatenated with the shared node of two
/// edges appearing once. Fails if the ring is degenerate.
pub fn assemble(
    nodes: &[Node],
    closure: Closure,
    role: RingRole,
    resolution: &Resolution,
) -> Result<LineString<f64>, Error> {
    if nodes.is_empty() {
        return Err(Error::EmptyChain);
    }

    let mut coords: Vec<Coord<f64>> = Vec::new();

    for (i, edge) in chain_edges(nodes, closure == Closure::Implicit).enumerate() {
        let skip = usize::from(i > 0);
        coords.extend(edge.vertices(resolution).skip(skip).map(Coord::from));
    }

    if coords.is_empty() {
        // a single node has no edges
        coords.push(nodes[0].position().into());
    }

    close(coords, role)
}

/// Closes the `coords` and winds them according to the `role`.
///
/// Consecutive duplicates are removed. The last vertex is set to exactly the
/// first vertex if both are within the vertex tolerance, otherwise the first
/// vertex is appended. Coordinates that are not finite are rejected.
pub fn close(mut coords: Vec<Coord<f64>>, role: RingRole) -> Result<LineString<f64>, Error> {
    if !coords.iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
        return Err(Error::InvalidCoordinate);
    }

    coords.dedup();

    let (Some(&first), Some(&last)) = (coords.first(), coords.last()) else {
        return Err(Error::DegenerateRing { distinct: 0 });
    };

    if coords.len() > 1
        && (first.x - last.x).abs() <= VERTEX_TOLERANCE_DEG
        && (first.y - last.y).abs() <= VERTEX_TOLERANCE_DEG
    {
        let n = coords.len();
        coords[n - 1] = first;
    } else {
        coords.push(first);
    }

    let distinct = coords[..coords.len() - 1]
        .iter()
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .collect::<HashSet<_>>()
        .len();

    if distinct < 3 {
        return Err(Error::DegenerateRing { distinct });
    }

    let polygon = Polygon::new(LineString::from(coords), vec![]);
    let area = polygon.signed_area();

    if area.abs() < MIN_RING_AREA_DEG2 {
        return Err(Error::ZeroAreaRing);
    }

    let (mut ring, _) = polygon.into_inner();

    if (area > 0.0) != (role == RingRole::Outer) {
        ring.0.reverse();
    }

    Ok(ring)
}

/// Returns the signed area of the ring in square degrees, positive if it's
/// wound counter-clockwise.
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    Polygon::new(ring.clone(), vec![]).signed_area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{plane, GeoPoint};

    const ORIGIN: GeoPoint = coord!(51.4700, -0.4543);

    fn at(dx: f64, dy: f64) -> Node {
        Node::new(plane::to_geo(ORIGIN, dx, dy))
    }

    fn square() -> Vec<Node> {
        vec![at(0.0, 0.0), at(100.0, 0.0), at(100.0, 100.0), at(0.0, 100.0)]
    }

    fn assert_closed(ring: &LineString<f64>) {
        assert!(ring.0.len() >= 4);
        assert_eq!(ring.0.first(), ring.0.last());
    }

    #[test]
    fn implicit_closure_appends_first_node() {
        let nodes = square();
        let ring = assemble(&nodes, Closure::Implicit, RingRole::Outer, &Resolution::default())
            .expect("square should be a valid ring");

        assert_closed(&ring);
        assert_eq!(ring.0.len(), 5);
        assert!(signed_area(&ring) > 0.0);
    }

    #[test]
    fn explicit_closure_is_detected() {
        let mut nodes = square();
        nodes.push(nodes[0].clone());

        assert_eq!(Closure::detect(&nodes), Closure::Explicit);
        assert_eq!(Closure::detect(&square()), Closure::Implicit);

        let ring = assemble(&nodes, Closure::Explicit, RingRole::Outer, &Resolution::default())
            .expect("square should be a valid ring");
        assert_eq!(ring.0.len(), 5);
    }

    #[test]
    fn winding_follows_role() {
        let mut clockwise = square();
        clockwise.reverse();

        let outer = assemble(&clockwise, Closure::Implicit, RingRole::Outer, &Resolution::default())
            .expect("square should be a valid ring");
        let hole = assemble(&square(), Closure::Implicit, RingRole::Hole, &Resolution::default())
            .expect("square should be a valid ring");

        assert!(signed_area(&outer) > 0.0);
        assert!(signed_area(&hole) < 0.0);
        assert_closed(&hole);
    }

    #[test]
    fn nearly_closed_ring_snaps_to_first_vertex() {
        let first: Coord<f64> = plane::to_geo(ORIGIN, 0.0, 0.0).into();
        let coords = vec![
            first,
            plane::to_geo(ORIGIN, 50.0, 0.0).into(),
            plane::to_geo(ORIGIN, 50.0, 50.0).into(),
            Coord {
                x: first.x + 1e-9,
                y: first.y - 1e-9,
            },
        ];

        let ring = close(coords, RingRole::Outer).expect("triangle should be a valid ring");
        assert_eq!(ring.0.len(), 4);
        assert_eq!(ring.0[3], ring.0[0]);
    }

    #[test]
    fn two_distinct_nodes_are_degenerate() {
        let nodes = [at(0.0, 0.0), at(30.0, 30.0)];
        let result = assemble(&nodes, Closure::Implicit, RingRole::Outer, &Resolution::default());
        assert_eq!(result, Err(Error::DegenerateRing { distinct: 2 }));
    }

    #[test]
    fn collinear_nodes_have_no_area() {
        let nodes = [at(0.0, 0.0), at(30.0, 0.0), at(60.0, 0.0)];
        let result = assemble(&nodes, Closure::Implicit, RingRole::Outer, &Resolution::default());
        assert_eq!(result, Err(Error::ZeroAreaRing));
    }

    #[test]
    fn non_finite_node_is_rejected() {
        let mut nodes = square();
        nodes[2].latitude = f64::NAN;

        let result = assemble(&nodes, Closure::Implicit, RingRole::Outer, &Resolution::default());
        assert_eq!(result, Err(Error::InvalidCoordinate));
    }

    #[test]
    fn curved_ring_has_no_duplicate_vertices() {
        let nodes = [
            Node::curve(plane::to_geo(ORIGIN, 0.0, 0.0), plane::to_geo(ORIGIN, -20.0, 20.0)),
            at(100.0, 0.0),
            Node::curve(plane::to_geo(ORIGIN, 100.0, 100.0), plane::to_geo(ORIGIN, 120.0, 80.0)),
            at(0.0, 100.0),
        ];

        let ring = assemble(&nodes, Closure::Implicit, RingRole::Outer, &Resolution::Fixed(8))
            .expect("curved ring should be valid");

        assert_closed(&ring);
        assert!(ring.0.len() > 5);
        assert!(ring.0.windows(2).all(|w| w[0] != w[1]));
        assert!(signed_area(&ring) > 0.0);
    }
}
