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

//! Curve evaluation of chain edges.
//!
//! Each pair of consecutive nodes forms an [`Edge`]. The edge is straight
//! unless one of its nodes provides a handle:
//!
//! - the start node's outgoing handle, which is its stored control point
//!   mirrored through the node, if the node starts a curve
//! - the end node's stored control point, which is the handle of the curve
//!   arriving at it
//!
//! One handle makes a quadratic and two handles a cubic Bezier curve. The
//! mirroring is done in the local tangent plane of the node.

use log::trace;
use lyon_geom::{point, CubicBezierSegment, QuadraticBezierSegment};

use crate::apt::Node;
use crate::geom::{plane, GeoPoint};

/// Default distance in meters between two samples of a curve.
pub const DEFAULT_SPACING_M: f64 = 4.0;
pub const DEFAULT_MIN_SAMPLES: usize = 8;
pub const DEFAULT_MAX_SAMPLES: usize = 64;

/// Number of vertices to sample per curved edge, both ends included.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Resolution {
    /// The same number of vertices for every curve.
    Fixed(usize),
    /// One vertex every `spacing_m` along the curve's control polygon,
    /// clamped to `min..=max`.
    Adaptive {
        spacing_m: f64,
        min: usize,
        max: usize,
    },
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Adaptive {
            spacing_m: DEFAULT_SPACING_M,
            min: DEFAULT_MIN_SAMPLES,
            max: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl Resolution {
    /// Returns the number of samples for a curve of approximately
    /// `length_m`.
    pub fn samples(&self, length_m: f64) -> usize {
        match *self {
            Self::Fixed(n) => n.max(2),
            Self::Adaptive {
                spacing_m,
                min,
                max,
            } => {
                let min = min.max(2);
                let max = max.max(min);

                if spacing_m > 0.0 && length_m.is_finite() {
                    ((length_m / spacing_m).ceil() as usize + 1).clamp(min, max)
                } else {
                    min
                }
            }
        }
    }
}

/// Reflects the `control` point through the `node`.
///
/// The reflection is computed in meters of the local tangent plane at the
/// node, i.e. `2 * node - control`.
pub fn mirror(node: GeoPoint, control: GeoPoint) -> GeoPoint {
    let (dx, dy) = plane::to_local_meters(node, control);
    plane::to_geo(node, -dx, -dy)
}

/// Returns the handle of the curve leaving the node.
pub fn outgoing_control(node: &Node) -> Option<GeoPoint> {
    node.control
        .filter(|_| node.is_curve_start)
        .map(|control| mirror(node.position(), control))
}

/// Returns the handle of the curve arriving at the node.
pub fn incoming_control(node: &Node) -> Option<GeoPoint> {
    node.control
}

/// A directed edge between two nodes.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Edge {
    Straight {
        from: GeoPoint,
        to: GeoPoint,
    },
    Quadratic {
        from: GeoPoint,
        ctrl: GeoPoint,
        to: GeoPoint,
    },
    Cubic {
        from: GeoPoint,
        ctrl1: GeoPoint,
        ctrl2: GeoPoint,
        to: GeoPoint,
    },
}

impl Edge {
    /// Creates the edge leaving `start` and arriving at `end`.
    pub fn between(start: &Node, end: &Node) -> Self {
        let from = start.position();
        let to = end.position();

        // a curve can't start and end at the same point
        if from == to {
            return Self::Straight { from, to };
        }

        match (outgoing_control(start), incoming_control(end)) {
            (None, None) => Self::Straight { from, to },
            (Some(ctrl), None) | (None, Some(ctrl)) => Self::Quadratic { from, ctrl, to },
            (Some(ctrl1), Some(ctrl2)) => Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            },
        }
    }

    pub fn from(&self) -> GeoPoint {
        match *self {
            Self::Straight { from, .. } | Self::Quadratic { from, .. } | Self::Cubic { from, .. } => {
                from
            }
        }
    }

    pub fn to(&self) -> GeoPoint {
        match *self {
            Self::Straight { to, .. } | Self::Quadratic { to, .. } | Self::Cubic { to, .. } => to,
        }
    }

    pub fn is_curve(&self) -> bool {
        !matches!(self, Self::Straight { .. })
    }

    /// Returns the length in meters of the control polygon, which is an upper
    /// bound of the curve's length.
    pub fn control_polygon_length(&self) -> f64 {
        match *self {
            Self::Straight { from, to } => plane::distance(from, to),
            Self::Quadratic { from, ctrl, to } => {
                plane::distance(from, ctrl) + plane::distance(ctrl, to)
            }
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                plane::distance(from, ctrl1)
                    + plane::distance(ctrl1, ctrl2)
                    + plane::distance(ctrl2, to)
            }
        }
    }

    /// Returns the vertices along the edge, both ends included.
    ///
    /// A straight edge yields exactly its two ends.
    pub fn vertices(&self, resolution: &Resolution) -> Vertices {
        let count = if self.is_curve() {
            let length_m = self.control_polygon_length();
            let count = resolution.samples(length_m);
            trace!("sampling {count} vertices on {length_m:.1} m curve");
            count
        } else {
            2
        };

        Vertices {
            edge: *self,
            count,
            next: 0,
        }
    }

    /// Samples the curve at `t` in the local plane at the edge's start.
    fn sample(&self, t: f64) -> GeoPoint {
        let origin = self.from();
        let local = |p: GeoPoint| {
            let (dx, dy) = plane::to_local_meters(origin, p);
            point(dx, dy)
        };

        let p = match *self {
            Self::Straight { from, to } => local(from).lerp(local(to), t),
            Self::Quadratic { from, ctrl, to } => QuadraticBezierSegment {
                from: local(from),
                ctrl: local(ctrl),
                to: local(to),
            }
            .sample(t),
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => CubicBezierSegment {
                from: local(from),
                ctrl1: local(ctrl1),
                ctrl2: local(ctrl2),
                to: local(to),
            }
            .sample(t),
        };

        plane::to_geo(origin, p.x, p.y)
    }
}

/// Iterator over the vertices of an [`Edge`].
///
/// The vertices are computed lazily. The first and last vertex are the exact
/// positions of the edge's nodes.
#[derive(Clone, Debug)]
pub struct Vertices {
    edge: Edge,
    count: usize,
    next: usize,
}

impl Iterator for Vertices {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next;

        if i >= self.count {
            return None;
        }

        self.next += 1;

        Some(if i == 0 {
            self.edge.from()
        } else if i + 1 == self.count {
            self.edge.to()
        } else {
            self.edge.sample(i as f64 / (self.count - 1) as f64)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Vertices {}

/// Returns the edges between consecutive nodes.
///
/// With `close` an edge from the last back to the first node is appended.
pub fn chain_edges(nodes: &[Node], close: bool) -> impl Iterator<Item = Edge> + '_ {
    let closing = match (close, nodes.last(), nodes.first()) {
        (true, Some(last), Some(first)) if nodes.len() > 1 => Some(Edge::between(last, first)),
        _ => None,
    };

    nodes
        .windows(2)
        .map(|pair| Edge::between(&pair[0], &pair[1]))
        .chain(closing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: GeoPoint = coord!(60.3172, 24.9633);

    fn local(p: GeoPoint) -> (f64, f64) {
        plane::to_local_meters(NODE, p)
    }

    #[test]
    fn mirror_reflects_through_node_in_meters() {
        let control = plane::to_geo(NODE, 30.0, -12.0);
        let (dx, dy) = local(mirror(NODE, control));

        assert!((dx + 30.0).abs() < 1e-6);
        assert!((dy - 12.0).abs() < 1e-6);
    }

    #[test]
    fn outgoing_control_is_mirrored_stored_control() {
        let control = plane::to_geo(NODE, -8.0, 25.0);
        let n = Node::curve(NODE, control);
        let out = outgoing_control(&n).expect("curve node should have a handle");

        // 2 * node - control with the node as origin
        let (dx, dy) = local(out);
        assert!((dx - 8.0).abs() < 1e-6);
        assert!((dy + 25.0).abs() < 1e-6);
        assert_eq!(incoming_control(&n), Some(control));
    }

    #[test]
    fn control_without_curve_start_only_shapes_arriving_edge() {
        let mut n = Node::curve(NODE, plane::to_geo(NODE, 5.0, 5.0));
        n.is_curve_start = false;

        assert_eq!(outgoing_control(&n), None);
        assert!(incoming_control(&n).is_some());
    }

    #[test]
    fn straight_edge_yields_its_ends() {
        let a = Node::new(NODE);
        let b = Node::new(plane::to_geo(NODE, 120.0, 40.0));
        let edge = Edge::between(&a, &b);
        let vertices: Vec<_> = edge.vertices(&Resolution::Fixed(16)).collect();

        assert!(!edge.is_curve());
        assert_eq!(vertices, vec![a.position(), b.position()]);
    }

    #[test]
    fn quadratic_edge_from_mirrored_handle() {
        // the handle stored at `a` points backward, so the curve bulges
        // forward to (0, 50)
        let a = Node::curve(NODE, plane::to_geo(NODE, 0.0, -50.0));
        let b = Node::new(plane::to_geo(NODE, 100.0, 0.0));
        let edge = Edge::between(&a, &b);
        let vertices: Vec<_> = edge.vertices(&Resolution::Fixed(3)).collect();

        assert!(matches!(edge, Edge::Quadratic { .. }));
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], a.position());
        assert_eq!(vertices[2], b.position());

        // B(0.5) = 0.25 P0 + 0.5 C + 0.25 P1
        let (dx, dy) = local(vertices[1]);
        assert!((dx - 25.0).abs() < 1e-6);
        assert!((dy - 25.0).abs() < 1e-6);
    }

    #[test]
    fn both_handles_make_cubic_edge() {
        let a = Node::curve(NODE, plane::to_geo(NODE, -10.0, 0.0));
        let b = Node::curve(plane::to_geo(NODE, 100.0, 0.0), plane::to_geo(NODE, 90.0, 20.0));

        match Edge::between(&a, &b) {
            Edge::Cubic { ctrl1, ctrl2, .. } => {
                let (x1, y1) = local(ctrl1);
                assert!((x1 - 10.0).abs() < 1e-6 && y1.abs() < 1e-6);
                assert_eq!(ctrl2, plane::to_geo(NODE, 90.0, 20.0));
            }
            edge => panic!("expected cubic edge but got {edge:?}"),
        }
    }

    #[test]
    fn coincident_nodes_are_straight() {
        let a = Node::curve(NODE, plane::to_geo(NODE, 10.0, 10.0));
        let edge = Edge::between(&a, &a.clone());
        assert_eq!(edge.vertices(&Resolution::default()).count(), 2);
    }

    #[test]
    fn adaptive_resolution_is_bounded() {
        let resolution = Resolution::default();
        assert_eq!(resolution.samples(1.0), DEFAULT_MIN_SAMPLES);
        assert_eq!(resolution.samples(100.0), 26);
        assert_eq!(resolution.samples(10_000.0), DEFAULT_MAX_SAMPLES);
        assert_eq!(Resolution::Fixed(0).samples(100.0), 2);
    }

    #[test]
    fn vertices_are_restartable() {
        let a = Node::curve(NODE, plane::to_geo(NODE, 0.0, -30.0));
        let b = Node::new(plane::to_geo(NODE, 80.0, 10.0));
        let vertices = Edge::between(&a, &b).vertices(&Resolution::default());

        let first: Vec<_> = vertices.clone().collect();
        let second: Vec<_> = vertices.collect();
        assert!(first.len() >= DEFAULT_MIN_SAMPLES);
        assert_eq!(first, second);
    }

    #[test]
    fn chain_edges_close_ring() {
        let nodes = [
            Node::new(NODE),
            Node::new(plane::to_geo(NODE, 10.0, 0.0)),
            Node::new(plane::to_geo(NODE, 10.0, 10.0)),
        ];

        let edges: Vec<_> = chain_edges(&nodes, true).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].to(), NODE);
        assert_eq!(chain_edges(&nodes, false).count(), 2);
    }
}
