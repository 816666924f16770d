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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::GeoPoint;

/// A point of a pavement, boundary or linear feature chain.
///
/// The `control` point is the handle of the curve *arriving* at this node,
/// stored as an absolute position. A node that is the start of a curve uses
/// that handle mirrored through the node for the edge leaving it, which
/// keeps the tangent continuous across the node.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub latitude: f64,
    pub longitude: f64,
    pub control: Option<GeoPoint>,
    /// The edge leaving this node bends with the mirrored control point.
    pub is_curve_start: bool,
    /// The node is the last of a ring, which closes to the ring's first node.
    pub closes_ring: bool,
    /// The node is the last of an open line.
    pub ends_line: bool,
    /// Painted line type from this node onward.
    pub painted_line_type: Option<u16>,
    /// Lighting line type from this node onward.
    pub lighting_line_type: Option<u16>,
}

impl Node {
    /// Creates a node of a straight segment.
    pub fn new(position: GeoPoint) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            ..Default::default()
        }
    }

    /// Creates a node with a control point where a curve arrives and from
    /// which the next curve starts.
    pub fn curve(position: GeoPoint, control: GeoPoint) -> Self {
        Self {
            control: Some(control),
            is_curve_start: true,
            ..Self::new(position)
        }
    }

    /// Marks the node as the last one of a ring.
    pub fn closing(mut self) -> Self {
        self.closes_ring = true;
        self
    }

    /// Marks the node as the last one of an open line.
    pub fn ending(mut self) -> Self {
        self.ends_line = true;
        self
    }

    /// Sets the painted and lighting line types from this node onward.
    pub fn with_line_types(mut self, painted: Option<u16>, lighting: Option<u16>) -> Self {
        self.painted_line_type = painted;
        self.lighting_line_type = lighting;
        self
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Returns `true` if the node terminates a ring or line.
    pub fn is_terminator(&self) -> bool {
        self.closes_ring || self.ends_line
    }
}
