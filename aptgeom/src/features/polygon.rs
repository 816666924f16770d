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

//! Pavement and boundary polygons.

use std::mem;

use geo::Polygon;
use log::trace;

use super::{Feature, Geometry};
use crate::apt::{BoundaryHeader, Node, PavementHeader};
use crate::curve::Resolution;
use crate::ring::{self, Closure, RingRole};
use crate::Error;

/// Collects the nodes of a polygon chain and builds the polygon.
///
/// A node that closes the ring or ends the line terminates the current ring.
/// The first ring is the outer ring and every further ring is a hole.
#[derive(Clone, Debug, Default)]
pub struct PolygonBuilder {
    rings: Vec<Vec<Node>>,
    current: Vec<Node>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        let terminates = node.is_terminator();
        self.current.push(node);

        if terminates {
            self.rings.push(mem::take(&mut self.current));
        }
    }

    /// Returns the number of nodes added so far.
    pub fn len(&self) -> usize {
        self.rings.iter().map(Vec::len).sum::<usize>() + self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the polygon from the rings.
    ///
    /// Fails if nodes follow the last terminated ring, if there are no rings
    /// or if any ring is degenerate.
    pub fn build(self, resolution: &Resolution) -> Result<Polygon<f64>, Error> {
        if !self.current.is_empty() {
            return Err(Error::IncompleteChain {
                nodes: self.current.len(),
            });
        }

        let mut rings = self.rings.iter().enumerate().map(|(i, nodes)| {
            let role = if i == 0 {
                RingRole::Outer
            } else {
                RingRole::Hole
            };
            trace!("assembling {role:?} ring of {} nodes", nodes.len());
            ring::assemble(nodes, Closure::detect(nodes), role, resolution)
        });

        let exterior = rings.next().ok_or(Error::EmptyChain)??;
        let interiors = rings.collect::<Result<Vec<_>, _>>()?;

        Ok(Polygon::new(exterior, interiors))
    }
}

impl PavementHeader {
    /// Returns the pavement feature with the `polygon`.
    pub fn to_feature(&self, polygon: Polygon<f64>) -> Feature {
        Feature::new(Geometry::Polygon(polygon))
            .with("name", self.name.as_str())
            .with("surface_type", self.surface_type.as_str())
            .with("smoothness", self.smoothness)
            .with("texture_orientation", self.texture_orientation)
    }
}

impl BoundaryHeader {
    /// Returns the boundary feature with the `polygon`.
    pub fn to_feature(&self, polygon: Polygon<f64>) -> Feature {
        Feature::new(Geometry::Polygon(polygon)).with("name", self.name.as_str())
    }
}
