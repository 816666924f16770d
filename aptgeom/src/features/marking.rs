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

//! Linear markings such as painted lines and lights.
//!
//! A chain of a linear feature is split into separate lines where the painted
//! or lighting line type changes. The node with the new type ends the previous
//! line and starts the next one, so consecutive lines share that vertex.

use std::mem;

use geo::{Coord, LineString};
use log::trace;

use super::{Feature, Geometry};
use crate::apt::{LinearFeatureHeader, Node};
use crate::curve::{Edge, Resolution};
use crate::Error;

/// A line of constant painted and lighting type.
#[derive(Clone, PartialEq, Debug)]
pub struct Marking {
    pub line: LineString<f64>,
    pub painted_line_type: Option<u16>,
    pub lighting_line_type: Option<u16>,
}

#[derive(Copy, Clone, Default, Debug)]
struct LineTypes {
    painted: Option<u16>,
    lighting: Option<u16>,
}

impl LineTypes {
    /// Returns `true` if the node sets a type that differs from the current.
    fn conflicts(&self, node: &Node) -> bool {
        let differs = |current: Option<u16>, new: Option<u16>| {
            matches!((current, new), (Some(a), Some(b)) if a != b)
        };
        differs(self.painted, node.painted_line_type)
            || differs(self.lighting, node.lighting_line_type)
    }

    /// Takes the types of the node that are not set yet.
    fn merge(&mut self, node: &Node) {
        self.painted = self.painted.or(node.painted_line_type);
        self.lighting = self.lighting.or(node.lighting_line_type);
    }
}

/// Collects the nodes of a linear feature and builds its lines.
///
/// A node that ends the line terminates an open chain, a node that closes the
/// ring terminates a chain with an edge back to its first node.
#[derive(Clone, Debug, Default)]
pub struct LineBuilder {
    chains: Vec<Vec<Node>>,
    current: Vec<Node>,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        let terminates = node.is_terminator();
        self.current.push(node);

        if terminates {
            self.chains.push(mem::take(&mut self.current));
        }
    }

    /// Builds the lines of all chains in order.
    ///
    /// Every line that fails is returned as error in its place. An unterminated
    /// tail of nodes is returned as [`Error::IncompleteChain`] at the end.
    pub fn build(self, resolution: &Resolution) -> Vec<Result<Marking, Error>> {
        let mut lines: Vec<_> = self
            .chains
            .iter()
            .flat_map(|chain| split_chain(chain, resolution))
            .collect();

        if !self.current.is_empty() {
            lines.push(Err(Error::IncompleteChain {
                nodes: self.current.len(),
            }));
        }

        if lines.is_empty() {
            lines.push(Err(Error::EmptyChain));
        }

        lines
    }
}

fn split_chain(chain: &[Node], resolution: &Resolution) -> Vec<Result<Marking, Error>> {
    let mut nodes: Vec<&Node> = chain.iter().collect();

    if let (Some(first), Some(last)) = (chain.first(), chain.last()) {
        if chain.len() > 1 && last.closes_ring && first.position() != last.position() {
            nodes.push(first);
        }
    }

    let mut lines = Vec::new();
    let mut start = 0;
    let mut types = LineTypes::default();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();

        if types.conflicts(node) {
            // the types of the last node never start a new line
            if is_last {
                continue;
            }

            trace!("splitting line at node {i}");
            lines.push(line(&nodes[start..=i], types, resolution));
            start = i;
            types = LineTypes::default();
        }

        types.merge(node);
    }

    lines.push(line(&nodes[start..], types, resolution));

    lines
}

fn line(nodes: &[&Node], types: LineTypes, resolution: &Resolution) -> Result<Marking, Error> {
    let mut coords: Vec<Coord<f64>> = Vec::new();

    for (i, pair) in nodes.windows(2).enumerate() {
        let skip = usize::from(i > 0);
        let edge = Edge::between(pair[0], pair[1]);
        coords.extend(edge.vertices(resolution).skip(skip).map(Coord::from));
    }

    if !coords.iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
        return Err(Error::InvalidCoordinate);
    }

    coords.dedup();

    if coords.len() < 2 {
        return Err(Error::DegenerateLine);
    }

    Ok(Marking {
        line: LineString::from(coords),
        painted_line_type: types.painted,
        lighting_line_type: types.lighting,
    })
}

impl LinearFeatureHeader {
    /// Returns the feature of the `marking` line.
    pub fn to_feature(&self, marking: Marking) -> Feature {
        Feature::new(Geometry::LineString(marking.line))
            .with("name", self.name.as_str())
            .with("painted_line_type", marking.painted_line_type)
            .with("lighting_line_type", marking.lighting_line_type)
    }
}
