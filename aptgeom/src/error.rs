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

use std::error;
use std::fmt;

use crate::apt::RecordKind;

/// Errors raised while compiling airport records into geometry.
///
/// Only [`Error::Export`] is fatal. All other errors are confined to the
/// feature that raised them and are reported as a [`Warning`].
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A chain of nodes ended without a ring or line terminator.
    IncompleteChain { nodes: usize },
    /// A chain header has no nodes.
    EmptyChain,
    /// A node appeared without a preceding chain header.
    OrphanNode,
    /// Startup location metadata without a preceding startup location.
    OrphanStartupMetadata,
    /// A code could not be mapped to a known variant.
    InvalidCode { field: &'static str, code: u8 },
    /// A textual value could not be mapped to a known variant.
    InvalidValue { field: &'static str, value: String },
    /// A node or vertex with a latitude or longitude that is not finite.
    InvalidCoordinate,
    /// A ring has fewer than three distinct vertices.
    DegenerateRing { distinct: usize },
    /// A ring encloses no area.
    ZeroAreaRing,
    /// A line has fewer than two distinct vertices.
    DegenerateLine,
    /// Both ends of a runway are at the same position.
    CoincidentRunwayEnds,
    /// A runway width that is not a positive number.
    InvalidWidth(f64),
    /// The export boundary failed to write the features.
    Export(String),
}

impl Error {
    /// Returns `true` if the error stops the conversion.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteChain { nodes } => {
                write!(f, "chain ends after {nodes} node(s) without terminator")
            }
            Self::EmptyChain => write!(f, "chain has no nodes"),
            Self::OrphanNode => write!(f, "node without chain header"),
            Self::OrphanStartupMetadata => {
                write!(f, "startup location metadata without startup location")
            }
            Self::InvalidCode { field, code } => write!(f, "unknown {field} code {code}"),
            Self::InvalidValue { field, value } => write!(f, "invalid value for {field}: {value}"),
            Self::InvalidCoordinate => write!(f, "coordinate is not a finite number"),
            Self::DegenerateRing { distinct } => {
                write!(f, "ring has {distinct} distinct vertices but needs at least 3")
            }
            Self::ZeroAreaRing => write!(f, "ring has no area"),
            Self::DegenerateLine => write!(f, "line has fewer than 2 distinct vertices"),
            Self::CoincidentRunwayEnds => write!(f, "runway ends are at the same position"),
            Self::InvalidWidth(width) => write!(f, "runway width {width} m is invalid"),
            Self::Export(e) => write!(f, "export failed: {e}"),
        }
    }
}

impl error::Error for Error {}

/// A feature that was skipped while compiling an airport.
#[derive(Clone, PartialEq, Debug)]
pub struct Warning {
    /// Ident of the airport or an empty string if it has no header.
    pub airport: String,
    /// Kind of the record that started the skipped feature.
    pub kind: RecordKind,
    /// Index of that record in the airport's records.
    pub index: usize,
    pub error: Error,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} record #{}: {}",
            self.airport, self.kind, self.index, self.error
        )
    }
}
