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

//! Typed airport records.
//!
//! The records of one airport are the input of the [`Compiler`]. They are
//! produced by an apt.dat parser, which turns each row into one [`Record`] and
//! keeps the row order. Chains are not nested: a chain header is followed by
//! its [`Node`] records.
//!
//! [`Compiler`]: crate::Compiler

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod fields;
mod node;
mod records;
mod runway;

pub use fields::*;
pub use node::Node;
pub use records::*;
pub use runway::{RunwayEnd, RunwaySpec};

/// A single row of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Record {
    Airport(AirportHeader),
    Runway(RunwaySpec),
    Pavement(PavementHeader),
    LinearFeature(LinearFeatureHeader),
    Boundary(BoundaryHeader),
    Node(Node),
    StartupLocation(StartupLocation),
    StartupMetadata(StartupMetadata),
    Windsock(Windsock),
    Sign(Sign),
    Metadata { key: String, value: Option<String> },
    /// A row the compiler doesn't know, identified by its row code.
    Unknown(u16),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Airport(_) => RecordKind::Airport,
            Self::Runway(_) => RecordKind::Runway,
            Self::Pavement(_) => RecordKind::Pavement,
            Self::LinearFeature(_) => RecordKind::LinearFeature,
            Self::Boundary(_) => RecordKind::Boundary,
            Self::Node(_) => RecordKind::Node,
            Self::StartupLocation(_) => RecordKind::StartupLocation,
            Self::StartupMetadata(_) => RecordKind::StartupMetadata,
            Self::Windsock(_) => RecordKind::Windsock,
            Self::Sign(_) => RecordKind::Sign,
            Self::Metadata { .. } => RecordKind::Metadata,
            Self::Unknown(code) => RecordKind::Unknown(*code),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordKind {
    Airport,
    Runway,
    Pavement,
    LinearFeature,
    Boundary,
    Node,
    StartupLocation,
    StartupMetadata,
    Windsock,
    Sign,
    Metadata,
    Unknown(u16),
}

impl RecordKind {
    /// Returns the apt.dat row code of the record.
    ///
    /// Nodes share the codes 111 to 116 and return the plain node code.
    pub fn row_code(&self) -> u16 {
        match self {
            Self::Airport => 1,
            Self::Runway => 100,
            Self::Pavement => 110,
            Self::Node => 111,
            Self::LinearFeature => 120,
            Self::Boundary => 130,
            Self::Windsock => 19,
            Self::Sign => 20,
            Self::StartupLocation => 1300,
            Self::StartupMetadata => 1301,
            Self::Metadata => 1302,
            Self::Unknown(code) => *code,
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Airport => write!(f, "airport"),
            Self::Runway => write!(f, "runway"),
            Self::Pavement => write!(f, "pavement"),
            Self::LinearFeature => write!(f, "linear feature"),
            Self::Boundary => write!(f, "boundary"),
            Self::Node => write!(f, "node"),
            Self::StartupLocation => write!(f, "startup location"),
            Self::StartupMetadata => write!(f, "startup location metadata"),
            Self::Windsock => write!(f, "windsock"),
            Self::Sign => write!(f, "sign"),
            Self::Metadata => write!(f, "metadata"),
            Self::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}
