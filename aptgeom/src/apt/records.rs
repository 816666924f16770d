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

//! Header and point records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{LocationType, SignSize, SurfaceType};
use crate::geom::GeoPoint;

/// Header of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportHeader {
    pub ident: String,
    pub name: String,
    pub elevation_ft: f64,
}

/// Header of a pavement (taxiway or apron) chain.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PavementHeader {
    pub surface_type: SurfaceType,
    pub smoothness: f64,
    /// Orientation of the pavement texture in true degrees.
    pub texture_orientation: f64,
    pub name: String,
}

/// Header of a linear feature chain such as painted lines or light strings.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearFeatureHeader {
    pub name: String,
}

/// Header of the airport boundary chain.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryHeader {
    pub name: String,
}

/// A location where aircraft can start, e.g. a gate or tie down.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StartupLocation {
    pub position: GeoPoint,
    /// True heading in degrees.
    pub heading: f64,
    pub location_type: LocationType,
    /// Pipe separated aircraft types, e.g. `heavy|jets`.
    pub airplane_types: String,
    pub name: String,
}

/// Additional information of the preceding startup location.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StartupMetadata {
    /// ICAO width code from `A` to `F`.
    pub width_code: Option<char>,
    /// Operation type, e.g. `airline` or `cargo`.
    pub operation_type: String,
    /// ICAO airline codes.
    pub airlines: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Windsock {
    pub position: GeoPoint,
    pub illuminated: bool,
    pub name: String,
}

/// A taxiway sign.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sign {
    pub position: GeoPoint,
    /// True heading in degrees.
    pub heading: f64,
    pub size: SignSize,
    /// Sign text in the apt.dat sign syntax.
    pub text: String,
}
