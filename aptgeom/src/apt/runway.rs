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

use super::{RunwayMarking, ShoulderSurfaceType, SurfaceType};
use crate::geom::GeoPoint;

/// One end of a land runway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayEnd {
    /// Runway designator of this end, e.g. `09L`.
    pub designator: String,
    /// Position of the runway end on the centerline.
    pub position: GeoPoint,
    /// Length of the displaced threshold in meters.
    pub displaced_threshold_m: f64,
    /// Length of the overrun or blast pad in meters.
    pub blastpad_m: f64,
    pub marking: RunwayMarking,
    pub approach_lighting: u8,
    /// Touchdown zone lighting.
    pub tdz_lighting: bool,
    /// Runway end identifier lights.
    pub reil: u8,
}

impl RunwayEnd {
    pub fn new(designator: &str, position: GeoPoint) -> Self {
        Self {
            designator: designator.to_string(),
            position,
            displaced_threshold_m: 0.0,
            blastpad_m: 0.0,
            marking: RunwayMarking::None,
            approach_lighting: 0,
            tdz_lighting: false,
            reil: 0,
        }
    }
}

/// A land runway given by its two ends and width.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwaySpec {
    pub width_m: f64,
    pub surface_type: SurfaceType,
    pub shoulder_surface_type: ShoulderSurfaceType,
    /// Runway smoothness from 0 (smooth) to 1 (rough).
    pub smoothness: f64,
    pub centerline_lights: u8,
    pub edge_lights: u8,
    pub auto_distance_remaining_signs: bool,
    pub end_a: RunwayEnd,
    pub end_b: RunwayEnd,
}

impl RunwaySpec {
    /// Creates an asphalt runway without lights between both ends.
    pub fn new(end_a: RunwayEnd, end_b: RunwayEnd, width_m: f64) -> Self {
        Self {
            width_m,
            surface_type: SurfaceType::Asphalt,
            shoulder_surface_type: ShoulderSurfaceType::None,
            smoothness: 0.25,
            centerline_lights: 0,
            edge_lights: 0,
            auto_distance_remaining_signs: false,
            end_a,
            end_b,
        }
    }

    /// Returns the designator of both ends, e.g. `09L/27R`.
    pub fn designator(&self) -> String {
        format!("{}/{}", self.end_a.designator, self.end_b.designator)
    }

    pub fn displacement_a_m(&self) -> f64 {
        self.end_a.displaced_threshold_m
    }

    pub fn displacement_b_m(&self) -> f64 {
        self.end_b.displaced_threshold_m
    }

    pub fn blastpad_a_m(&self) -> f64 {
        self.end_a.blastpad_m
    }

    pub fn blastpad_b_m(&self) -> f64 {
        self.end_b.blastpad_m
    }
}
