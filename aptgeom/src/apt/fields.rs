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

//! Coded field values of airport records.

use crate::Error;

code_enum! {
    /// Surface of runways and pavements.
    SurfaceType, "surface type" {
        Asphalt = 1 => "ASPHALT",
        Concrete = 2 => "CONCRETE",
        TurfOrGrass = 3 => "TURF_OR_GRASS",
        /// Dirt (brown)
        Dirt = 4 => "DIRT",
        /// Gravel (grey)
        Gravel = 5 => "GRAVEL",
        DryLakebed = 12 => "DRY_LAKEBED",
        WaterRunway = 13 => "WATER_RUNWAY",
        SnowOrIce = 14 => "SNOW_OR_ICE",
        Transparent = 15 => "TRANSPARENT",
    }
}

code_enum! {
    ShoulderSurfaceType, "shoulder surface type" {
        None = 0 => "NONE",
        Asphalt = 1 => "ASPHALT",
        Concrete = 2 => "CONCRETE",
    }
}

code_enum! {
    /// Markings painted on a runway end.
    RunwayMarking, "runway marking" {
        None = 0 => "NONE",
        Visual = 1 => "VISUAL",
        NonPrecision = 2 => "NON_PRECISION",
        Precision = 3 => "PRECISION",
        UkNonPrecision = 4 => "UK_NON_PRECISION",
        UkPrecision = 5 => "UK_PRECISION",
    }
}

code_enum! {
    SignSize, "sign size" {
        Small = 1 => "SMALL",
        Medium = 2 => "MEDIUM",
        Large = 3 => "LARGE",
        /// Distance-remaining sign on the runway edge.
        LargeDistanceRemaining = 4 => "LARGE_DISTANCE_REMAINING",
        SmallDistanceRemaining = 5 => "SMALL_DISTANCE_REMAINING",
    }
}

/// Kind of a startup location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationType {
    Gate,
    Hangar,
    TieDown,
    Misc,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gate => "gate",
            Self::Hangar => "hangar",
            Self::TieDown => "tie_down",
            Self::Misc => "misc",
        }
    }
}

impl TryFrom<&str> for LocationType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "gate" => Ok(Self::Gate),
            "hangar" => Ok(Self::Hangar),
            "tie_down" | "tie-down" => Ok(Self::TieDown),
            "misc" => Ok(Self::Misc),
            _ => Err(Error::InvalidValue {
                field: "startup location type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
