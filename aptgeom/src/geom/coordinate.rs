// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::plane;

/// Geographic position in WGS84 degrees.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct GeoPoint {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl GeoPoint {
    /// Creates a new point.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the bearing in radians from this point to the `other`,
    /// clockwise from true north.
    ///
    /// Uses the local tangent plane at this point.
    pub fn bearing(&self, other: &GeoPoint) -> f64 {
        plane::bearing(*self, *other)
    }

    /// Returns the distance in meters from this point to the `other`.
    ///
    /// Uses the local tangent plane at this point, which is accurate enough
    /// within the perimeter of an airport.
    pub fn dist(&self, other: &GeoPoint) -> f64 {
        plane::distance(*self, *other)
    }

    /// Returns `true` if both coordinates are within `tolerance` degrees.
    pub fn approx_eq(&self, other: &GeoPoint, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() <= tolerance
            && (self.longitude - other.longitude).abs() <= tolerance
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: GeoPoint = coord!(53.63, 9.99);

    #[test]
    fn bearing() {
        // 3-4-5 triangle towards north-east
        let other = plane::to_geo(ORIGIN, 300.0, 400.0);
        assert!((ORIGIN.bearing(&other).to_degrees() - 36.8699).abs() < 1e-3);
    }

    #[test]
    fn dist() {
        let other = plane::to_geo(ORIGIN, 300.0, 400.0);
        assert!((ORIGIN.dist(&other) - 500.0).abs() < 1e-6);
    }

    #[test]
    fn geo_axis_order() {
        let c: geo::Coord<f64> = ORIGIN.into();
        assert_eq!(c.x, ORIGIN.longitude);
        assert_eq!(c.y, ORIGIN.latitude);
        assert_eq!(GeoPoint::from(c), ORIGIN);
    }
}
