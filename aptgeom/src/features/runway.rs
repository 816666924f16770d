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

//! Runway corridors.
//!
//! A runway is a rectangle around the line between its two ends. Displaced
//! thresholds extend from an end inward along the runway and blast pads from an
//! end outward. Each zone is its own polygon.

use std::fmt::{Display, Formatter};

use geo::{Coord, Polygon};
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Feature, Geometry};
use crate::apt::{RunwayEnd, RunwaySpec};
use crate::geom::constants::VERTEX_TOLERANCE_DEG;
use crate::geom::{plane, GeoPoint};
use crate::ring::{self, RingRole};
use crate::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    Runway,
    DisplacedThreshold,
    Blastpad,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runway => "runway",
            Self::DisplacedThreshold => "displaced_threshold",
            Self::Blastpad => "blastpad",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A zone of a runway.
#[derive(Clone, PartialEq, Debug)]
pub struct Corridor {
    pub zone: Zone,
    /// Designator of the end a threshold or blast pad belongs to.
    pub end: Option<String>,
    /// Length of the zone along the runway in meters.
    pub length_m: f64,
    pub polygon: Polygon<f64>,
}

/// Returns the rectangle of `width_m` centered on the line from `p0` to `p1`.
///
/// The corners at each end are offset perpendicular to the line as seen from
/// that end.
pub fn rectangle(p0: GeoPoint, p1: GeoPoint, width_m: f64) -> Result<Polygon<f64>, Error> {
    let half_width = width_m / 2.0;
    let (left_0, right_0) = plane::perpendicular_offset(p0, p1, half_width);
    // looking back from p1 the sides are swapped
    let (right_1, left_1) = plane::perpendicular_offset(p1, p0, half_width);

    let coords: Vec<Coord<f64>> = [left_0, right_0, right_1, left_1]
        .into_iter()
        .map(Coord::from)
        .collect();

    ring::close(coords, RingRole::Outer).map(|exterior| Polygon::new(exterior, vec![]))
}

/// Builds the runway corridor and the zones at both ends.
///
/// The outer error means that the runway itself can't be built. An error of a
/// single zone skips only that zone. Displaced thresholds are clamped to the
/// runway's length.
pub fn corridors(spec: &RunwaySpec) -> Result<Vec<Result<Corridor, Error>>, Error> {
    if !(spec.width_m.is_finite() && spec.width_m > 0.0) {
        return Err(Error::InvalidWidth(spec.width_m));
    }

    let a = spec.end_a.position;
    let b = spec.end_b.position;

    if a.approx_eq(&b, VERTEX_TOLERANCE_DEG) {
        return Err(Error::CoincidentRunwayEnds);
    }

    let length_m = plane::distance(a, b);
    trace!("runway {} is {length_m:.1} m long", spec.designator());

    let mut zones = vec![Ok(Corridor {
        zone: Zone::Runway,
        end: None,
        length_m,
        polygon: rectangle(a, b, spec.width_m)?,
    })];

    zones.extend(end_zones(&spec.end_a, b, length_m, spec.width_m));
    zones.extend(end_zones(&spec.end_b, a, length_m, spec.width_m));

    Ok(zones)
}

/// Returns the displaced threshold and blast pad of the `end` whose opposite
/// end is at `other`.
fn end_zones(
    end: &RunwayEnd,
    other: GeoPoint,
    runway_length_m: f64,
    width_m: f64,
) -> Vec<Result<Corridor, Error>> {
    let inward = plane::bearing(end.position, other);
    let mut zones = Vec::new();

    if end.displaced_threshold_m > 0.0 {
        let length_m = end.displaced_threshold_m.min(runway_length_m);
        let threshold = plane::destination(end.position, inward, length_m);
        zones.push(corridor(
            Zone::DisplacedThreshold,
            end,
            end.position,
            threshold,
            length_m,
            width_m,
        ));
    }

    if end.blastpad_m > 0.0 {
        let outward = plane::destination(end.position, inward, -end.blastpad_m);
        zones.push(corridor(
            Zone::Blastpad,
            end,
            outward,
            end.position,
            end.blastpad_m,
            width_m,
        ));
    }

    zones
}

fn corridor(
    zone: Zone,
    end: &RunwayEnd,
    p0: GeoPoint,
    p1: GeoPoint,
    length_m: f64,
    width_m: f64,
) -> Result<Corridor, Error> {
    Ok(Corridor {
        zone,
        end: Some(end.designator.clone()),
        length_m,
        polygon: rectangle(p0, p1, width_m)?,
    })
}

impl RunwaySpec {
    /// Returns the feature of the runway's `corridor`.
    pub fn to_feature(&self, corridor: Corridor) -> Feature {
        Feature::new(Geometry::Polygon(corridor.polygon))
            .with("designator", self.designator())
            .with("zone", corridor.zone.as_str())
            .with("end", corridor.end)
            .with("width", self.width_m)
            .with("length", corridor.length_m)
            .with("surface_type", self.surface_type.as_str())
            .with("shoulder_surface_type", self.shoulder_surface_type.as_str())
            .with("smoothness", self.smoothness)
            .with("centerline_lights", self.centerline_lights)
            .with("edge_lights", self.edge_lights)
            .with("auto_distance_remaining_signs", self.auto_distance_remaining_signs)
            .with("marking_a", self.end_a.marking.as_str())
            .with("marking_b", self.end_b.marking.as_str())
    }
}

#[cfg(test)]
mod tests {
    use geo::Area;

    use super::*;
    use crate::features::{FeatureKind, Value};

    const ORIGIN: GeoPoint = coord!(47.4647, 8.5492);

    fn runway(dx: f64, dy: f64, width: f64) -> RunwaySpec {
        let a = RunwayEnd::new("14", ORIGIN);
        let b = RunwayEnd::new("32", plane::to_geo(ORIGIN, dx, dy));
        RunwaySpec::new(a, b, width)
    }

    fn exterior(corridor: &Corridor) -> Vec<GeoPoint> {
        corridor
            .polygon
            .exterior()
            .coords()
            .map(|c| GeoPoint::from(*c))
            .collect()
    }

    #[test]
    fn rectangle_has_runway_dimensions() {
        let spec = runway(600.0, -800.0, 45.0);
        let zones = corridors(&spec).unwrap();
        assert_eq!(zones.len(), 1);

        let corridor = zones[0].as_ref().unwrap();
        let ring = exterior(corridor);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());

        let mut edges: Vec<f64> = ring.windows(2).map(|w| w[0].dist(&w[1])).collect();
        edges.sort_by(f64::total_cmp);
        for (edge, expected) in edges.iter().zip([45.0, 45.0, 1000.0, 1000.0]) {
            assert!(((edge - expected) / expected).abs() < 0.005, "{edge} != {expected}");
        }

        assert!(ring::signed_area(corridor.polygon.exterior()) > 0.0);
        assert!((corridor.length_m - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn zones_of_both_ends() {
        let mut spec = runway(0.0, 2000.0, 30.0);
        spec.end_a.displaced_threshold_m = 300.0;
        spec.end_a.blastpad_m = 60.0;
        spec.end_b.blastpad_m = 100.0;

        let zones: Vec<Corridor> = corridors(&spec)
            .unwrap()
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        let kinds: Vec<_> = zones.iter().map(|c| (c.zone, c.end.as_deref())).collect();
        assert_eq!(
            kinds,
            vec![
                (Zone::Runway, None),
                (Zone::DisplacedThreshold, Some("14")),
                (Zone::Blastpad, Some("14")),
                (Zone::Blastpad, Some("32")),
            ]
        );

        // the threshold lies within the runway and the blast pad south of it
        let threshold = exterior(&zones[1]);
        assert!(threshold.iter().all(|p| p.latitude >= ORIGIN.latitude - 1e-9));
        let blastpad = exterior(&zones[2]);
        assert!(blastpad.iter().all(|p| p.latitude <= ORIGIN.latitude + 1e-9));

        let area_ratio = zones[1].polygon.unsigned_area() / zones[0].polygon.unsigned_area();
        assert!((area_ratio - 0.15).abs() < 1e-3);
    }

    #[test]
    fn displaced_threshold_is_clamped() {
        let mut spec = runway(0.0, 500.0, 30.0);
        spec.end_b.displaced_threshold_m = 900.0;

        let zones = corridors(&spec).unwrap();
        let threshold = zones[1].as_ref().unwrap();
        assert_eq!(threshold.zone, Zone::DisplacedThreshold);
        assert!((threshold.length_m - 500.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_ends() {
        assert_eq!(
            corridors(&runway(0.0, 0.0, 45.0)),
            Err(Error::CoincidentRunwayEnds)
        );
    }

    #[test]
    fn invalid_width() {
        assert_eq!(
            corridors(&runway(0.0, 1000.0, 0.0)),
            Err(Error::InvalidWidth(0.0))
        );
        assert!(corridors(&runway(0.0, 1000.0, f64::NAN)).is_err());
    }

    #[test]
    fn feature_attributes() {
        let mut spec = runway(0.0, 1000.0, 45.0);
        spec.centerline_lights = 1;
        let corridor = corridors(&spec).unwrap().remove(0).unwrap();
        let feature = spec.to_feature(corridor);

        assert_eq!(feature.attribute("designator"), &Value::from("14/32"));
        assert_eq!(feature.attribute("zone"), &Value::from("runway"));
        assert_eq!(feature.attribute("end"), &Value::Null);
        assert_eq!(feature.attribute("surface_type"), &Value::from("ASPHALT"));

        let attributes = FeatureKind::Runway.conform(feature.attributes);
        assert_eq!(attributes.get("centerline_lights"), Some(&Value::Int(1)));
    }
}
