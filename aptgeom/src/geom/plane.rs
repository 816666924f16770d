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

//! Local tangent plane around a reference point.
//!
//! An airport spans a few kilometers at most, so an equirectangular
//! projection scaled by the cosine of the origin's latitude is accurate to
//! well below a meter. All metric geometry of the compiler goes through these
//! functions. Offsets are `(dx, dy)` in meters with `dx` pointing east and
//! `dy` pointing north. Bearings are radians clockwise from true north.
//!
//! The poles are not a supported input domain.

use std::f64::consts::FRAC_PI_2;

use super::constants::METERS_PER_DEGREE;
use super::GeoPoint;

fn meters_per_degree_lon(origin: GeoPoint) -> f64 {
    METERS_PER_DEGREE * origin.latitude.to_radians().cos()
}

/// Returns the offset of `point` from `origin` in meters.
pub fn to_local_meters(origin: GeoPoint, point: GeoPoint) -> (f64, f64) {
    (
        (point.longitude - origin.longitude) * meters_per_degree_lon(origin),
        (point.latitude - origin.latitude) * METERS_PER_DEGREE,
    )
}

/// Inverse of [`to_local_meters`].
pub fn to_geo(origin: GeoPoint, dx: f64, dy: f64) -> GeoPoint {
    GeoPoint {
        latitude: origin.latitude + dy / METERS_PER_DEGREE,
        longitude: origin.longitude + dx / meters_per_degree_lon(origin),
    }
}

/// Bearing from `p0` to `p1`.
pub fn bearing(p0: GeoPoint, p1: GeoPoint) -> f64 {
    let (dx, dy) = to_local_meters(p0, p1);
    dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
}

/// Distance in meters between `p0` and `p1`.
pub fn distance(p0: GeoPoint, p1: GeoPoint) -> f64 {
    let (dx, dy) = to_local_meters(p0, p1);
    dx.hypot(dy)
}

/// Point reached from `p0` after `distance_m` on the `bearing`.
pub fn destination(p0: GeoPoint, bearing: f64, distance_m: f64) -> GeoPoint {
    let (dx, dy) = rotate((0.0, distance_m), bearing);
    to_geo(p0, dx, dy)
}

/// Returns the points `distance_m` left and right of `p0`, perpendicular to
/// the direction from `p0` to `p1`.
pub fn perpendicular_offset(p0: GeoPoint, p1: GeoPoint, distance_m: f64) -> (GeoPoint, GeoPoint) {
    let heading = bearing(p0, p1);
    (
        destination(p0, heading - FRAC_PI_2, distance_m),
        destination(p0, heading + FRAC_PI_2, distance_m),
    )
}

/// Rotates the offset clockwise by `angle` radians, matching the sense of
/// bearings.
pub fn rotate((dx, dy): (f64, f64), angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (dx * cos + dy * sin, dy * cos - dx * sin)
}
