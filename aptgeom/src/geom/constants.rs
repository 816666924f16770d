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

/// Mean earth radius (IUGG) in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
pub const FEET_IN_METER: f64 = 0.3048;

/// Tolerance in degrees below which two vertices are the same position.
pub const VERTEX_TOLERANCE_DEG: f64 = 1e-7;

/// Rings with an absolute area below this value in square degrees are
/// degenerate (roughly 0.1 m² at mid latitudes).
pub const MIN_RING_AREA_DEG2: f64 = 1e-11;
