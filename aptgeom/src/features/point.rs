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

//! Point features of startup locations, windsocks and signs.

use super::{Feature, Geometry, Value};
use crate::apt::{Sign, StartupLocation, StartupMetadata, Windsock};

/// Normalizes the heading in degrees into [0, 360).
pub fn normalize_heading(heading: f64) -> f64 {
    heading.rem_euclid(360.0)
}

impl StartupLocation {
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::Point(self.position.into()))
            .with("heading", normalize_heading(self.heading))
            .with("location_type", self.location_type.as_str())
            .with("airplane_types", self.airplane_types.as_str())
            .with("name", self.name.as_str())
    }
}

impl StartupMetadata {
    /// Adds the metadata to the `feature` of its startup location.
    pub fn attach(&self, feature: &mut Feature) {
        let fields = [
            ("width_code", Value::from(self.width_code.map(String::from))),
            ("operation_type", Value::from(self.operation_type.as_str())),
            ("airlines", Value::from(self.airlines.join(" "))),
        ];

        for (name, value) in fields {
            feature.attributes.insert(name.to_string(), value);
        }
    }
}

impl Windsock {
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::Point(self.position.into()))
            .with("illuminated", self.illuminated)
            .with("name", self.name.as_str())
    }
}

impl Sign {
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::Point(self.position.into()))
            .with("heading", normalize_heading(self.heading))
            .with("size", self.size.as_str())
            .with("text", self.text.as_str())
    }
}
