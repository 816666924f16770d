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

//! Output features and their builders.
//!
//! A [`Feature`] is a geometry with a flat attribute record. Every feature
//! of the same [`FeatureKind`] has the same attribute fields, given by the
//! kind's [schema](FeatureKind::schema).

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod marking;
pub mod metadata;
pub mod point;
pub mod polygon;
pub mod runway;

/// Attribute record of a feature.
pub type Attributes = IndexMap<String, Value>;

/// Scalar attribute value.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Geometry of a feature in (longitude, latitude) WGS84 degrees.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Point(geo::Point<f64>),
    LineString(geo::LineString<f64>),
    Polygon(geo::Polygon<f64>),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::Polygon(_) => GeometryType::Polygon,
        }
    }
}

impl From<Geometry> for geo::Geometry<f64> {
    fn from(g: Geometry) -> Self {
        match g {
            Geometry::Point(p) => geo::Geometry::Point(p),
            Geometry::LineString(l) => geo::Geometry::LineString(l),
            Geometry::Polygon(p) => geo::Geometry::Polygon(p),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
}

/// A geometry with its attributes.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    pub geometry: Geometry,
    pub attributes: Attributes,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            attributes: Attributes::new(),
        }
    }

    /// Sets the attribute and returns the feature.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Returns the attribute or [`Value::Null`] if it's not set.
    pub fn attribute(&self, name: &str) -> &Value {
        self.attributes.get(name).unwrap_or(&Value::Null)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldType {
    Bool,
    Int,
    Float,
    Text,
}

/// A field of an attribute schema.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub name: &'static str,
    pub field_type: FieldType,
}

const fn field(name: &'static str, field_type: FieldType) -> Field {
    Field { name, field_type }
}

const RUNWAY_SCHEMA: &[Field] = &[
    field("designator", FieldType::Text),
    field("zone", FieldType::Text),
    field("end", FieldType::Text),
    field("width", FieldType::Float),
    field("length", FieldType::Float),
    field("surface_type", FieldType::Text),
    field("shoulder_surface_type", FieldType::Text),
    field("smoothness", FieldType::Float),
    field("centerline_lights", FieldType::Int),
    field("edge_lights", FieldType::Int),
    field("auto_distance_remaining_signs", FieldType::Bool),
    field("marking_a", FieldType::Text),
    field("marking_b", FieldType::Text),
];

const PAVEMENT_SCHEMA: &[Field] = &[
    field("name", FieldType::Text),
    field("surface_type", FieldType::Text),
    field("smoothness", FieldType::Float),
    field("texture_orientation", FieldType::Float),
];

const BOUNDARY_SCHEMA: &[Field] = &[field("name", FieldType::Text)];

const MARKING_SCHEMA: &[Field] = &[
    field("name", FieldType::Text),
    field("painted_line_type", FieldType::Int),
    field("lighting_line_type", FieldType::Int),
];

const SIGN_SCHEMA: &[Field] = &[
    field("heading", FieldType::Float),
    field("size", FieldType::Text),
    field("text", FieldType::Text),
];

const WINDSOCK_SCHEMA: &[Field] = &[
    field("illuminated", FieldType::Bool),
    field("name", FieldType::Text),
];

const STARTUP_LOCATION_SCHEMA: &[Field] = &[
    field("heading", FieldType::Float),
    field("location_type", FieldType::Text),
    field("airplane_types", FieldType::Text),
    field("name", FieldType::Text),
    field("width_code", FieldType::Text),
    field("operation_type", FieldType::Text),
    field("airlines", FieldType::Text),
];

/// Category of output features.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureKind {
    Runway,
    Pavement,
    Boundary,
    Marking,
    Sign,
    Windsock,
    StartupLocation,
    Metadata,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 8] = [
        Self::Boundary,
        Self::Runway,
        Self::StartupLocation,
        Self::Windsock,
        Self::Sign,
        Self::Pavement,
        Self::Marking,
        Self::Metadata,
    ];

    /// Returns the name of the output layer.
    pub fn layer_name(&self) -> &'static str {
        match self {
            Self::Runway => "runways",
            Self::Pavement => "pavements",
            Self::Boundary => "boundaries",
            Self::Marking => "linear_features",
            Self::Sign => "signs",
            Self::Windsock => "windsocks",
            Self::StartupLocation => "startup_locations",
            Self::Metadata => "metadata",
        }
    }

    /// Returns the kind of the layer `name`.
    pub fn from_layer_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.layer_name() == name)
    }

    /// Returns the geometry type or `None` for the metadata, which has no
    /// geometry.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        match self {
            Self::Runway | Self::Pavement | Self::Boundary => Some(GeometryType::Polygon),
            Self::Marking => Some(GeometryType::LineString),
            Self::Sign | Self::Windsock | Self::StartupLocation => Some(GeometryType::Point),
            Self::Metadata => None,
        }
    }

    /// Returns the attribute fields of the kind.
    ///
    /// The metadata is a free-form mapping and has no fixed fields.
    pub fn schema(&self) -> &'static [Field] {
        match self {
            Self::Runway => RUNWAY_SCHEMA,
            Self::Pavement => PAVEMENT_SCHEMA,
            Self::Boundary => BOUNDARY_SCHEMA,
            Self::Marking => MARKING_SCHEMA,
            Self::Sign => SIGN_SCHEMA,
            Self::Windsock => WINDSOCK_SCHEMA,
            Self::StartupLocation => STARTUP_LOCATION_SCHEMA,
            Self::Metadata => &[],
        }
    }

    /// Conforms the attributes to the kind's schema.
    ///
    /// The fields are ordered as in the schema, absent fields are null and
    /// fields that are not in the schema are dropped. Integers of float fields
    /// are converted to floats.
    pub fn conform(&self, mut attributes: Attributes) -> Attributes {
        let conformed = self
            .schema()
            .iter()
            .map(|field| {
                let value = match (field.field_type, attributes.swap_remove(field.name)) {
                    (FieldType::Float, Some(Value::Int(v))) => Value::Float(v as f64),
                    (_, value) => value.unwrap_or_default(),
                };
                (field.name.to_string(), value)
            })
            .collect();

        for name in attributes.keys() {
            trace!("dropping attribute {name} not in {} schema", self.layer_name());
        }

        conformed
    }
}

impl Display for FeatureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.layer_name())
    }
}
