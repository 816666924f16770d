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

use geo::BoundingRect;
use geojson::{GeoJson, Geometry, JsonObject, JsonValue};

use super::rect_to_bbox;
use crate::features::metadata::Metadata;
use crate::features::{self, Attributes, Feature, FeatureKind, Value};
use crate::FeatureCollection;

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(v) => JsonValue::from(*v),
            Value::Int(v) => JsonValue::from(*v),
            Value::Float(v) => JsonValue::from(*v),
            Value::Text(v) => JsonValue::from(v.as_str()),
        }
    }
}

fn properties(attributes: &Attributes) -> JsonObject {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), JsonValue::from(value)))
        .collect()
}

fn geometry(geometry: &features::Geometry) -> Geometry {
    let value = match geometry {
        features::Geometry::Point(p) => geojson::Value::from(p),
        features::Geometry::LineString(l) => geojson::Value::from(l),
        features::Geometry::Polygon(p) => geojson::Value::from(p),
    };

    Geometry::new(value)
}

impl From<&Feature> for geojson::Feature {
    fn from(feature: &Feature) -> Self {
        let bbox = geo::Geometry::from(feature.geometry.clone())
            .bounding_rect()
            .map(rect_to_bbox);

        geojson::Feature {
            bbox,
            geometry: Some(geometry(&feature.geometry)),
            id: None,
            properties: Some(properties(&feature.attributes)),
            foreign_members: None,
        }
    }
}

pub(super) fn collection(features: &[Feature]) -> GeoJson {
    let bbox = features
        .iter()
        .map(|feature| geo::Geometry::from(feature.geometry.clone()))
        .collect::<geo::GeometryCollection<f64>>()
        .bounding_rect()
        .map(rect_to_bbox);

    GeoJson::FeatureCollection(geojson::FeatureCollection {
        bbox,
        features: features.iter().map(geojson::Feature::from).collect(),
        foreign_members: None,
    })
}

/// Returns the metadata as a single feature without geometry.
pub(super) fn metadata_collection(metadata: &Metadata) -> GeoJson {
    GeoJson::FeatureCollection(geojson::FeatureCollection {
        bbox: None,
        features: vec![geojson::Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: Some(properties(&metadata.to_attributes())),
            foreign_members: None,
        }],
        foreign_members: None,
    })
}

impl FeatureCollection {
    /// Returns the features of the `kind` as GeoJSON feature collection.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self, kind: FeatureKind) -> GeoJson {
        match kind {
            FeatureKind::Metadata => metadata_collection(self.metadata()),
            _ => collection(self.layer(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apt::{Record, Windsock};
    use crate::{Compiler, FeatureSink, GeoJsonSink};

    fn windsock() -> Record {
        Record::Windsock(Windsock {
            position: coord!(47.4647, 8.5492),
            illuminated: true,
            name: String::from("WS 16"),
        })
    }

    #[test]
    fn point_layer() {
        let collection = Compiler::new().compile(&[windsock()]);

        let GeoJson::FeatureCollection(layer) = collection.to_geojson(FeatureKind::Windsock) else {
            panic!("expected a feature collection");
        };

        assert_eq!(layer.bbox, Some(vec![8.5492, 47.4647, 8.5492, 47.4647]));
        let properties = layer.features[0].properties.as_ref().unwrap();
        assert_eq!(properties.get("illuminated"), Some(&JsonValue::Bool(true)));
        assert_eq!(properties.get("name"), Some(&JsonValue::from("WS 16")));
    }

    #[test]
    fn metadata_has_no_geometry() {
        let mut metadata = Metadata::new();
        metadata.insert("city", Some("Zurich"));
        metadata.insert("faa_code", None);

        let mut sink = GeoJsonSink::new();
        sink.write_metadata(&metadata).unwrap();

        let Some(GeoJson::FeatureCollection(layer)) = sink.layer("metadata") else {
            panic!("expected a feature collection");
        };

        let feature = &layer.features[0];
        assert!(feature.geometry.is_none());
        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties.get("faa_code"), Some(&JsonValue::Null));
    }
}
