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

//! GeoJSON export of compiled features.

use std::collections::BTreeMap;

use geojson::GeoJson;

use crate::features::metadata::Metadata;
use crate::features::{Feature, FeatureKind};
use crate::{Error, FeatureSink};

mod feature;

fn rect_to_bbox(rect: geo::Rect<f64>) -> geojson::Bbox {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

/// Sink that keeps every written layer as GeoJSON feature collection.
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
#[derive(Clone, Debug, Default)]
pub struct GeoJsonSink {
    layers: BTreeMap<&'static str, GeoJson>,
}

impl GeoJsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layer by its name, e.g. `runways`.
    pub fn layer(&self, name: &str) -> Option<&GeoJson> {
        self.layers.get(name)
    }

    pub fn layers(&self) -> impl Iterator<Item = (&'static str, &GeoJson)> {
        self.layers.iter().map(|(name, layer)| (*name, layer))
    }

    pub fn into_layers(self) -> BTreeMap<&'static str, GeoJson> {
        self.layers
    }
}

impl FeatureSink for GeoJsonSink {
    fn write_layer(&mut self, kind: FeatureKind, features: &[Feature]) -> Result<(), Error> {
        self.layers
            .insert(kind.layer_name(), feature::collection(features));
        Ok(())
    }

    fn write_metadata(&mut self, metadata: &Metadata) -> Result<(), Error> {
        self.layers.insert(
            FeatureKind::Metadata.layer_name(),
            feature::metadata_collection(metadata),
        );
        Ok(())
    }
}
