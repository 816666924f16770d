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

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::apt::{AirportHeader, RecordKind, StartupMetadata};
use crate::features::metadata::Metadata;
use crate::features::{Feature, FeatureKind};
use crate::{Error, Warning};

/// Destination of the compiled features, e.g. a file or a database.
///
/// Each layer is written at most once per airport. Errors of the sink are
/// fatal and abort the export.
pub trait FeatureSink {
    fn write_layer(&mut self, kind: FeatureKind, features: &[Feature]) -> Result<(), Error>;

    fn write_metadata(&mut self, metadata: &Metadata) -> Result<(), Error>;
}

/// The features of one airport grouped by their kind.
#[derive(Clone, Debug, Default)]
pub struct FeatureCollection {
    airport: Option<AirportHeader>,
    layers: BTreeMap<FeatureKind, Vec<Feature>>,
    metadata: Metadata,
    warnings: Vec<Warning>,
}

impl FeatureCollection {
    pub fn builder(ident: &str) -> FeatureCollectionBuilder {
        FeatureCollectionBuilder::new(ident)
    }

    /// Returns the ident of the airport or an empty string if the records had
    /// no airport header.
    pub fn ident(&self) -> &str {
        self.airport.as_ref().map_or("", |airport| airport.ident.as_str())
    }

    pub fn airport(&self) -> Option<&AirportHeader> {
        self.airport.as_ref()
    }

    /// Returns the features of the `kind` in the order of their records.
    pub fn layer(&self, kind: FeatureKind) -> &[Feature] {
        self.layers
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the warnings of features that were skipped.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the total number of features.
    pub fn len(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.metadata.is_empty()
    }

    /// Writes the layers of the `kinds` to the `sink`.
    ///
    /// Empty layers are skipped with a warning.
    pub fn export<S>(&self, sink: &mut S, kinds: &[FeatureKind]) -> Result<(), Error>
    where
        S: FeatureSink + ?Sized,
    {
        let fatal = |e: Error| {
            if e.is_fatal() {
                e
            } else {
                Error::Export(e.to_string())
            }
        };

        for &kind in kinds {
            if kind == FeatureKind::Metadata {
                if self.metadata.is_empty() {
                    warn!("{}: no metadata to export", self.ident());
                } else {
                    sink.write_metadata(&self.metadata).map_err(fatal)?;
                }
                continue;
            }

            let features = self.layer(kind);

            if features.is_empty() {
                warn!("{}: no {kind} to export", self.ident());
                continue;
            }

            info!("{}: exporting {} {kind}", self.ident(), features.len());
            sink.write_layer(kind, features).map_err(fatal)?;
        }

        Ok(())
    }
}

/// Factory of a [`FeatureCollection`].
///
/// Features are conformed to the schema of their kind when added.
pub struct FeatureCollectionBuilder {
    ident: String,
    collection: FeatureCollection,
    last_startup_location: Option<usize>,
}

impl FeatureCollectionBuilder {
    pub fn new(ident: &str) -> Self {
        Self {
            ident: ident.to_string(),
            collection: FeatureCollection::default(),
            last_startup_location: None,
        }
    }

    pub fn build(self) -> FeatureCollection {
        self.collection
    }

    /// Sets the airport header. Only the first header is kept.
    pub fn set_airport(&mut self, airport: AirportHeader) {
        match &self.collection.airport {
            Some(first) => debug!("{}: ignoring airport header {}", first.ident, airport.ident),
            None => self.collection.airport = Some(airport),
        }
    }

    pub fn add_feature(&mut self, kind: FeatureKind, mut feature: Feature) {
        feature.attributes = kind.conform(feature.attributes);

        let layer = self.collection.layers.entry(kind).or_default();
        layer.push(feature);
        debug!("{}: added {kind} feature #{}", self.ident, layer.len());

        if kind == FeatureKind::StartupLocation {
            self.last_startup_location = Some(layer.len() - 1);
        }
    }

    /// Attaches the metadata to the most recent startup location.
    pub fn attach_startup_metadata(&mut self, metadata: &StartupMetadata) -> Result<(), Error> {
        let feature = self
            .last_startup_location
            .and_then(|i| {
                self.collection
                    .layers
                    .get_mut(&FeatureKind::StartupLocation)?
                    .get_mut(i)
            })
            .ok_or(Error::OrphanStartupMetadata)?;

        // the fields are already in place from conforming the location
        metadata.attach(feature);

        Ok(())
    }

    pub fn insert_metadata(&mut self, key: &str, value: Option<&str>) {
        self.collection.metadata.insert(key, value);
    }

    pub fn add_warning(&mut self, kind: RecordKind, index: usize, error: Error) {
        let warning = Warning {
            airport: self.ident.clone(),
            kind,
            index,
            error,
        };

        warn!("{warning}");
        self.collection.warnings.push(warning);
    }
}
