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

use log::{info, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::apt::{BoundaryHeader, LinearFeatureHeader, Node, PavementHeader, Record, RecordKind};
use crate::curve::Resolution;
use crate::features::marking::LineBuilder;
use crate::features::polygon::PolygonBuilder;
use crate::features::{runway, FeatureKind};
use crate::{Error, FeatureCollection, FeatureCollectionBuilder};

/// Compiles the records of airports into features.
///
/// # Examples
///
/// ```
/// use aptgeom::apt::{AirportHeader, BoundaryHeader, Record};
/// use aptgeom::features::FeatureKind;
/// use aptgeom::{node, Compiler};
///
/// let records = vec![
///     Record::Airport(AirportHeader {
///         ident: String::from("XMPL"),
///         name: String::from("Example"),
///         elevation_ft: 1416.0,
///     }),
///     Record::Boundary(BoundaryHeader {
///         name: String::from("Example Boundary"),
///     }),
///     Record::Node(node!(47.0, 8.0)),
///     Record::Node(node!(47.0, 8.01)),
///     Record::Node(node!(47.01, 8.01)),
///     Record::Node(node!(47.01, 8.0).closing()),
/// ];
///
/// let collection = Compiler::new().compile(&records);
/// assert_eq!(collection.ident(), "XMPL");
/// assert_eq!(collection.layer(FeatureKind::Boundary).len(), 1);
/// assert!(collection.warnings().is_empty());
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Compiler {
    resolution: Resolution,
}

/// Node chain under construction and the index of its header record.
enum Chain {
    Pavement(PavementHeader, PolygonBuilder),
    Boundary(BoundaryHeader, PolygonBuilder),
    LinearFeature(LinearFeatureHeader, LineBuilder),
}

impl Chain {
    fn add_node(&mut self, node: Node) {
        match self {
            Self::Pavement(_, nodes) | Self::Boundary(_, nodes) => nodes.add_node(node),
            Self::LinearFeature(_, nodes) => nodes.add_node(node),
        }
    }

    fn finish(self, index: usize, builder: &mut FeatureCollectionBuilder, resolution: &Resolution) {
        match self {
            Self::Pavement(header, nodes) => match nodes.build(resolution) {
                Ok(polygon) => builder.add_feature(FeatureKind::Pavement, header.to_feature(polygon)),
                Err(e) => builder.add_warning(RecordKind::Pavement, index, e),
            },
            Self::Boundary(header, nodes) => match nodes.build(resolution) {
                Ok(polygon) => builder.add_feature(FeatureKind::Boundary, header.to_feature(polygon)),
                Err(e) => builder.add_warning(RecordKind::Boundary, index, e),
            },
            Self::LinearFeature(header, nodes) => {
                for line in nodes.build(resolution) {
                    match line {
                        Ok(marking) => {
                            builder.add_feature(FeatureKind::Marking, header.to_feature(marking))
                        }
                        Err(e) => builder.add_warning(RecordKind::LinearFeature, index, e),
                    }
                }
            }
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiler that samples curves with the `resolution`.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Compiles the records of one airport.
    ///
    /// A record that can't be compiled is skipped and reported as
    /// [warning](FeatureCollection::warnings). All other features of the
    /// airport are kept. Compiling the same records again yields the same
    /// collection.
    pub fn compile(&self, records: &[Record]) -> FeatureCollection {
        let ident = records
            .iter()
            .find_map(|record| match record {
                Record::Airport(header) => Some(header.ident.as_str()),
                _ => None,
            })
            .unwrap_or_default();

        info!("compiling {ident} from {} records", records.len());

        let mut builder = FeatureCollection::builder(ident);
        let mut chain: Option<(usize, Chain)> = None;

        for (index, record) in records.iter().enumerate() {
            if !matches!(record, Record::Node(_)) {
                if let Some((start, pending)) = chain.take() {
                    pending.finish(start, &mut builder, &self.resolution);
                }
            }

            if let Err(e) = || -> Result<(), Error> {
                match record {
                    Record::Airport(header) => builder.set_airport(header.clone()),

                    Record::Runway(spec) => {
                        for zone in runway::corridors(spec)? {
                            match zone {
                                Ok(corridor) => builder
                                    .add_feature(FeatureKind::Runway, spec.to_feature(corridor)),
                                Err(e) => builder.add_warning(RecordKind::Runway, index, e),
                            }
                        }
                    }

                    Record::Pavement(header) => {
                        chain = Some((index, Chain::Pavement(header.clone(), PolygonBuilder::new())))
                    }

                    Record::Boundary(header) => {
                        chain = Some((index, Chain::Boundary(header.clone(), PolygonBuilder::new())))
                    }

                    Record::LinearFeature(header) => {
                        chain = Some((
                            index,
                            Chain::LinearFeature(header.clone(), LineBuilder::new()),
                        ))
                    }

                    Record::Node(node) => match chain.as_mut() {
                        Some((_, pending)) => pending.add_node(node.clone()),
                        None => return Err(Error::OrphanNode),
                    },

                    Record::StartupLocation(location) => {
                        builder.add_feature(FeatureKind::StartupLocation, location.to_feature())
                    }

                    Record::StartupMetadata(metadata) => builder.attach_startup_metadata(metadata)?,

                    Record::Windsock(windsock) => {
                        builder.add_feature(FeatureKind::Windsock, windsock.to_feature())
                    }

                    Record::Sign(sign) => builder.add_feature(FeatureKind::Sign, sign.to_feature()),

                    Record::Metadata { key, value } => {
                        builder.insert_metadata(key, value.as_deref())
                    }

                    Record::Unknown(code) => trace!("ignoring record with row code {code}"),
                }

                Ok(())
            }() {
                builder.add_warning(record.kind(), index, e);
            }
        }

        if let Some((start, pending)) = chain.take() {
            pending.finish(start, &mut builder, &self.resolution);
        }

        let collection = builder.build();

        info!(
            "compiled {ident}: {} features, {} skipped",
            collection.len(),
            collection.warnings().len()
        );

        collection
    }

    /// Compiles the records of many airports.
    ///
    /// The airports are compiled in parallel if the `rayon` feature is
    /// enabled. The collections are returned in the order of the airports.
    pub fn compile_all(&self, airports: &[Vec<Record>]) -> Vec<FeatureCollection> {
        #[cfg(feature = "rayon")]
        let airports = airports.par_iter();
        #[cfg(not(feature = "rayon"))]
        let airports = airports.iter();

        airports.map(|records| self.compile(records)).collect()
    }
}
