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

//! Geometry compiler for X-Plane airport layouts.
//!
//! This crate turns the typed [records] of an airport into GIS geometry.
//! Runways become rectangular corridors with their displaced thresholds and
//! blast pads, pavement and boundary chains become polygons with holes, linear
//! features become lines split by their marking type, and startup locations,
//! windsocks and signs become points. The curves of a chain are Bezier curves
//! that are sampled into vertices (see [`curve`]).
//!
//! The [`Compiler`] returns a [`FeatureCollection`] per airport. Each feature
//! has the attributes of its [`FeatureKind`]'s schema. Records that can't be
//! compiled are skipped and reported as [`Warning`]s, everything else of the
//! airport is kept.
//!
//! # Examples
//!
//! Compile a runway and export it through a [`FeatureSink`]:
//!
//! ```
//! use aptgeom::apt::{Record, RunwayEnd, RunwaySpec};
//! use aptgeom::features::{Feature, FeatureKind};
//! use aptgeom::features::metadata::Metadata;
//! use aptgeom::{coord, Compiler, Error, FeatureSink};
//!
//! struct Counter(usize);
//!
//! impl FeatureSink for Counter {
//!     fn write_layer(&mut self, _: FeatureKind, features: &[Feature]) -> Result<(), Error> {
//!         self.0 += features.len();
//!         Ok(())
//!     }
//!
//!     fn write_metadata(&mut self, _: &Metadata) -> Result<(), Error> {
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let rwy = RunwaySpec::new(
//!     RunwayEnd::new("16", coord!(47.4750, 8.5364)),
//!     RunwayEnd::new("34", coord!(47.4440, 8.5560)),
//!     60.0,
//! );
//!
//! let collection = Compiler::new().compile(&[Record::Runway(rwy)]);
//!
//! let mut counter = Counter(0);
//! collection.export(&mut counter, &FeatureKind::ALL)?;
//! assert_eq!(counter.0, 1);
//! #     Ok(())
//! # }
//! ```
//!
//! [records]: crate::apt::Record

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod apt;
mod collection;
mod compiler;
pub mod curve;
mod error;
pub mod features;
pub mod geom;
pub mod ring;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use collection::{FeatureCollection, FeatureCollectionBuilder, FeatureSink};
pub use compiler::Compiler;
pub use error::{Error, Warning};
#[cfg(feature = "geojson")]
pub use self::geojson::GeoJsonSink;

pub mod prelude {
    pub use crate::apt::{Node, Record, RunwayEnd, RunwaySpec};
    pub use crate::curve::Resolution;
    pub use crate::features::{Feature, FeatureKind, Value};
    pub use crate::{Compiler, Error, FeatureCollection, FeatureSink, Warning};
}
