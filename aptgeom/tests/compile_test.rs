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

use aptgeom::apt::{
    AirportHeader, BoundaryHeader, LinearFeatureHeader, LocationType, PavementHeader, Record,
    RunwayEnd, RunwaySpec, Sign, SignSize, StartupLocation, StartupMetadata, SurfaceType, Windsock,
};
use aptgeom::curve::Resolution;
use aptgeom::features::{FeatureKind, Geometry, Value};
use aptgeom::geom::{plane, GeoPoint};
use aptgeom::ring::signed_area;
use aptgeom::{coord, Compiler, Error};

const ORIGIN: GeoPoint = coord!(46.9125, 7.4989);

fn at(dx: f64, dy: f64) -> GeoPoint {
    plane::to_geo(ORIGIN, dx, dy)
}

fn node(dx: f64, dy: f64) -> aptgeom::apt::Node {
    aptgeom::apt::Node::new(at(dx, dy))
}

fn airport() -> Vec<Record> {
    let mut rwy = RunwaySpec::new(
        RunwayEnd::new("14", at(0.0, 0.0)),
        RunwayEnd::new("32", at(600.0, -800.0)),
        45.0,
    );
    rwy.end_b.displaced_threshold_m = 150.0;
    rwy.end_b.blastpad_m = 60.0;

    vec![
        Record::Airport(AirportHeader {
            ident: String::from("XMPL"),
            name: String::from("Example Regional"),
            elevation_ft: 1674.0,
        }),
        Record::Runway(rwy),
        Record::Boundary(BoundaryHeader {
            name: String::from("XMPL Boundary"),
        }),
        Record::Node(node(-200.0, 200.0)),
        Record::Node(node(-200.0, -1000.0)),
        Record::Node(node(800.0, -1000.0)),
        Record::Node(node(800.0, 200.0).closing()),
        Record::Pavement(PavementHeader {
            surface_type: SurfaceType::Concrete,
            smoothness: 0.25,
            texture_orientation: 140.0,
            name: String::from("Apron"),
        }),
        Record::Node(node(100.0, 0.0)),
        Record::Node(node(300.0, 0.0)),
        Record::Node(aptgeom::apt::Node::curve(at(300.0, 100.0), at(320.0, 80.0))),
        Record::Node(node(100.0, 100.0).closing()),
        Record::LinearFeature(LinearFeatureHeader {
            name: String::from("Taxiway A"),
        }),
        Record::Node(node(50.0, 0.0).with_line_types(Some(1), Some(101))),
        Record::Node(node(50.0, -300.0).with_line_types(Some(1), None)),
        Record::Node(node(50.0, -600.0).with_line_types(Some(3), None).ending()),
        Record::StartupLocation(StartupLocation {
            position: at(150.0, 50.0),
            heading: 320.0,
            location_type: LocationType::Gate,
            airplane_types: String::from("jets|turboprops"),
            name: String::from("A1"),
        }),
        Record::StartupMetadata(StartupMetadata {
            width_code: Some('C'),
            operation_type: String::from("airline"),
            airlines: vec![String::from("swr")],
        }),
        Record::Windsock(Windsock {
            position: at(-50.0, 20.0),
            illuminated: true,
            name: String::from("WS 14"),
        }),
        Record::Sign(Sign {
            position: at(60.0, -20.0),
            heading: 412.0,
            size: SignSize::Small,
            text: String::from("{@Y}A"),
        }),
        Record::Metadata {
            key: String::from("name"),
            value: Some(String::from("Test")),
        },
        Record::Metadata {
            key: String::from("faa_code"),
            value: None,
        },
    ]
}

fn polygon(geometry: &Geometry) -> &geo::Polygon<f64> {
    match geometry {
        Geometry::Polygon(p) => p,
        g => panic!("expected polygon but got {g:?}"),
    }
}

#[test]
fn compile_airport() {
    let collection = Compiler::new().compile(&airport());

    assert!(
        collection.warnings().is_empty(),
        "should have no warnings: {:?}",
        collection.warnings()
    );
    assert_eq!(collection.ident(), "XMPL");

    // boundary with implicit closure
    let boundaries = collection.layer(FeatureKind::Boundary);
    assert_eq!(boundaries.len(), 1);
    let boundary = polygon(&boundaries[0].geometry);
    assert_eq!(boundary.exterior().0.len(), 5);
    assert!(signed_area(boundary.exterior()) > 0.0);

    // runway, then displaced threshold and blast pad of 32
    let runways = collection.layer(FeatureKind::Runway);
    let zones: Vec<_> = runways
        .iter()
        .map(|f| (f.attribute("zone").clone(), f.attribute("end").clone()))
        .collect();
    assert_eq!(
        zones,
        vec![
            (Value::from("runway"), Value::Null),
            (Value::from("displaced_threshold"), Value::from("32")),
            (Value::from("blastpad"), Value::from("32")),
        ]
    );

    let corridor = polygon(&runways[0].geometry);
    let corners: Vec<GeoPoint> = corridor.exterior().coords().map(|c| (*c).into()).collect();
    assert_eq!(corners.len(), 5);
    let mut edges: Vec<f64> = corners.windows(2).map(|w| w[0].dist(&w[1])).collect();
    edges.sort_by(f64::total_cmp);
    for (edge, expected) in edges.iter().zip([45.0, 45.0, 1000.0, 1000.0]) {
        assert!(((edge - expected) / expected).abs() < 0.005, "{edge} != {expected}");
    }
    assert_eq!(runways[0].attribute("designator"), &Value::from("14/32"));

    // the curved corner adds vertices
    let pavements = collection.layer(FeatureKind::Pavement);
    let apron = polygon(&pavements[0].geometry);
    assert!(apron.exterior().0.len() > 5);
    assert!(signed_area(apron.exterior()) > 0.0);
    assert_eq!(pavements[0].attribute("surface_type"), &Value::from("CONCRETE"));

    // the painted type changes at the last node only
    let markings = collection.layer(FeatureKind::Marking);
    assert_eq!(markings.len(), 1);
    assert_eq!(markings[0].attribute("painted_line_type"), &Value::Int(1));
    assert_eq!(markings[0].attribute("lighting_line_type"), &Value::Int(101));

    let gate = &collection.layer(FeatureKind::StartupLocation)[0];
    assert_eq!(gate.attribute("width_code"), &Value::from("C"));
    assert_eq!(gate.attribute("airlines"), &Value::from("swr"));

    let sign = &collection.layer(FeatureKind::Sign)[0];
    assert_eq!(sign.attribute("heading"), &Value::Float(52.0));

    assert_eq!(collection.layer(FeatureKind::Windsock).len(), 1);
    assert_eq!(collection.metadata().get("name"), Some(Some("Test")));
    assert_eq!(collection.metadata().get("faa_code"), Some(None));
}

#[test]
fn compiling_twice_yields_same_features() {
    let records = airport();
    let compiler = Compiler::new().with_resolution(Resolution::Fixed(16));

    let first = compiler.compile(&records);
    let second = compiler.compile(&records);

    for kind in FeatureKind::ALL {
        assert_eq!(first.layer(kind), second.layer(kind), "{kind} differs");
    }
    assert_eq!(first.metadata(), second.metadata());
}

#[test]
fn degenerate_pavement_is_skipped() {
    let mut records = airport();
    records.extend([
        Record::Pavement(PavementHeader {
            surface_type: SurfaceType::Asphalt,
            smoothness: 0.25,
            texture_orientation: 0.0,
            name: String::from("Sliver"),
        }),
        Record::Node(node(0.0, 0.0)),
        Record::Node(node(10.0, 0.0).closing()),
        Record::Windsock(Windsock {
            position: at(500.0, -500.0),
            illuminated: false,
            name: String::from("WS 32"),
        }),
    ]);

    let collection = Compiler::new().compile(&records);

    assert_eq!(collection.warnings().len(), 1);
    let warning = &collection.warnings()[0];
    assert_eq!(warning.airport, "XMPL");
    assert_eq!(warning.index, 22);
    assert_eq!(warning.error, Error::DegenerateRing { distinct: 2 });

    assert_eq!(collection.layer(FeatureKind::Pavement).len(), 1);
    assert_eq!(collection.layer(FeatureKind::Windsock).len(), 2);
}

#[test]
fn compile_square_boundary_runway_and_name() {
    let records = vec![
        Record::Boundary(BoundaryHeader {
            name: String::from("Square"),
        }),
        Record::Node(aptgeom::apt::Node::new(coord!(47.0, 8.0))),
        Record::Node(aptgeom::apt::Node::new(coord!(47.0, 8.01))),
        Record::Node(aptgeom::apt::Node::new(coord!(47.01, 8.01))),
        Record::Node(aptgeom::apt::Node::new(coord!(47.01, 8.0)).closing()),
        Record::Runway(RunwaySpec::new(
            RunwayEnd::new("18", at(0.0, 1000.0)),
            RunwayEnd::new("36", at(0.0, 0.0)),
            45.0,
        )),
        Record::Metadata {
            key: String::from("name"),
            value: Some(String::from("Test")),
        },
    ];

    let collection = Compiler::new().compile(&records);
    assert!(collection.warnings().is_empty(), "{:?}", collection.warnings());

    let boundaries = collection.layer(FeatureKind::Boundary);
    assert_eq!(boundaries.len(), 1);
    let square = polygon(&boundaries[0].geometry);
    assert_eq!(square.exterior().0.len(), 5);
    assert_eq!(square.exterior().0.first(), square.exterior().0.last());

    let runways = collection.layer(FeatureKind::Runway);
    assert_eq!(runways.len(), 1);
    let corners: Vec<GeoPoint> = polygon(&runways[0].geometry)
        .exterior()
        .coords()
        .map(|c| (*c).into())
        .collect();
    assert_eq!(corners.len(), 5);
    let mut edges: Vec<f64> = corners.windows(2).map(|w| w[0].dist(&w[1])).collect();
    edges.sort_by(f64::total_cmp);
    for (edge, expected) in edges.iter().zip([45.0, 45.0, 1000.0, 1000.0]) {
        assert!(((edge - expected) / expected).abs() < 0.005, "{edge} != {expected}");
    }

    assert_eq!(collection.metadata().len(), 1);
    assert_eq!(collection.metadata().get("name"), Some(Some("Test")));
}

#[test]
fn boundary_with_non_finite_node_is_skipped() {
    let records = vec![
        Record::Boundary(BoundaryHeader {
            name: String::from("Broken"),
        }),
        Record::Node(aptgeom::apt::Node::new(coord!(47.0, 8.0))),
        Record::Node(aptgeom::apt::Node::new(coord!(47.0, 8.01))),
        Record::Node(aptgeom::apt::Node::new(coord!(f64::NAN, 8.01))),
        Record::Node(aptgeom::apt::Node::new(coord!(47.01, 8.0)).closing()),
        Record::Windsock(Windsock {
            position: coord!(47.005, 8.005),
            illuminated: false,
            name: String::from("WS"),
        }),
    ];

    let collection = Compiler::new().compile(&records);

    assert!(collection.layer(FeatureKind::Boundary).is_empty());
    assert_eq!(collection.layer(FeatureKind::Windsock).len(), 1);
    assert_eq!(collection.warnings().len(), 1);
    assert_eq!(collection.warnings()[0].index, 0);
    assert_eq!(collection.warnings()[0].error, Error::InvalidCoordinate);
}

#[test]
fn finer_resolution_adds_vertices() {
    let records = airport();
    let vertices = |resolution| {
        let collection = Compiler::new()
            .with_resolution(resolution)
            .compile(&records);
        let apron = polygon(&collection.layer(FeatureKind::Pavement)[0].geometry);
        apron.exterior().0.len()
    };

    assert!(vertices(Resolution::Fixed(32)) > vertices(Resolution::Fixed(4)));
}

#[cfg(feature = "geojson")]
#[test]
fn export_geojson() {
    use aptgeom::GeoJsonSink;

    let collection = Compiler::new().compile(&airport());
    let mut sink = GeoJsonSink::new();
    collection.export(&mut sink, &FeatureKind::ALL).unwrap();

    let names: Vec<_> = sink.layers().map(|(name, _)| name).collect();
    assert_eq!(names.len(), FeatureKind::ALL.len());
    assert!(sink.layer("runways").is_some());
    assert!(sink.layer("metadata").is_some());
}
