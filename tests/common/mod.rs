//! Shared fixtures for the integration tests.
//!
//! Each test crate imports this via `mod common;`.

#![allow(dead_code)]

use dxf_entities::entities::{LwPolyline, Polyline, PolylineVertex};
use dxf_entities::types::Vector2;
use dxf_entities::{AppId, CadDocument, Color, Layer, LineType};
use std::sync::Arc;

/// Tolerance for geometric comparisons
pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: Vector2, b: Vector2) -> bool {
    a.distance(&b) < EPS
}

/// Closed axis-aligned rectangle with straight edges, counter-clockwise
/// from `(x, y)`
pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Polyline {
    Polyline::with_closed(
        vec![
            PolylineVertex::from_coords(x, y),
            PolylineVertex::from_coords(x + width, y),
            PolylineVertex::from_coords(x + width, y + height),
            PolylineVertex::from_coords(x, y + height),
        ],
        true,
    )
}

/// Two vertices `chord` apart on the X axis joined by a half circle
pub fn semicircle(chord: f64) -> Polyline {
    Polyline::from_vertices(vec![
        PolylineVertex::from_coords(0.0, 0.0).with_bulge(1.0),
        PolylineVertex::from_coords(chord, 0.0),
    ])
}

/// Lightweight copy of [`semicircle`]
pub fn lw_semicircle(chord: f64) -> LwPolyline {
    let mut lw = LwPolyline::new();
    lw.add_point_with_bulge(Vector2::ZERO, 1.0);
    lw.add_point_with_bulge(Vector2::new(chord, 0.0), 0.0);
    lw
}

/// Registry entries a drawing typically has beyond the standard ones
pub struct Fixtures {
    pub doc: CadDocument,
    pub walls: Arc<Layer>,
    pub dashed: Arc<LineType>,
    pub app: Arc<AppId>,
}

pub fn fixtures() -> Fixtures {
    let mut doc = CadDocument::new().expect("standard tables");
    let walls = doc
        .layers
        .add(Layer::with_color("Walls", Color::BLUE))
        .expect("walls layer");
    let dashed = doc.line_types.add(LineType::dashed()).expect("dashed line type");
    let app = doc.app_ids.add(AppId::new("TESTAPP")).expect("app id");
    Fixtures {
        doc,
        walls,
        dashed,
        app,
    }
}
