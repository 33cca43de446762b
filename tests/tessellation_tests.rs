//! Bulge tessellation through the entity API.

mod common;

use common::{approx_eq, EPS};
use dxf_entities::entities::{Polyline, PolylineVertex};
use dxf_entities::tessellation::{tessellate_many, TessellationOptions};
use dxf_entities::types::Vector2;
use proptest::prelude::*;

#[test]
fn test_rectangle_keeps_every_vertex_in_order() {
    let poly = common::rectangle(0.0, 0.0, 3.0, 2.0);
    for precision in [0, 1, 8] {
        let options = TessellationOptions::default().with_bulge_precision(precision);
        let points = poly.polygonal_vertices(&options);
        assert_eq!(
            points,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(3.0, 0.0),
                Vector2::new(3.0, 2.0),
                Vector2::new(0.0, 2.0),
            ]
        );
    }
}

#[test]
fn test_straight_rectangle_ignores_huge_precision() {
    let poly = common::rectangle(-1.0, -1.0, 2.0, 2.0);
    let options = TessellationOptions::default().with_bulge_precision(u32::MAX);
    let points = poly.polygonal_vertices(&options);
    assert_eq!(points.len(), 4);
    assert_eq!(points[2], Vector2::new(1.0, 1.0));
}

#[test]
fn test_open_polyline_still_gets_closing_segment() {
    let poly = common::semicircle(2.0);
    assert!(!poly.is_closed());
    let points = poly.polygonal_vertices(&TessellationOptions::default().with_bulge_precision(1));
    // start, arc midpoint, then the closing segment's start
    assert_eq!(points.len(), 3);
    assert!(approx_eq(points[2], Vector2::new(2.0, 0.0)));
}

#[test]
fn test_semicircle_points_lie_on_circle() {
    let chord = 4.0;
    let poly = common::semicircle(chord);
    let options = TessellationOptions::default()
        .with_bulge_precision(4)
        .with_bulge_threshold(0.0);

    let points = poly.polygonal_vertices(&options);
    assert_eq!(points.len(), 6);

    let center = Vector2::new(chord / 2.0, 0.0);
    for p in &points {
        assert!((p.distance(&center) - chord / 2.0).abs() < EPS, "{p} off the circle");
    }
    assert!(approx_eq(points[0], Vector2::ZERO));
    assert!(approx_eq(points[5], Vector2::new(chord, 0.0)));
    // counter-clockwise from (0, 0) to (c, 0) runs below the chord
    assert!(points[1..5].iter().all(|p| p.y < 0.0));
}

#[test]
fn test_welded_vertices_emit_nothing_regardless_of_bulge() {
    let poly = Polyline::from_vertices(vec![
        PolylineVertex::from_coords(0.0, 0.0).with_bulge(1.0),
        PolylineVertex::from_coords(1e-9, 0.0).with_bulge(0.5),
        PolylineVertex::from_coords(1.0, 0.0),
    ]);
    let points = poly.polygonal_vertices(&TessellationOptions::default());
    // (0,0)->(1e-9,0) is welded away; the arc from (1e-9,0) then starts there
    assert!(approx_eq(points[0], Vector2::new(1e-9, 0.0)));
    assert_eq!(points.iter().filter(|p| p.distance(&Vector2::ZERO) < 1e-6).count(), 1);
}

#[test]
fn test_distance_equal_to_weld_threshold_is_distinct() {
    let poly = Polyline::from_vertices(vec![
        PolylineVertex::from_coords(0.0, 0.0),
        PolylineVertex::from_coords(0.5, 0.0),
    ]);
    let options = TessellationOptions::default().with_weld_threshold(0.5);
    assert_eq!(
        poly.polygonal_vertices(&options),
        vec![Vector2::new(0.0, 0.0), Vector2::new(0.5, 0.0)]
    );

    let options = TessellationOptions::default().with_weld_threshold(0.5000001);
    assert!(poly.polygonal_vertices(&options).is_empty());
}

#[test]
fn test_arc_point_on_last_vertex_is_dropped() {
    // the arc midpoint of A->B lands exactly on C, the final vertex
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(2.0, 0.0);
    let c = Vector2::new(1.0, -1.0);
    let poly = Polyline::from_vertices(vec![
        PolylineVertex::from_coords(a.x, a.y).with_bulge(1.0),
        PolylineVertex::from_coords(b.x, b.y),
        PolylineVertex::from_coords(c.x, c.y),
    ]);
    let options = TessellationOptions::default()
        .with_bulge_precision(1)
        .with_weld_threshold(1e-6);

    let points = poly.polygonal_vertices(&options);
    assert_eq!(points.len(), 3);
    assert!(approx_eq(points[0], a));
    assert!(approx_eq(points[1], b));
    assert!(approx_eq(points[2], c));
}

#[test]
fn test_bulge_above_one_draws_more_than_half_a_turn() {
    // bulge 2 over a chord of 2: r = 1.25, center (1, -0.75), sweep 4 atan 2
    let poly = Polyline::from_vertices(vec![
        PolylineVertex::from_coords(0.0, 0.0).with_bulge(2.0),
        PolylineVertex::from_coords(2.0, 0.0),
    ]);
    let options = TessellationOptions::default().with_bulge_precision(7);
    let points = poly.polygonal_vertices(&options);

    assert_eq!(points.len(), 1 + 7 + 1);
    let center = Vector2::new(1.0, -0.75);
    for p in &points {
        assert!((p.distance(&center) - 1.25).abs() < EPS, "{p} off the circle");
    }
    // the far side of the circle lies beyond the center, below y = -0.75
    assert!(points.iter().any(|p| p.y < -1.5));
    assert!(approx_eq(points[8], Vector2::new(2.0, 0.0)));
}

#[test]
fn test_nan_bulge_falls_back_to_chord() {
    let poly = Polyline::from_vertices(vec![
        PolylineVertex::from_coords(0.0, 0.0).with_bulge(f64::NAN),
        PolylineVertex::from_coords(2.0, 0.0),
    ]);
    let points = poly.polygonal_vertices(&TessellationOptions::default());
    assert_eq!(points, vec![Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0)]);
}

#[test]
fn test_tessellate_many_matches_sequential() {
    let polylines = vec![
        common::rectangle(0.0, 0.0, 1.0, 1.0),
        common::semicircle(3.0),
        Polyline::new(),
    ];
    let options = TessellationOptions::default();
    let sequences: Vec<&[PolylineVertex]> = polylines.iter().map(|p| p.vertices()).collect();

    let parallel = tessellate_many(&sequences, &options);
    let sequential: Vec<Vec<Vector2>> = polylines
        .iter()
        .map(|p| p.polygonal_vertices(&options))
        .collect();
    assert_eq!(parallel, sequential);
}

proptest! {
    #[test]
    fn prop_rectangle_yields_its_four_corners(
        x in -1e3f64..1e3,
        y in -1e3f64..1e3,
        width in 1e-3f64..1e3,
        height in 1e-3f64..1e3,
        precision in 0u32..16,
    ) {
        let poly = common::rectangle(x, y, width, height);
        let options = TessellationOptions::default().with_bulge_precision(precision);
        let points = poly.polygonal_vertices(&options);
        let expected: Vec<Vector2> = poly.vertices().iter().map(|v| v.location.xy()).collect();
        prop_assert_eq!(points, expected);
    }
}
