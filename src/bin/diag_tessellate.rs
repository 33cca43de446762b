//! Diagnostic: build a small drawing, number it and print the tessellated
//! polylines.
//!
//! Set `RUST_LOG=dxf_entities=trace` to see per-segment decisions.
//! An optional first argument overrides the bulge precision.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dxf_entities::entities::{
    Attribute, AttributeDefinition, Entity, LwPolyline, Polyline, PolylineVertex, Solid,
};
use dxf_entities::types::{Color, Vector2, Vector3};
use dxf_entities::{CadDocument, Layer, TessellationOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let precision = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid bulge precision {arg:?}"))?,
        None => TessellationOptions::default().bulge_precision,
    };
    let options = TessellationOptions::default().with_bulge_precision(precision);

    let mut doc = CadDocument::new()?;
    let outline = doc.layers.add(Layer::with_color("Outline", Color::RED))?;

    let mut slot = Polyline::with_closed(
        vec![
            PolylineVertex::from_coords(0.0, 0.0),
            PolylineVertex::from_coords(4.0, 0.0).with_bulge(1.0),
            PolylineVertex::from_coords(4.0, 2.0),
            PolylineVertex::from_coords(0.0, 2.0).with_bulge(1.0),
        ],
        true,
    );
    slot.set_layer(Some(Arc::clone(&outline)))?;
    slot.set_constant_width(0.1);
    doc.add_entity(slot);

    let mut arc = LwPolyline::new();
    arc.add_point_with_bulge(Vector2::new(10.0, 0.0), -0.5);
    arc.add_point_with_bulge(Vector2::new(12.0, 0.0), 0.0);
    doc.add_entity(arc);

    doc.add_entity(Solid::triangle(
        Vector3::ZERO,
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ));

    let part_no = AttributeDefinition::new("PART_NO")
        .with_prompt("Part number")
        .with_default("P-001")
        .into_shared();
    doc.add_entity(Attribute::new(part_no));

    let seed = doc.assign_handles();
    info!(entities = doc.entity_count(), seed, "drawing numbered");

    for entity in doc.entities() {
        let layer = entity
            .as_entity()
            .map_or_else(|| "-".to_string(), |e| e.layer().name.clone());
        println!("{:>6} {:<12} layer={}", entity.handle().to_string(), entity.entity_type(), layer);
    }

    for (handle, points) in doc.tessellate_polylines(&options) {
        println!("polyline {handle}: {} points", points.len());
        for p in points {
            println!("  {p}");
        }
    }

    Ok(())
}
