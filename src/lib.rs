//! # dxf-entities
//!
//! In-memory object model for DXF drawing entities, and the tessellation of
//! bulge-encoded polylines into straight-line point lists.
//!
//! ## Features
//!
//! - Attribute, Polyline, LwPolyline, Solid and SEQEND entities
//! - Validated graphical properties (color, layer, line type, extended data)
//!   shared with the drawing's tables through `Arc` references
//! - Deterministic handle assignment over entities and their owned objects
//! - Arc approximation of polyline bulges, sequential or in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_entities::entities::{Polyline, PolylineVertex};
//! use dxf_entities::tessellation::TessellationOptions;
//! use dxf_entities::CadDocument;
//!
//! let mut doc = CadDocument::new()?;
//! doc.add_entity(Polyline::from_vertices(vec![
//!     PolylineVertex::from_coords(0.0, 0.0).with_bulge(1.0),
//!     PolylineVertex::from_coords(2.0, 0.0),
//! ]));
//! doc.assign_handles();
//!
//! for (handle, points) in doc.tessellate_polylines(&TessellationOptions::default()) {
//!     println!("{handle}: {} points", points.len());
//! }
//! # Ok::<(), dxf_entities::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Entity` - graphical attribute contract of drawing entities
//! - `EntityType` - closed set of entity variants
//! - `Table` - registry handing out shared `Layer`/`LineType`/`AppId` references
//! - `handles` - identity pass threading a counter through owned objects
//! - `tessellation` - pure bulge-to-points conversion

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod handles;
pub mod tables;
pub mod tessellation;
pub mod types;
pub mod xdata;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, Handle, Vector2, Vector3};

pub use entities::{
    Attribute, AttributeDefinition, AttributeValue, EndSequence, Entity, EntityType, LwPolyline,
    LwVertex, Polyline, PolylineFlags, PolylineVertex, Solid,
};

pub use tables::{AppId, Layer, LineType, Table, TableEntry};
pub use tessellation::TessellationOptions;
pub use xdata::{ExtendedData, XData, XDataValue};

pub use document::CadDocument;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
