//! Lightweight polyline entity (2D polyline with bulges)

use super::{unit_normal, Entity, EntityCommon, EntityMut};
use crate::error::Result;
use crate::tessellation::{self, BulgeVertex, TessellationOptions};
use crate::types::{Vector2, Vector3};

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge value (for arc segments)
    pub bulge: f64,
    /// Segment width at this vertex
    pub begin_thickness: f64,
    /// Segment width at the next vertex
    pub end_thickness: f64,
}

impl LwVertex {
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
            begin_thickness: 0.0,
            end_thickness: 0.0,
        }
    }

    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex {
            bulge,
            ..Self::new(location)
        }
    }
}

impl BulgeVertex for LwVertex {
    fn position(&self) -> Vector2 {
        self.location
    }

    fn bulge(&self) -> f64 {
        self.bulge
    }
}

/// A lightweight (2D) polyline entity.
///
/// Vertices are plain values; only the polyline itself takes a handle.
///
/// # DXF Entity Type
/// LWPOLYLINE
#[derive(Debug, Clone)]
pub struct LwPolyline {
    pub(super) common: EntityCommon,
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
    /// Is the polyline closed?
    pub is_closed: bool,
    /// Elevation (Z coordinate)
    pub elevation: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    pub(super) normal: Vector3,
}

impl LwPolyline {
    pub fn new() -> Self {
        Self::with_closed(Vec::new(), false)
    }

    pub fn with_closed(vertices: Vec<LwVertex>, is_closed: bool) -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            vertices,
            is_closed,
            elevation: 0.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create an open polyline from a list of 2D points
    pub fn from_points(points: Vec<Vector2>) -> Self {
        Self::with_closed(points.into_iter().map(LwVertex::new).collect(), false)
    }

    pub fn add_point_with_bulge(&mut self, point: Vector2, bulge: f64) {
        self.vertices.push(LwVertex::with_bulge(point, bulge));
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        self.normal = unit_normal(normal)?;
        Ok(())
    }

    /// Polygon approximating the polyline.
    ///
    /// See [`Polyline::polygonal_vertices`](super::Polyline::polygonal_vertices).
    pub fn polygonal_vertices(&self, options: &TessellationOptions) -> Vec<Vector2> {
        tessellation::polygonal_vertices(&self.vertices, options)
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityMut for LwPolyline {
    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}
