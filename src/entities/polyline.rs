//! Polyline entity (heavy polyline with owned vertices)

use super::{unit_normal, EndSequence, Entity, EntityCommon, EntityMut, LwPolyline, LwVertex};
use crate::error::Result;
use crate::tessellation::{self, BulgeVertex, TessellationOptions};
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (DXF group code 70).
    ///
    /// An open polyline has no bit set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PolylineFlags: u16 {
        /// Closed polyline, or polygon mesh closed in the M direction
        const CLOSED = 1;
        /// Curve-fit vertices have been added
        const CURVE_FIT = 2;
        /// Spline-fit vertices have been added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Polygon mesh closed in the N direction
        const CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Line type pattern is generated continuously around the vertices
        const CONTINUOUS_LINETYPE = 128;
    }
}

/// A vertex owned by a [`Polyline`]
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineVertex {
    /// Location in object coordinates
    pub location: Vector3,
    /// Bulge of the segment starting here.
    ///
    /// 0 = straight, positive = counter-clockwise arc, negative = clockwise
    /// arc; the value is tan(included angle / 4).
    pub bulge: f64,
    /// Segment width at this vertex
    pub begin_thickness: f64,
    /// Segment width at the next vertex
    pub end_thickness: f64,
    /// Assigned by the identity pass
    pub handle: Handle,
}

impl PolylineVertex {
    pub fn new(location: Vector3) -> Self {
        PolylineVertex {
            location,
            bulge: 0.0,
            begin_thickness: 0.0,
            end_thickness: 0.0,
            handle: Handle::NULL,
        }
    }

    pub fn from_coords(x: f64, y: f64) -> Self {
        Self::new(Vector3::new(x, y, 0.0))
    }

    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }

    pub fn with_thickness(mut self, begin: f64, end: f64) -> Self {
        self.begin_thickness = begin;
        self.end_thickness = end;
        self
    }
}

impl BulgeVertex for PolylineVertex {
    fn position(&self) -> Vector2 {
        self.location.xy()
    }

    fn bulge(&self) -> f64 {
        self.bulge
    }
}

/// Polyline entity.
///
/// Owns its vertices and the [`EndSequence`] terminating them; both share
/// the polyline's lifetime. The end sequence is created with the polyline
/// and never replaced.
///
/// # DXF Entity Type
/// POLYLINE
#[derive(Debug, Clone)]
pub struct Polyline {
    common: EntityCommon,
    vertices: Vec<PolylineVertex>,
    is_closed: bool,
    flags: PolylineFlags,
    normal: Vector3,
    /// Elevation (Z coordinate in OCS)
    pub elevation: f64,
    /// Thickness (extrusion height)
    pub thickness: f64,
    end_sequence: EndSequence,
}

impl Polyline {
    /// Create an empty open polyline
    pub fn new() -> Self {
        Self::with_closed(Vec::new(), false)
    }

    /// Create an open polyline from vertices
    pub fn from_vertices(vertices: Vec<PolylineVertex>) -> Self {
        Self::with_closed(vertices, false)
    }

    pub fn with_closed(vertices: Vec<PolylineVertex>, is_closed: bool) -> Self {
        let flags = if is_closed {
            PolylineFlags::CLOSED
        } else {
            PolylineFlags::empty()
        };
        Polyline {
            common: EntityCommon::new(),
            vertices,
            is_closed,
            flags,
            normal: Vector3::UNIT_Z,
            elevation: 0.0,
            thickness: 0.0,
            end_sequence: EndSequence::new(),
        }
    }

    pub fn vertices(&self) -> &[PolylineVertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut Vec<PolylineVertex> {
        &mut self.vertices
    }

    /// Replace the whole vertex list
    pub fn set_vertices(&mut self, vertices: Vec<PolylineVertex>) {
        self.vertices = vertices;
    }

    pub fn add_vertex(&mut self, vertex: PolylineVertex) {
        self.vertices.push(vertex);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Open or close the polyline.
    ///
    /// The CLOSED bit is only ever added to [`flags`](Self::flags): reopening
    /// a polyline keeps it set, matching what existing files contain.
    pub fn set_closed(&mut self, is_closed: bool) {
        if is_closed {
            self.flags |= PolylineFlags::CLOSED;
        }
        self.is_closed = is_closed;
    }

    pub fn flags(&self) -> PolylineFlags {
        self.flags
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Set the extrusion direction; stored normalized, zero is rejected
    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        self.normal = unit_normal(normal)?;
        Ok(())
    }

    pub fn end_sequence(&self) -> &EndSequence {
        &self.end_sequence
    }

    pub fn end_sequence_mut(&mut self) -> &mut EndSequence {
        &mut self.end_sequence
    }

    /// Give every segment the same width
    pub fn set_constant_width(&mut self, width: f64) {
        for vertex in &mut self.vertices {
            vertex.begin_thickness = width;
            vertex.end_thickness = width;
        }
    }

    /// Structural conversion into a lightweight polyline.
    ///
    /// Vertex locations are projected onto the OCS plane; the elevation
    /// carries the Z. Shared references are cloned, not copied.
    pub fn to_lw_polyline(&self) -> LwPolyline {
        let vertices = self
            .vertices
            .iter()
            .map(|v| LwVertex {
                location: v.location.xy(),
                bulge: v.bulge,
                begin_thickness: v.begin_thickness,
                end_thickness: v.end_thickness,
            })
            .collect();

        let mut lw = LwPolyline::with_closed(vertices, self.is_closed);
        lw.common = EntityCommon::with_properties(
            self.common.color(),
            self.common.layer().clone(),
            self.common.line_type().clone(),
        );
        lw.common.set_extended_data(self.common.extended_data().cloned());
        lw.normal = self.normal;
        lw.elevation = self.elevation;
        lw.thickness = self.thickness;
        lw
    }

    /// Polygon approximating the polyline, with arc segments subdivided.
    ///
    /// Points are in object coordinates. The closing segment from the last
    /// vertex back to the first is always included.
    pub fn polygonal_vertices(&self, options: &TessellationOptions) -> Vec<Vector2> {
        tessellation::polygonal_vertices(&self.vertices, options)
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityMut for Polyline {
    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }
}
