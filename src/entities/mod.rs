//! Drawing entity types and the graphical attribute contract

use crate::error::{DxfError, Result};
use crate::tables::{Layer, LineType};
use crate::types::{Color, Handle, Vector3};
use crate::xdata::ExtendedData;
use std::sync::Arc;

pub mod attribute;
pub mod attribute_definition;
pub mod lwpolyline;
pub mod polyline;
pub mod seqend;
pub mod solid;

pub use attribute::{Attribute, AttributeValue};
pub use attribute_definition::AttributeDefinition;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use polyline::{Polyline, PolylineFlags, PolylineVertex};
pub use seqend::EndSequence;
pub use solid::Solid;

/// Graphical properties shared by every drawing entity.
///
/// Color, layer and line type always hold a value: setters reject a missing
/// or unnamed reference and leave the previous value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    handle: Handle,
    color: Color,
    layer: Arc<Layer>,
    line_type: Arc<LineType>,
    extended_data: Option<ExtendedData>,
}

impl EntityCommon {
    /// Color ByLayer, layer "0", line type ByLayer, no extended data
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            color: Color::ByLayer,
            layer: Layer::default_ref(),
            line_type: LineType::by_layer_ref(),
            extended_data: None,
        }
    }

    /// Start from explicit graphical properties
    pub fn with_properties(color: Color, layer: Arc<Layer>, line_type: Arc<LineType>) -> Self {
        EntityCommon {
            color,
            layer,
            line_type,
            ..Self::new()
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color>) -> Result<()> {
        self.color = color.ok_or_else(|| null_reference("color"))?;
        Ok(())
    }

    pub fn layer(&self) -> &Arc<Layer> {
        &self.layer
    }

    pub fn set_layer(&mut self, layer: Option<Arc<Layer>>) -> Result<()> {
        self.layer = require_named(layer, "layer", |l| l.name.as_str())?;
        Ok(())
    }

    pub fn line_type(&self) -> &Arc<LineType> {
        &self.line_type
    }

    pub fn set_line_type(&mut self, line_type: Option<Arc<LineType>>) -> Result<()> {
        self.line_type = require_named(line_type, "line type", |lt| lt.name.as_str())?;
        Ok(())
    }

    pub fn extended_data(&self) -> Option<&ExtendedData> {
        self.extended_data.as_ref()
    }

    pub(crate) fn set_extended_data(&mut self, data: Option<ExtendedData>) {
        self.extended_data = data;
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

fn null_reference(what: &str) -> DxfError {
    DxfError::InvalidArgument(format!("{what} must not be null"))
}

fn require_named<T>(
    value: Option<Arc<T>>,
    what: &str,
    name: impl Fn(&T) -> &str,
) -> Result<Arc<T>> {
    let value = value.ok_or_else(|| null_reference(what))?;
    if name(&*value).is_empty() {
        return Err(DxfError::InvalidArgument(format!("{what} must have a name")));
    }
    Ok(value)
}

/// Validate an extrusion direction and return it normalized
pub(crate) fn unit_normal(normal: Vector3) -> Result<Vector3> {
    if normal.is_zero() {
        return Err(DxfError::InvalidArgument(
            "the normal can not be the zero vector".to_string(),
        ));
    }
    normal.try_normalize().ok_or_else(|| {
        DxfError::InvalidArgument(format!("the normal {normal} is not a finite vector"))
    })
}

pub(crate) mod sealed {
    use super::EntityCommon;

    /// Raw mutable access to the shared properties, available only inside
    /// the crate so the validated setters are the only public way in.
    pub trait EntityMut {
        fn common_mut(&mut self) -> &mut EntityCommon;
    }
}

pub(crate) use sealed::EntityMut;

/// Graphical attribute contract implemented by every drawing entity.
///
/// Properties change only through the validated setters; the underlying
/// [`EntityCommon`] can be read but not replaced from outside the crate.
///
/// ```compile_fail
/// use dxf_entities::{Attribute, AttributeDefinition, Entity};
///
/// let mut attr = Attribute::new(AttributeDefinition::new("TAG").into_shared());
/// let _ = attr.common_mut();
/// ```
pub trait Entity: sealed::EntityMut {
    /// Shared graphical properties
    fn common(&self) -> &EntityCommon;

    /// DXF entity name
    fn entity_type(&self) -> &'static str;

    fn handle(&self) -> Handle {
        self.common().handle()
    }

    fn color(&self) -> Color {
        self.common().color()
    }

    fn set_color(&mut self, color: Option<Color>) -> Result<()> {
        self.common_mut().set_color(color)
    }

    fn layer(&self) -> &Arc<Layer> {
        self.common().layer()
    }

    fn set_layer(&mut self, layer: Option<Arc<Layer>>) -> Result<()> {
        self.common_mut().set_layer(layer)
    }

    fn line_type(&self) -> &Arc<LineType> {
        self.common().line_type()
    }

    fn set_line_type(&mut self, line_type: Option<Arc<LineType>>) -> Result<()> {
        self.common_mut().set_line_type(line_type)
    }

    fn extended_data(&self) -> Option<&ExtendedData> {
        self.common().extended_data()
    }

    /// Replace the extended data; `None` clears it
    fn set_extended_data(&mut self, data: Option<ExtendedData>) -> Result<()> {
        self.common_mut().set_extended_data(data);
        Ok(())
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone)]
pub enum EntityType {
    /// Block attribute instance
    Attribute(Attribute),
    /// Heavy polyline with owned vertices and end sequence
    Polyline(Polyline),
    /// Lightweight polyline
    LwPolyline(LwPolyline),
    /// Filled quadrilateral
    Solid(Solid),
    /// Stand-alone sequence terminator
    EndSequence(EndSequence),
}

impl EntityType {
    /// The graphical attribute view, `None` for terminators
    pub fn as_entity(&self) -> Option<&dyn Entity> {
        match self {
            EntityType::Attribute(e) => Some(e),
            EntityType::Polyline(e) => Some(e),
            EntityType::LwPolyline(e) => Some(e),
            EntityType::Solid(e) => Some(e),
            EntityType::EndSequence(_) => None,
        }
    }

    pub fn as_entity_mut(&mut self) -> Option<&mut dyn Entity> {
        match self {
            EntityType::Attribute(e) => Some(e),
            EntityType::Polyline(e) => Some(e),
            EntityType::LwPolyline(e) => Some(e),
            EntityType::Solid(e) => Some(e),
            EntityType::EndSequence(_) => None,
        }
    }

    pub fn handle(&self) -> Handle {
        match self {
            EntityType::EndSequence(e) => e.handle(),
            other => other.as_entity().map_or(Handle::NULL, |e| e.handle()),
        }
    }

    pub fn entity_type(&self) -> &'static str {
        match self {
            EntityType::EndSequence(_) => "SEQEND",
            other => other.as_entity().map_or("UNKNOWN", |e| e.entity_type()),
        }
    }
}

impl From<Attribute> for EntityType {
    fn from(e: Attribute) -> Self {
        EntityType::Attribute(e)
    }
}

impl From<Polyline> for EntityType {
    fn from(e: Polyline) -> Self {
        EntityType::Polyline(e)
    }
}

impl From<LwPolyline> for EntityType {
    fn from(e: LwPolyline) -> Self {
        EntityType::LwPolyline(e)
    }
}

impl From<Solid> for EntityType {
    fn from(e: Solid) -> Self {
        EntityType::Solid(e)
    }
}

impl From<EndSequence> for EntityType {
    fn from(e: EndSequence) -> Self {
        EntityType::EndSequence(e)
    }
}
