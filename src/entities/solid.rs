//! Solid entity (filled quadrilateral)

use super::{unit_normal, Entity, EntityCommon, EntityMut};
use crate::error::Result;
use crate::types::Vector3;

/// Solid entity - a filled shape with four corner points.
///
/// A triangle repeats its third corner as the fourth.
///
/// # DXF Entity Type
/// SOLID
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    common: EntityCommon,
    /// First corner point (in OCS)
    pub first_corner: Vector3,
    /// Second corner point (in OCS)
    pub second_corner: Vector3,
    /// Third corner point (in OCS)
    pub third_corner: Vector3,
    /// Fourth corner point (in OCS)
    pub fourth_corner: Vector3,
    /// Thickness (extrusion distance)
    pub thickness: f64,
    normal: Vector3,
}

impl Solid {
    pub fn new(first: Vector3, second: Vector3, third: Vector3, fourth: Vector3) -> Self {
        Solid {
            common: EntityCommon::new(),
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a triangular solid (3 corners)
    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::new(first, second, third, third)
    }

    pub fn corners(&self) -> [Vector3; 4] {
        [
            self.first_corner,
            self.second_corner,
            self.third_corner,
            self.fourth_corner,
        ]
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        self.normal = unit_normal(normal)?;
        Ok(())
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO, Vector3::ZERO)
    }
}

impl EntityMut for Solid {
    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }
}

impl Entity for Solid {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "SOLID"
    }
}
