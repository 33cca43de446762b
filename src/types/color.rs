//! Entity color

use std::fmt;

/// Color assigned to an entity or table entry.
///
/// Either one of the two logical colors (ByLayer, ByBlock), an AutoCAD
/// Color Index (1-255), or a 24-bit true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Inherit from the layer (ACI 256)
    #[default]
    ByLayer,
    /// Inherit from the enclosing block (ACI 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Build a color from a group 62 value
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            // negative index marks a layer that is turned off
            -255..=-1 => Color::Index(index.unsigned_abs() as u8),
            _ => Color::WHITE,
        }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Group 62 value, `None` for true colors
    pub fn index(&self) -> Option<u16> {
        match self {
            Color::ByBlock => Some(0),
            Color::ByLayer => Some(256),
            Color::Index(i) => Some(*i as u16),
            Color::Rgb { .. } => None,
        }
    }

    pub fn is_by_layer(&self) -> bool {
        matches!(self, Color::ByLayer)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}
