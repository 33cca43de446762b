//! Layer table entry

use super::TableEntry;
use crate::types::Color;
use once_cell::sync::Lazy;
use std::sync::Arc;

static LAYER_0: Lazy<Arc<Layer>> = Lazy::new(|| Arc::new(Layer::layer_0()));

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Layer color
    pub color: Color,
    /// Line type name
    pub line_type: String,
    /// Layer is frozen
    pub frozen: bool,
    /// Layer is off (invisible)
    pub off: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color: Color::WHITE,
            line_type: "Continuous".to_string(),
            frozen: false,
            off: false,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Self::new("0")
    }

    /// Shared reference to the process-wide layer "0".
    ///
    /// Every entity built without an explicit layer points here.
    pub fn default_ref() -> Arc<Layer> {
        Arc::clone(&LAYER_0)
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.off && !self.frozen
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }
}
