//! Line type table entry

use super::TableEntry;
use once_cell::sync::Lazy;
use std::sync::Arc;

static BY_LAYER: Lazy<Arc<LineType>> = Lazy::new(|| Arc::new(LineType::new("ByLayer")));
static BY_BLOCK: Lazy<Arc<LineType>> = Lazy::new(|| Arc::new(LineType::new("ByBlock")));

/// Line type element (dash, dot, space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    /// Length of the element (positive = dash, negative = space, 0 = dot)
    pub length: f64,
}

impl LineTypeElement {
    pub fn dash(length: f64) -> Self {
        LineTypeElement { length: length.abs() }
    }

    pub fn space(length: f64) -> Self {
        LineTypeElement { length: -length.abs() }
    }

    pub fn dot() -> Self {
        LineTypeElement { length: 0.0 }
    }
}

/// A line type table entry
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Description
    pub description: String,
    /// Pattern elements
    pub elements: Vec<LineTypeElement>,
}

impl LineType {
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
            elements: Vec::new(),
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..Self::new("Continuous")
        }
    }

    /// Create a dashed line type
    pub fn dashed() -> Self {
        LineType {
            description: "__ __ __ __ __ __".to_string(),
            elements: vec![LineTypeElement::dash(0.5), LineTypeElement::space(0.25)],
            ..Self::new("Dashed")
        }
    }

    /// Shared reference to the process-wide "ByLayer" line type
    pub fn by_layer_ref() -> Arc<LineType> {
        Arc::clone(&BY_LAYER)
    }

    /// Shared reference to the process-wide "ByBlock" line type
    pub fn by_block_ref() -> Arc<LineType> {
        Arc::clone(&BY_BLOCK)
    }

    /// Total length of one repetition of the pattern
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.length.abs()).sum()
    }

    pub fn is_continuous(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        matches!(self.name.as_str(), "Continuous" | "ByLayer" | "ByBlock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_pattern_length() {
        let lt = LineType::dashed();
        assert_eq!(lt.elements.len(), 2);
        assert!((lt.pattern_length() - 0.75).abs() < 1e-12);
        assert!(!lt.is_continuous());
    }

    #[test]
    fn test_standard_refs() {
        assert!(LineType::by_layer_ref().is_standard());
        assert!(Arc::ptr_eq(&LineType::by_block_ref(), &LineType::by_block_ref()));
        assert!(LineType::continuous().is_continuous());
    }
}
