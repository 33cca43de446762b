//! Attribute entity - block attribute instance with a value

use super::{AttributeDefinition, Entity, EntityCommon, EntityMut};
use crate::error::{DxfError, Result};
use crate::xdata::ExtendedData;
use std::fmt;
use std::sync::Arc;

/// Untyped attribute payload
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Integer(i) => write!(f, "{}", i),
            AttributeValue::Real(r) => write!(f, "{}", r),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<f64> for AttributeValue {
    fn from(r: f64) -> Self {
        AttributeValue::Real(r)
    }
}

/// Attribute entity - an instance of an [`AttributeDefinition`].
///
/// Color, layer and line type are copied from the definition when the
/// attribute is built; later edits on either side do not propagate.
/// Attributes can not carry extended data.
///
/// # DXF Entity Type
/// ATTRIB
#[derive(Debug, Clone)]
pub struct Attribute {
    common: EntityCommon,
    definition: Arc<AttributeDefinition>,
    /// Current value, `None` while unset
    pub value: Option<AttributeValue>,
}

impl Attribute {
    /// Create an attribute with no value
    pub fn new(definition: Arc<AttributeDefinition>) -> Self {
        Self::with_value(definition, None)
    }

    /// Create an attribute with an optional initial value
    pub fn with_value(definition: Arc<AttributeDefinition>, value: Option<AttributeValue>) -> Self {
        let common = EntityCommon::with_properties(
            definition.common.color(),
            Arc::clone(definition.common.layer()),
            Arc::clone(definition.common.line_type()),
        );
        Attribute {
            common,
            definition,
            value,
        }
    }

    pub fn definition(&self) -> &Arc<AttributeDefinition> {
        &self.definition
    }

    pub fn tag(&self) -> &str {
        &self.definition.tag
    }

    pub fn set_value(&mut self, value: impl Into<AttributeValue>) {
        self.value = Some(value.into());
    }

    /// The value, falling back to the definition's default
    pub fn value_or_default(&self) -> Option<&AttributeValue> {
        self.value.as_ref().or(self.definition.default_value.as_ref())
    }
}

impl EntityMut for Attribute {
    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }
}

impl Entity for Attribute {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "ATTRIB"
    }

    fn set_extended_data(&mut self, _data: Option<ExtendedData>) -> Result<()> {
        Err(DxfError::UnsupportedOperation(
            "extended data is not available for attributes".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{Layer, LineType};
    use crate::types::Color;

    fn definition() -> Arc<AttributeDefinition> {
        let mut def = AttributeDefinition::new("PART_NO").with_default("PN-0");
        def.common.set_color(Some(Color::GREEN)).unwrap();
        def.common.set_layer(Some(Arc::new(Layer::new("Tags")))).unwrap();
        def.common.set_line_type(Some(Arc::new(LineType::dashed()))).unwrap();
        def.into_shared()
    }

    #[test]
    fn test_copies_properties_from_definition() {
        let def = definition();
        let attrib = Attribute::new(Arc::clone(&def));

        assert_eq!(attrib.color(), Color::GREEN);
        assert!(Arc::ptr_eq(attrib.layer(), def.common.layer()));
        assert!(Arc::ptr_eq(attrib.line_type(), def.common.line_type()));
        assert!(attrib.value.is_none());
        assert_eq!(attrib.tag(), "PART_NO");
    }

    #[test]
    fn test_properties_diverge_after_construction() {
        let def = definition();
        let mut attrib = Attribute::with_value(Arc::clone(&def), Some("PN-7".into()));
        attrib.set_color(Some(Color::RED)).unwrap();

        assert_eq!(attrib.color(), Color::RED);
        assert_eq!(def.common.color(), Color::GREEN);
    }

    #[test]
    fn test_value_or_default() {
        let mut attrib = Attribute::new(definition());
        assert_eq!(attrib.value_or_default(), Some(&AttributeValue::from("PN-0")));
        attrib.set_value(42i64);
        assert_eq!(attrib.value_or_default(), Some(&AttributeValue::Integer(42)));
        assert_eq!(attrib.value_or_default().unwrap().to_string(), "42");
    }

    #[test]
    fn test_extended_data_always_rejected() {
        let mut attrib = Attribute::with_value(definition(), Some(1.5.into()));

        let err = attrib.set_extended_data(Some(ExtendedData::new())).unwrap_err();
        assert!(matches!(err, DxfError::UnsupportedOperation(_)));
        let err = attrib.set_extended_data(None).unwrap_err();
        assert!(matches!(err, DxfError::UnsupportedOperation(_)));

        assert!(attrib.extended_data().is_none());
        assert_eq!(attrib.value, Some(AttributeValue::Real(1.5)));
    }
}
