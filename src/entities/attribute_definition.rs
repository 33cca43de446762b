//! Attribute definition - template that block attribute instances are built from

use super::attribute::AttributeValue;
use super::EntityCommon;
use std::sync::Arc;

/// Template for [`Attribute`](super::Attribute) instances.
///
/// Definitions are shared: attributes hold an `Arc` to the definition they
/// were created from and never own it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    /// Graphical defaults copied into every new attribute
    pub common: EntityCommon,
    /// Attribute tag
    pub tag: String,
    /// Prompt shown when the attribute value is requested
    pub prompt: String,
    /// Value used when an attribute is created without one
    pub default_value: Option<AttributeValue>,
}

impl AttributeDefinition {
    pub fn new(tag: impl Into<String>) -> Self {
        AttributeDefinition {
            common: EntityCommon::new(),
            tag: tag.into(),
            prompt: String::new(),
            default_value: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<AttributeValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Wrap into the shared form attributes refer to
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
