//! End sequence marker for polyline vertices and insert attributes

use crate::tables::Layer;
use crate::types::Handle;
use std::sync::Arc;

/// Marker entity signaling the end of a vertex or attribute sequence.
///
/// It has no geometry and carries only a layer and its handle.
#[derive(Debug, Clone, PartialEq)]
pub struct EndSequence {
    handle: Handle,
    layer: Arc<Layer>,
}

impl EndSequence {
    /// Create a new marker on layer "0"
    pub fn new() -> Self {
        EndSequence {
            handle: Handle::NULL,
            layer: Layer::default_ref(),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    pub fn layer(&self) -> &Arc<Layer> {
        &self.layer
    }

    /// Set the layer. A missing layer is ignored rather than rejected,
    /// unlike the setters of drawing entities.
    pub fn set_layer(&mut self, layer: Option<Arc<Layer>>) {
        match layer {
            Some(layer) => self.layer = layer,
            None => tracing::debug!(handle = %self.handle, "ignoring null layer on SEQEND"),
        }
    }
}

impl Default for EndSequence {
    fn default() -> Self {
        Self::new()
    }
}
