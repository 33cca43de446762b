//! Drawing document: shared tables plus the ordered entity list

use crate::entities::{Entity, EntityType};
use crate::error::Result;
use crate::handles;
use crate::tables::{AppId, Layer, LineType, Table};
use crate::tessellation::TessellationOptions;
use crate::types::{Handle, Vector2};
use rayon::prelude::*;

/// First handle given to entities; lower values are reserved for tables
pub const FIRST_ENTITY_HANDLE: u64 = 0x10;

/// A drawing: the registries entities point into and the entities
/// themselves, in drawing order.
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Layer registry
    pub layers: Table<Layer>,
    /// Line type registry
    pub line_types: Table<LineType>,
    /// Application registry (keys of extended data)
    pub app_ids: Table<AppId>,
    entities: Vec<EntityType>,
    /// Next free handle after the last identity pass
    handle_seed: u64,
}

impl CadDocument {
    /// Create a document holding the standard table entries
    pub fn new() -> Result<Self> {
        let mut layers = Table::new();
        layers.add_shared(Layer::default_ref())?;

        let mut line_types = Table::new();
        line_types.add_shared(LineType::by_layer_ref())?;
        line_types.add_shared(LineType::by_block_ref())?;
        line_types.add(LineType::continuous())?;

        let mut app_ids = Table::new();
        app_ids.add(AppId::acad())?;

        Ok(CadDocument {
            layers,
            line_types,
            app_ids,
            entities: Vec::new(),
            handle_seed: FIRST_ENTITY_HANDLE,
        })
    }

    /// Append an entity; returns its index in drawing order
    pub fn add_entity(&mut self, entity: impl Into<EntityType>) -> usize {
        self.entities.push(entity.into());
        self.entities.len() - 1
    }

    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [EntityType] {
        &mut self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Next free handle after the last identity pass
    pub fn handle_seed(&self) -> u64 {
        self.handle_seed
    }

    /// Number every entity and owned object in drawing order, starting at
    /// [`FIRST_ENTITY_HANDLE`]. Returns the new handle seed.
    pub fn assign_handles(&mut self) -> u64 {
        let next = self
            .entities
            .iter_mut()
            .fold(FIRST_ENTITY_HANDLE, |next, entity| handles::assign_handles(entity, next));

        tracing::debug!(
            entities = self.entities.len(),
            seed = %Handle::new(next),
            "assigned document handles"
        );
        self.handle_seed = next;
        next
    }

    /// Tessellate every polyline in the drawing, in parallel.
    ///
    /// Returns `(handle, points)` pairs in drawing order.
    pub fn tessellate_polylines(
        &self,
        options: &TessellationOptions,
    ) -> Vec<(Handle, Vec<Vector2>)> {
        self.entities
            .par_iter()
            .filter_map(|entity| match entity {
                EntityType::Polyline(p) => Some((p.handle(), p.polygonal_vertices(options))),
                EntityType::LwPolyline(p) => Some((p.handle(), p.polygonal_vertices(options))),
                _ => None,
            })
            .collect()
    }
}
