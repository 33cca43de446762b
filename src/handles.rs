//! Handle assignment
//!
//! Numbers an entity and everything it owns from a running counter. Owned
//! children come first, in sequence order, then the entity itself, so a
//! polyline with `k` vertices starting at `h` ends up as:
//!
//! ```text
//! vertices      h .. h+k-1
//! SEQEND        h+k
//! POLYLINE      h+k+1
//! next free     h+k+2
//! ```
//!
//! Every function returns the next free counter value so passes compose
//! across a whole drawing without gaps.

use crate::entities::{EntityCommon, EntityMut, EntityType, Polyline};
use crate::types::Handle;

/// Assign handles to `entity` and its owned objects starting at `next`.
///
/// Returns the first value not consumed.
pub fn assign_handles(entity: &mut EntityType, next: u64) -> u64 {
    match entity {
        EntityType::Polyline(polyline) => assign_polyline_handles(polyline, next),
        EntityType::Attribute(e) => assign_single(e.common_mut(), next),
        EntityType::LwPolyline(e) => assign_single(e.common_mut(), next),
        EntityType::Solid(e) => assign_single(e.common_mut(), next),
        EntityType::EndSequence(e) => {
            e.set_handle(Handle::new(next));
            next + 1
        }
    }
}

fn assign_single(common: &mut EntityCommon, next: u64) -> u64 {
    common.set_handle(Handle::new(next));
    next + 1
}

/// Vertices in order, then the end sequence, then the polyline
pub fn assign_polyline_handles(polyline: &mut Polyline, mut next: u64) -> u64 {
    let first = next;
    for vertex in polyline.vertices_mut().iter_mut() {
        vertex.handle = Handle::new(next);
        next += 1;
    }
    polyline.end_sequence_mut().set_handle(Handle::new(next));
    next += 1;
    polyline.common_mut().set_handle(Handle::new(next));
    next += 1;

    tracing::trace!(
        first = %Handle::new(first),
        last = %Handle::new(next - 1),
        "assigned polyline handles"
    );
    next
}
