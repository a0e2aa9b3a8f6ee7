//! Pickup cleanup: destroys dropped items resting in lava.

use hecs::{Entity, World};
use log::debug;

use damaging_core::components::{Location, Pickup};

use crate::voxels::VoxelLookup;

/// Despawn every Pickup whose current voxel is lava, appending it to `destroyed`.
/// Pickups without a Location are skipped.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    voxels: &impl VoxelLookup,
    despawn_buffer: &mut Vec<Entity>,
    destroyed: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (_pickup, location)) in world.query_mut::<(&Pickup, Option<&Location>)>() {
        let Some(location) = location else {
            continue;
        };
        if voxels.block_at(location.position).is_lava() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            debug!("pickup {entity:?} destroyed by lava");
            destroyed.push(entity);
        }
    }
}
