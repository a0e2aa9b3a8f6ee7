//! Damage sweep: applies block damage to exposed entities on a cooldown.

use hecs::World;
use log::{debug, trace};

use damaging_core::components::{DamagingStatus, Location};
use damaging_core::enums::DamageType;
use damaging_core::events::DamageEvent;

use damaging_exposure::fsm::{step_tick, Exposure};

use crate::voxels::BlockEntityLookup;

/// Run the sweep for all entities with DamagingStatus + Location.
/// Exposure itself never changes here; only the cooldown advances.
pub fn run(
    world: &mut World,
    now: u64,
    blocks: &impl BlockEntityLookup,
    damage_events: &mut Vec<DamageEvent>,
) {
    let mut exposed = 0usize;

    for (entity, (status, location)) in world.query_mut::<(&mut DamagingStatus, &Location)>() {
        exposed += 1;

        let result = step_tick(Exposure::Exposed(*status), now);
        let Some(amount) = result.damage else {
            continue;
        };
        if let Some(updated) = result.exposure.status() {
            *status = updated;
        }

        let instigator = blocks.block_entity_at(location.position);
        debug!(
            "block damage {amount} to {entity:?} at {now} ms, next at {} ms",
            status.next_damage_time_ms
        );
        damage_events.push(DamageEvent {
            target: entity,
            amount,
            damage_type: DamageType::Physical,
            instigator,
        });
    }

    trace!("damage sweep at {now} ms visited {exposed} exposed entities");
}
