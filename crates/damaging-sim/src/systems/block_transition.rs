//! Block-transition handler: attaches and detaches DamagingStatus when an
//! entity crosses into a new block.

use hecs::World;
use log::{debug, warn};

use damaging_core::components::{DamagingStatus, MovementProfile};
use damaging_core::config::DamageConfig;
use damaging_core::events::EnterBlock;

use damaging_exposure::fsm::{step, Exposure, ExposureInput, Transition};

/// Evaluate one `EnterBlock` event at game time `now` and apply the result.
pub fn handle(
    world: &mut World,
    event: &EnterBlock,
    now: u64,
    config: &DamageConfig,
) -> Transition {
    let entity = event.entity;

    let height = match world.get::<&MovementProfile>(entity) {
        Ok(profile) => profile.height,
        Err(err) => {
            warn!("ignoring block entry for {entity:?}: {err}");
            return Transition::Ignored;
        }
    };
    let current = Exposure::from_status(world.get::<&DamagingStatus>(entity).ok().map(|s| *s));

    let input = ExposureInput::EnteredBlock {
        block: event.new_block,
        relative_y: event.relative_position.y,
        height,
    };
    let result = step(current, input, now, config);

    match (result.transition, result.exposure) {
        (Transition::Attached, Exposure::Exposed(status)) => {
            if world.insert_one(entity, status).is_err() {
                warn!("could not attach damaging status to {entity:?}");
            }
        }
        (Transition::GraceReset, Exposure::Exposed(status)) => {
            if let Ok(mut existing) = world.get::<&mut DamagingStatus>(entity) {
                *existing = status;
            }
        }
        (Transition::Detached, _) => {
            if let Err(err) = world.remove_one::<DamagingStatus>(entity) {
                warn!("could not detach damaging status from {entity:?}: {err}");
            }
        }
        _ => {}
    }

    if !matches!(result.transition, Transition::Unchanged) {
        debug!(
            "{entity:?} entered {:?} (row {}) at {now} ms: {:?}",
            event.new_block, event.relative_position.y, result.transition
        );
    }

    result.transition
}
