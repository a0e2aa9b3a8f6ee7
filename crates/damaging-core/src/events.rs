//! Events flowing into and out of the damage rule.

use glam::IVec3;
use hecs::Entity;

use crate::enums::{Block, DamageType};

/// Inbound: an entity just moved into a new voxel cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnterBlock {
    pub entity: Entity,
    pub old_block: Block,
    pub new_block: Block,
    /// Cell of the new block relative to the entity's feet cell.
    /// `y` is the body row, 0 at the feet.
    pub relative_position: IVec3,
}

/// Outbound: instruction for the host's health system to damage `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
    pub damage_type: DamageType,
    /// Block entity at the target's position, if the host has one there.
    pub instigator: Option<Entity>,
}
