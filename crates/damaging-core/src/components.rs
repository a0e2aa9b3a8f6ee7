//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::Block;

/// Exposure to a damaging block.
///
/// Present exactly while the entity stands in a damaging block below head
/// level. Attached and removed by the block-transition handler only; the
/// periodic sweep advances `next_damage_time_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamagingStatus {
    /// Earliest game time (ms) at which damage may be applied again.
    /// Damage fires only once the clock is strictly past this value.
    pub next_damage_time_ms: u64,
    /// Damage applied each time the cooldown elapses.
    pub damage_per_tick: f32,
    /// Cooldown between applications while continuously exposed (ms).
    pub cooldown_ms: u64,
}

/// World-space position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub position: Vec3,
}

/// Body dimensions of a moving character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementProfile {
    /// Height in world units (one unit per block).
    pub height: f32,
}

/// Marks an entity as a dropped item that hazards destroy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;

/// Marks the entity that owns a placed voxel block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockEntity {
    pub cell: IVec3,
    pub block: Block,
}
