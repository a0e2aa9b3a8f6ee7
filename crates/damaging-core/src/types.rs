//! Fundamental spatial and simulation-time types.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Voxel cell that contains a world-space position.
///
/// Blocks are centered on integer coordinates, so a position belongs to the
/// nearest cell. Halves round up.
pub fn cell_of(position: Vec3) -> IVec3 {
    (position + Vec3::splat(0.5)).floor().as_ivec3()
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Game time in milliseconds. Never decreases.
    pub game_time_ms: u64,
}

impl SimTime {
    /// A clock at tick 0 reading `game_time_ms`.
    pub fn starting_at(game_time_ms: u64) -> Self {
        Self {
            tick: 0,
            game_time_ms,
        }
    }

    /// Advance by one tick of `step_ms` milliseconds.
    pub fn advance(&mut self, step_ms: u64) {
        self.tick += 1;
        self.game_time_ms = self.game_time_ms.saturating_add(step_ms);
    }
}
