//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Voxel block descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    Water,
    Lava,
}

impl Block {
    pub fn is_lava(&self) -> bool {
        matches!(self, Block::Lava)
    }

    /// Empty cells own no block entity.
    pub fn is_air(&self) -> bool {
        matches!(self, Block::Air)
    }
}

/// Kind tag carried on a damage instruction, read by the host's health system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Blunt environmental damage. Used for damaging blocks.
    #[default]
    Physical,
}
