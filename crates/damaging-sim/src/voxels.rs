//! Voxel world collaborators.
//!
//! Systems see the host's block storage only through `VoxelLookup` and
//! `BlockEntityLookup`, so tests and the engine can supply their own.

use std::collections::HashMap;

use glam::{IVec3, Vec3};
use hecs::Entity;

use damaging_core::enums::Block;
use damaging_core::types::cell_of;

/// Read access to the block stored in each voxel cell.
pub trait VoxelLookup {
    fn block_at_cell(&self, cell: IVec3) -> Block;

    /// Block containing a world-space position.
    fn block_at(&self, position: Vec3) -> Block {
        self.block_at_cell(cell_of(position))
    }
}

/// Resolves the entity owning the block at a world position.
pub trait BlockEntityLookup {
    /// `None` when the host keeps no entity for that block.
    fn block_entity_at(&self, position: Vec3) -> Option<Entity>;
}

/// Sparse in-memory voxel store. Unset cells are air.
#[derive(Debug, Default)]
pub struct VoxelGrid {
    blocks: HashMap<IVec3, Block>,
    block_entities: HashMap<IVec3, Entity>,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `block` at `cell`, returning the block it replaced.
    pub fn set_block(&mut self, cell: IVec3, block: Block) -> Block {
        let previous = if block.is_air() {
            self.blocks.remove(&cell)
        } else {
            self.blocks.insert(cell, block)
        };
        previous.unwrap_or_default()
    }

    /// Link `entity` as the owner of the block at `cell`, returning the previous owner.
    pub fn register_block_entity(&mut self, cell: IVec3, entity: Entity) -> Option<Entity> {
        self.block_entities.insert(cell, entity)
    }

    pub fn unregister_block_entity(&mut self, cell: IVec3) -> Option<Entity> {
        self.block_entities.remove(&cell)
    }

    /// Whether every cell is air.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl VoxelLookup for VoxelGrid {
    fn block_at_cell(&self, cell: IVec3) -> Block {
        self.blocks.get(&cell).copied().unwrap_or_default()
    }
}

impl BlockEntityLookup for VoxelGrid {
    fn block_entity_at(&self, position: Vec3) -> Option<Entity> {
        self.block_entities.get(&cell_of(position)).copied()
    }
}
