//! Damage engine: the host-side loop around the damaging-blocks rule.
//!
//! `DamageEngine` owns the hecs ECS world, the voxel grid and the game
//! clock. It detects block entries when entities move, queues them for the
//! next tick boundary and runs both systems each tick. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::{IVec3, Vec3};
use hecs::{Entity, World};
use log::{info, warn};

use damaging_core::components::{BlockEntity, DamagingStatus, Location, MovementProfile, Pickup};
use damaging_core::config::DamageConfig;
use damaging_core::constants::MAX_BODY_HEIGHT;
use damaging_core::enums::Block;
use damaging_core::events::{DamageEvent, EnterBlock};
use damaging_core::types::{cell_of, SimTime};

use crate::error::EngineError;
use crate::systems;
use crate::voxels::{VoxelGrid, VoxelLookup};

/// Configuration for starting a new engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimConfig {
    pub damage: DamageConfig,
    /// Game time at tick 0 (ms).
    pub start_time_ms: u64,
}

/// Everything one tick produced.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub tick: u64,
    /// Game time the tick ran at.
    pub game_time_ms: u64,
    pub damage: Vec<DamageEvent>,
    pub destroyed: Vec<Entity>,
}

pub struct DamageEngine {
    world: World,
    voxels: VoxelGrid,
    time: SimTime,
    config: DamageConfig,
    event_queue: VecDeque<EnterBlock>,
    despawn_buffer: Vec<Entity>,
}

impl DamageEngine {
    pub fn new(config: SimConfig) -> Self {
        info!(
            "damage engine starting at {} ms: {} damage every {} ms, {} ms ticks",
            config.start_time_ms,
            config.damage.block_damage,
            config.damage.time_between_damage_ms,
            config.damage.tick_ms
        );
        Self {
            world: World::new(),
            voxels: VoxelGrid::new(),
            time: SimTime::starting_at(config.start_time_ms),
            config: config.damage,
            event_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Spawn a moving character with its feet at `position`.
    /// `height` must be finite, positive and at most `MAX_BODY_HEIGHT`.
    pub fn spawn_character(
        &mut self,
        position: Vec3,
        height: f32,
    ) -> Result<Entity, EngineError> {
        if !(height > 0.0 && height <= MAX_BODY_HEIGHT) {
            return Err(EngineError::InvalidHeight(height));
        }
        Ok(self
            .world
            .spawn((Location { position }, MovementProfile { height })))
    }

    /// Spawn a dropped item at `position`.
    pub fn spawn_pickup(&mut self, position: Vec3) -> Entity {
        self.world.spawn((Location { position }, Pickup))
    }

    /// Store `block` at `cell`. Every non-air block gets its own block entity;
    /// the entity of a replaced block is despawned.
    pub fn place_block(&mut self, cell: IVec3, block: Block) {
        if let Some(previous) = self.voxels.unregister_block_entity(cell) {
            if self.world.despawn(previous).is_err() {
                warn!("block entity {previous:?} at {cell} was already despawned");
            }
        }
        self.voxels.set_block(cell, block);
        if !block.is_air() {
            let entity = self.world.spawn((BlockEntity { cell, block },));
            self.voxels.register_block_entity(cell, entity);
        }
    }

    /// Move an entity. Characters crossing into different blocks get one
    /// `EnterBlock` queued per body row whose block changed.
    pub fn move_entity(&mut self, entity: Entity, position: Vec3) -> Result<(), EngineError> {
        let old_position = self
            .world
            .get::<&Location>(entity)
            .map(|location| location.position)
            .map_err(|err| EngineError::from_component(entity, err))?;
        let height = self
            .world
            .get::<&MovementProfile>(entity)
            .ok()
            .map(|profile| profile.height);

        if let Ok(mut location) = self.world.get::<&mut Location>(entity) {
            location.position = position;
        }

        if let Some(height) = height {
            self.queue_block_entries(entity, old_position, position, height);
        }
        Ok(())
    }

    /// Queue a block-entry event for processing at the next tick boundary.
    pub fn queue_event(&mut self, event: EnterBlock) {
        self.event_queue.push_back(event);
    }

    /// Advance the simulation by one tick and return what happened.
    pub fn tick(&mut self) -> TickReport {
        let now = self.time.game_time_ms;

        while let Some(event) = self.event_queue.pop_front() {
            systems::block_transition::handle(&mut self.world, &event, now, &self.config);
        }

        let mut report = TickReport {
            tick: self.time.tick,
            game_time_ms: now,
            ..Default::default()
        };
        systems::damage_tick::run(&mut self.world, now, &self.voxels, &mut report.damage);
        systems::pickup_cleanup::run(
            &mut self.world,
            &self.voxels,
            &mut self.despawn_buffer,
            &mut report.destroyed,
        );

        self.time.advance(self.config.tick_ms);
        report
    }

    /// Current damage status of an entity, if exposed.
    pub fn status(&self, entity: Entity) -> Option<DamagingStatus> {
        self.world.get::<&DamagingStatus>(entity).ok().map(|s| *s)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &DamageConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for hosts attaching their own components.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn voxels(&self) -> &VoxelGrid {
        &self.voxels
    }

    fn queue_block_entries(&mut self, entity: Entity, from: Vec3, to: Vec3, height: f32) {
        let old_feet = cell_of(from);
        let new_feet = cell_of(to);
        if old_feet == new_feet {
            return;
        }

        // Heights are validated on spawn, so this stays within MAX_BODY_HEIGHT rows.
        let rows = height.ceil().min(MAX_BODY_HEIGHT) as i32;
        for y in 0..rows {
            let offset = IVec3::new(0, y, 0);
            // Far positions saturate in `cell_of`; keep the row offset from overflowing.
            let old_block = self.voxels.block_at_cell(old_feet.saturating_add(offset));
            let new_block = self.voxels.block_at_cell(new_feet.saturating_add(offset));
            if old_block != new_block {
                self.event_queue.push_back(EnterBlock {
                    entity,
                    old_block,
                    new_block,
                    relative_position: offset,
                });
            }
        }
    }
}
