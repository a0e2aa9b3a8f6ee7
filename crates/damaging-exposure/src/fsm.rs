//! Damaging-block exposure finite state machine.
//!
//! Pure functions that compute the next exposure state and the damage to
//! emit, given the current state, one input and the game time. Both the
//! periodic sweep and the block-transition handler are expressed here;
//! systems only translate a `Step` into component changes and events.

use damaging_core::components::DamagingStatus;
use damaging_core::config::DamageConfig;
use damaging_core::enums::Block;

use crate::classify::{block_is_damaging, is_at_head_level};

/// Per-entity exposure state. `Exposed` carries the entity's status component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exposure {
    Unexposed,
    Exposed(DamagingStatus),
}

impl Exposure {
    pub fn from_status(status: Option<DamagingStatus>) -> Self {
        match status {
            Some(status) => Exposure::Exposed(status),
            None => Exposure::Unexposed,
        }
    }

    pub fn status(&self) -> Option<DamagingStatus> {
        match self {
            Exposure::Exposed(status) => Some(*status),
            Exposure::Unexposed => None,
        }
    }
}

/// Input to the exposure FSM for a single entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExposureInput {
    /// Periodic sweep.
    Tick,
    /// The entity crossed into a new block.
    EnteredBlock {
        block: Block,
        /// Body row of the block, 0 at the feet.
        relative_y: i32,
        /// Entity height from its movement profile.
        height: f32,
    },
}

/// What a step did, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entry at head level. Nothing changes.
    Ignored,
    /// Unexposed -> Exposed, eligible for damage immediately.
    Attached,
    /// Exposed -> Exposed on re-entry, cooldown restarted.
    GraceReset,
    /// Exposed -> Unexposed.
    Detached,
    /// Cooldown elapsed; damage emitted and cooldown restarted.
    Damaged,
    Unchanged,
}

/// Output from the exposure FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub exposure: Exposure,
    pub damage: Option<f32>,
    pub transition: Transition,
}

impl Step {
    fn without_damage(exposure: Exposure, transition: Transition) -> Self {
        Self {
            exposure,
            damage: None,
            transition,
        }
    }
}

/// Status for an entity that just entered a damaging block at `now`.
pub fn fresh_status(now: u64, config: &DamageConfig) -> DamagingStatus {
    DamagingStatus {
        next_damage_time_ms: now,
        damage_per_tick: config.block_damage,
        cooldown_ms: config.time_between_damage_ms,
    }
}

/// Evaluate the FSM for one entity and one input at game time `now`.
pub fn step(current: Exposure, input: ExposureInput, now: u64, config: &DamageConfig) -> Step {
    match input {
        ExposureInput::Tick => step_tick(current, now),
        ExposureInput::EnteredBlock {
            block,
            relative_y,
            height,
        } => evaluate_entry(current, block, relative_y, height, now, config),
    }
}

/// Periodic sweep for one entity. Needs no config: the status carries its own cooldown.
pub fn step_tick(current: Exposure, now: u64) -> Step {
    match current {
        // Strictly past: at `now == next_damage_time_ms` damage waits one more tick.
        Exposure::Exposed(mut status) if now > status.next_damage_time_ms => {
            status.next_damage_time_ms = now.saturating_add(status.cooldown_ms);
            Step {
                exposure: Exposure::Exposed(status),
                damage: Some(status.damage_per_tick),
                transition: Transition::Damaged,
            }
        }
        other => Step::without_damage(other, Transition::Unchanged),
    }
}

fn evaluate_entry(
    current: Exposure,
    block: Block,
    relative_y: i32,
    height: f32,
    now: u64,
    config: &DamageConfig,
) -> Step {
    if is_at_head_level(height, relative_y) {
        return Step::without_damage(current, Transition::Ignored);
    }

    if !block_is_damaging(block) {
        return match current {
            Exposure::Exposed(_) => Step::without_damage(Exposure::Unexposed, Transition::Detached),
            Exposure::Unexposed => Step::without_damage(current, Transition::Unchanged),
        };
    }

    match current {
        Exposure::Unexposed => Step::without_damage(
            Exposure::Exposed(fresh_status(now, config)),
            Transition::Attached,
        ),
        Exposure::Exposed(mut status) => {
            status.next_damage_time_ms = now.saturating_add(status.cooldown_ms);
            Step::without_damage(Exposure::Exposed(status), Transition::GraceReset)
        }
    }
}
