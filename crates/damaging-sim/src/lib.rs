//! Simulation side of the damaging-blocks rule.
//!
//! Owns the hecs ECS world, runs the damage sweep and the pickup cleanup
//! each tick, and routes block-entry events through the exposure FSM.

pub mod engine;
pub mod error;
pub mod systems;
pub mod voxels;

pub use damaging_core as core;
pub use engine::DamageEngine;
