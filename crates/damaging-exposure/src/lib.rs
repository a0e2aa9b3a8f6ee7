//! Exposure rules for damaging blocks.
//!
//! Implements the per-entity Unexposed/Exposed state machine, the head-level
//! exemption and block classification. No ECS dependency.

pub mod classify;
pub mod fsm;

pub use damaging_core as core;
