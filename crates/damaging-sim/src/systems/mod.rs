//! ECS systems that operate on the simulation world.
//!
//! Systems are pure functions that take `&mut World` plus the game time and
//! host lookups they need. They do not own state; all state lives in components.

pub mod block_transition;
pub mod damage_tick;
pub mod pickup_cleanup;
