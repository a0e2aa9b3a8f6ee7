//! Tuning defaults.

/// Damage dealt per application by a freshly entered damaging block.
pub const DEFAULT_BLOCK_DAMAGE: f32 = 10.0;

/// Cooldown between damage applications (ms).
pub const DEFAULT_TIME_BETWEEN_DAMAGE_MS: u64 = 500;

/// Tallest body a character may have, in blocks. Bounds the rows scanned per move.
pub const MAX_BODY_HEIGHT: f32 = 64.0;

/// Game time advanced per engine tick (ms). 20 Hz.
pub const DEFAULT_TICK_MS: u64 = 50;
