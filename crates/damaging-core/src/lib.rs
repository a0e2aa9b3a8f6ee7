//! Core types and definitions for the damaging-blocks rule.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, block descriptors, events, configuration and constants.
//! It has no dependency on any runtime or frame loop.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod types;

#[cfg(test)]
mod tests;
