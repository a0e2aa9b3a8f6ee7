//! JSON scenario format.

use std::path::Path;

use anyhow::{Context, Result};
use glam::{IVec3, Vec3};
use serde::Deserialize;

use damaging_core::config::DamageConfig;
use damaging_core::enums::Block;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: DamageConfig,
    #[serde(default)]
    pub start_time_ms: u64,
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
pub struct BlockSpec {
    pub cell: IVec3,
    pub block: Block,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Pickup,
}

#[derive(Debug, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    pub kind: EntityKind,
    pub position: Vec3,
    /// Ignored for pickups.
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_height() -> f32 {
    1.8
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStep {
    Move { entity: String, to: Vec3 },
    Tick(u64),
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing scenario {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let json = r#"{
            "start_time_ms": 1000,
            "config": { "block_damage": 5.0 },
            "blocks": [ { "cell": [0, 0, 0], "block": "Lava" } ],
            "entities": [
                { "name": "steve", "kind": "character", "position": [3.0, 0.0, 0.0] },
                { "name": "sword", "kind": "pickup", "position": [0.0, 0.0, 0.0] }
            ],
            "script": [
                { "move": { "entity": "steve", "to": [0.0, 0.0, 0.0] } },
                { "tick": 3 }
            ]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();

        assert_eq!(scenario.start_time_ms, 1000);
        assert_eq!(scenario.config.block_damage, 5.0);
        assert_eq!(scenario.blocks[0].block, Block::Lava);
        assert_eq!(scenario.entities[0].height, 1.8);
        assert!(matches!(scenario.entities[1].kind, EntityKind::Pickup));
        assert!(matches!(scenario.script[0], ScriptStep::Move { .. }));
        assert!(matches!(scenario.script[1], ScriptStep::Tick(3)));
    }
}
