#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};

    use crate::config::DamageConfig;
    use crate::constants::*;
    use crate::enums::{Block, DamageType};
    use crate::error::ConfigError;
    use crate::types::{cell_of, SimTime};

    #[test]
    fn test_only_lava_is_lava() {
        let others = [
            Block::Air,
            Block::Stone,
            Block::Dirt,
            Block::Grass,
            Block::Sand,
            Block::Water,
        ];
        for block in others {
            assert!(!block.is_lava(), "{block:?} should not be lava");
        }
        assert!(Block::Lava.is_lava());
    }

    #[test]
    fn test_block_serde_names() {
        let json = serde_json::to_string(&Block::Lava).unwrap();
        assert_eq!(json, "\"Lava\"");
        let back: Block = serde_json::from_str("\"Stone\"").unwrap();
        assert_eq!(back, Block::Stone);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Block::default(), Block::Air);
        assert_eq!(DamageType::default(), DamageType::Physical);

        let config = DamageConfig::default();
        assert_eq!(config.block_damage, DEFAULT_BLOCK_DAMAGE);
        assert_eq!(config.time_between_damage_ms, DEFAULT_TIME_BETWEEN_DAMAGE_MS);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_cell_of_rounds_to_nearest() {
        assert_eq!(cell_of(Vec3::new(0.0, 0.0, 0.0)), IVec3::ZERO);
        assert_eq!(cell_of(Vec3::new(0.4, 1.6, -0.4)), IVec3::new(0, 2, 0));
        assert_eq!(cell_of(Vec3::new(0.5, -0.5, -1.6)), IVec3::new(1, 0, -2));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::starting_at(1000);
        time.advance(50);
        time.advance(50);
        assert_eq!(time.tick, 2);
        assert_eq!(time.game_time_ms, 1100);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = DamageConfig::from_json_str(r#"{ "block_damage": 5.0 }"#).unwrap();
        assert_eq!(config.block_damage, 5.0);
        assert_eq!(config.time_between_damage_ms, DEFAULT_TIME_BETWEEN_DAMAGE_MS);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_config_rejects_negative_damage() {
        let err = DamageConfig::from_json_str(r#"{ "block_damage": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "block_damage",
                ..
            }
        ));
    }

    #[test]
    fn test_config_rejects_zero_tick() {
        let err = DamageConfig::from_json_str(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tick_ms", .. }));
    }

    #[test]
    fn test_config_malformed_json() {
        let err = DamageConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = DamageConfig::load("/nonexistent/damage.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/damage.json"));
    }
}
