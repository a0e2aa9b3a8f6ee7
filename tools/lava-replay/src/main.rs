//! lava-replay: drive the damage engine from a JSON scenario.
//!
//! Usage:
//!   lava-replay scenarios/lava_pool.json
//!   lava-replay scenarios/lava_pool.json --ticks 40 --config damage.json
//!
//! Prints one JSON line per tick to stdout. Set RUST_LOG=debug to see
//! exposure transitions on stderr.

mod scenario;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use hecs::Entity;
use log::info;
use serde::Serialize;

use damaging_core::config::DamageConfig;
use damaging_core::enums::DamageType;
use damaging_sim::engine::{SimConfig, TickReport};
use damaging_sim::DamageEngine;

use crate::scenario::{EntityKind, Scenario, ScriptStep};

#[derive(Parser, Debug)]
#[command(name = "lava-replay", about = "Replay a damaging-blocks scenario tick by tick")]
struct Args {
    /// Scenario JSON file.
    scenario: PathBuf,

    /// Extra ticks to run after the script finishes.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Damage config JSON, replacing the scenario's own `config`.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct TickLine<'a> {
    tick: u64,
    game_time_ms: u64,
    damage: Vec<DamageLine<'a>>,
    destroyed: Vec<&'a str>,
}

#[derive(Serialize)]
struct DamageLine<'a> {
    target: &'a str,
    amount: f32,
    damage_type: DamageType,
    /// Whether a block entity was resolved as the source.
    from_block: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = Scenario::load(&args.scenario)?;
    let damage = match &args.config {
        Some(path) => DamageConfig::load(path)
            .with_context(|| format!("loading config override {}", path.display()))?,
        None => {
            scenario.config.validate().context("scenario config")?;
            scenario.config
        }
    };

    replay(&scenario, damage, args.ticks, |line| {
        println!("{}", serde_json::to_string(line)?);
        Ok(())
    })
}

/// Build the scenario world, run its script plus `extra_ticks`, and hand
/// every tick's line to `emit`.
fn replay(
    scenario: &Scenario,
    damage: DamageConfig,
    extra_ticks: u64,
    mut emit: impl FnMut(&TickLine<'_>) -> Result<()>,
) -> Result<()> {
    let mut engine = DamageEngine::new(SimConfig {
        damage,
        start_time_ms: scenario.start_time_ms,
    });
    for spec in &scenario.blocks {
        engine.place_block(spec.cell, spec.block);
    }

    let mut by_name: HashMap<&str, Entity> = HashMap::new();
    let mut names: HashMap<Entity, &str> = HashMap::new();
    for spec in &scenario.entities {
        let entity = match spec.kind {
            EntityKind::Character => engine
                .spawn_character(spec.position, spec.height)
                .with_context(|| format!("spawning `{}`", spec.name))?,
            EntityKind::Pickup => engine.spawn_pickup(spec.position),
        };
        if by_name.insert(spec.name.as_str(), entity).is_some() {
            bail!("duplicate entity name `{}`", spec.name);
        }
        names.insert(entity, spec.name.as_str());
    }
    info!(
        "loaded {} blocks and {} entities",
        scenario.blocks.len(),
        scenario.entities.len()
    );

    for step in &scenario.script {
        match step {
            ScriptStep::Move { entity, to } => {
                let Some(&target) = by_name.get(entity.as_str()) else {
                    bail!("script moves unknown entity `{entity}`");
                };
                engine
                    .move_entity(target, *to)
                    .with_context(|| format!("moving `{entity}`"))?;
            }
            ScriptStep::Tick(count) => run_ticks(&mut engine, *count, &names, &mut emit)?,
        }
    }
    run_ticks(&mut engine, extra_ticks, &names, &mut emit)
}

fn run_ticks(
    engine: &mut DamageEngine,
    count: u64,
    names: &HashMap<Entity, &str>,
    emit: &mut impl FnMut(&TickLine<'_>) -> Result<()>,
) -> Result<()> {
    for _ in 0..count {
        let report = engine.tick();
        emit(&tick_line(&report, names))?;
    }
    Ok(())
}

fn tick_line<'a>(report: &TickReport, names: &HashMap<Entity, &'a str>) -> TickLine<'a> {
    let name = |entity: &Entity| names.get(entity).copied().unwrap_or("?");
    TickLine {
        tick: report.tick,
        game_time_ms: report.game_time_ms,
        damage: report
            .damage
            .iter()
            .map(|event| DamageLine {
                target: name(&event.target),
                amount: event.amount,
                damage_type: event.damage_type,
                from_block: event.instigator.is_some(),
            })
            .collect(),
        destroyed: report.destroyed.iter().map(name).collect(),
    }
}
