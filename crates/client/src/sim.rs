//! Headless simulation: one level, its rooms populated, N turns.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, EnemyLoader, LevelData, MapLoader};
use game_core::{EnemyData, GameConfig, Level, LevelRandom, Room, Tile};
use runtime::{TurnReport, TurnScheduler, World, populate_room};

use crate::config::SimConfig;

pub struct Simulation {
    config: GameConfig,
    world: World,
    scheduler: TurnScheduler,
    rng: LevelRandom,
}

impl Simulation {
    /// Loads content from the files named in `sim` and builds the level.
    pub fn load(sim: &SimConfig) -> Result<Self> {
        let mut config = ConfigLoader::load(&sim.config_path)
            .with_context(|| format!("loading config {}", sim.config_path.display()))?;
        if let Some(seed) = sim.seed {
            config.seed = seed;
        }
        if let Some(turns) = sim.turns {
            config.turns = turns;
        }
        let pool = EnemyLoader::load(&sim.enemies_path)
            .with_context(|| format!("loading enemies {}", sim.enemies_path.display()))?;
        let LevelData { level, rooms } = MapLoader::load(&sim.level_path)
            .with_context(|| format!("loading level {}", sim.level_path.display()))?;

        tracing::info!(
            "Loaded {} enemy profiles, {} rooms, seed {}",
            pool.len(),
            rooms.len(),
            config.seed
        );
        Self::build(config, &pool, level, &rooms)
    }

    /// Places the player, then populates every room around them.
    ///
    /// A `@` mark in the layout wins over `config.player_start`.
    pub fn build(
        config: GameConfig,
        pool: &[Arc<EnemyData>],
        level: Level,
        rooms: &[Room],
    ) -> Result<Self> {
        let start = level
            .positions_with(Tile::PLAYER)
            .next()
            .unwrap_or(config.player_start);
        let mut world = World::new(level);
        world
            .place_player(start)
            .with_context(|| format!("placing player at {}", start))?;

        let mut rng = LevelRandom::new(config.seed);
        for room in rooms {
            populate_room(&mut world, room, pool, &mut rng, &config.placement)?;
        }

        Ok(Self {
            config,
            world,
            scheduler: TurnScheduler::new(),
            rng,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Runs up to `config.turns` turns, stopping after the first encounter.
    pub fn run(&mut self) -> Vec<TurnReport> {
        let mut reports = Vec::new();
        for _ in 0..self.config.turns {
            let report = self.scheduler.run_turn(&mut self.world, &mut self.rng);
            let encountered = report.encounters().next().is_some();
            reports.push(report);
            if encountered {
                tracing::info!("Encounter on turn {}; stopping", self.scheduler.turn());
                break;
            }
        }
        reports
    }
}
