//! Simulation configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Where the simulation reads its content and writes its log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub config_path: PathBuf,
    pub enemies_path: PathBuf,
    pub level_path: PathBuf,
    /// Directory for `sim.log`; `None` falls back to the platform cache dir.
    pub log_dir: Option<PathBuf>,
    /// Overrides `GameConfig::seed`.
    pub seed: Option<u64>,
    /// Overrides `GameConfig::turns`.
    pub turns: Option<u32>,
}

impl SimConfig {
    /// Directory of the content bundled with the workspace.
    pub const DEFAULT_DATA_DIR: &'static str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

    /// Construct the configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_DATA_DIR` - Content directory (default: bundled data)
    /// - `SIM_CONFIG` - Game config TOML (default: `<data>/config.toml`)
    /// - `SIM_ENEMIES` - Enemy pool RON (default: `<data>/enemies.ron`)
    /// - `SIM_LEVEL` - Level RON (default: `<data>/level.ron`)
    /// - `SIM_LOG_DIR` - Log directory
    /// - `SIM_SEED`, `SIM_TURNS` - Overrides for the loaded config
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("SIM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR));
        let path = |key: &str, file: &str| {
            lookup(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(file))
        };

        Self {
            config_path: path("SIM_CONFIG", "config.toml"),
            enemies_path: path("SIM_ENEMIES", "enemies.ron"),
            level_path: path("SIM_LEVEL", "level.ron"),
            log_dir: lookup("SIM_LOG_DIR").map(PathBuf::from),
            seed: lookup("SIM_SEED").and_then(|v| v.parse().ok()),
            turns: lookup("SIM_TURNS").and_then(|v| v.parse().ok()),
        }
    }
}
