use crate::state::Position;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed of the level random source.
    pub seed: u64,
    /// Where the player starts on the level.
    pub player_start: Position,
    /// Number of turns a headless simulation runs.
    pub turns: u32,
    pub placement: PlacementRules,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5eed;
    pub const DEFAULT_TURNS: u32 = 20;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            player_start: Position::ORIGIN,
            turns: Self::DEFAULT_TURNS,
            placement: PlacementRules::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Room population density.
///
/// A room receives `ceil(area / area_divisor * density)` enemies, capped by
/// the number of legal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementRules {
    pub area_divisor: u32,
    pub density: f64,
}

impl PlacementRules {
    pub const DEFAULT_AREA_DIVISOR: u32 = 8;
    pub const DEFAULT_DENSITY: f64 = 0.6;
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            area_divisor: Self::DEFAULT_AREA_DIVISOR,
            density: Self::DEFAULT_DENSITY,
        }
    }
}
