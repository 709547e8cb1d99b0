//! Error types surfaced by the runtime.
//!
//! Grid failures and tree assembly failures are wrapped so callers can
//! bubble them up with the entity or profile they concern.
use behavior_tree::TreeError;
use game_core::{EntityId, GridError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("failed to build behavior tree for profile '{profile}'")]
    TreeBuild {
        profile: String,
        #[source]
        source: TreeError,
    },

    #[error("enemy pool is empty; cannot assign profiles to spawn marks")]
    EmptyEnemyPool,

    #[error("entity {0} is not on the level")]
    UnknownEntity(EntityId),

    #[error("player is already on the level at {0}")]
    PlayerAlreadyPlaced(game_core::Position),
}
