//! Evaluation view for enemy behavior trees.
//!
//! Trees are stored on the entity and reused every turn, so they never hold
//! game state. Each decision builds a [`BrainContext`] that borrows the grid,
//! the roster of entity positions and the level's random source for the
//! duration of one evaluation.

use std::collections::BTreeMap;

use behavior_tree::{BlackboardKey, Context};
use game_core::{EntityId, LevelGrid, Movement, Position, RandomSource};

/// Step chosen by a movement leaf during the current evaluation.
pub const NEXT_MOVEMENT: BlackboardKey<Movement> = BlackboardKey::new("NextMovement");

/// Current position of every entity on the level.
pub type Roster = BTreeMap<EntityId, Position>;

/// Context family for enemy trees.
pub struct Brain;

impl Context for Brain {
    type View<'a> = BrainContext<'a>;
}

/// What an enemy tree can see while it decides.
pub struct BrainContext<'a> {
    /// The entity making the decision.
    pub entity: EntityId,
    pub grid: &'a dyn LevelGrid,
    pub roster: &'a Roster,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> BrainContext<'a> {
    pub fn new(
        entity: EntityId,
        grid: &'a dyn LevelGrid,
        roster: &'a Roster,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            entity,
            grid,
            roster,
            rng,
        }
    }

    /// Position of the deciding entity.
    pub fn position(&self) -> Option<Position> {
        self.locate(self.entity)
    }

    /// Position of any entity, `None` once it has left the level.
    pub fn locate(&self, entity: EntityId) -> Option<Position> {
        self.roster.get(&entity).copied()
    }
}
