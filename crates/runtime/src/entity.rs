//! Enemy entities and the capabilities the scheduler drives them through.

use std::sync::Arc;

use game_core::{EnemyData, EntityId, Movement};

use crate::ai::{BrainContext, EnemyBrain, build_tree};
use crate::errors::{Result, RuntimeError};

/// Something that takes part in turn order.
pub trait Turnable {
    fn id(&self) -> EntityId;

    /// Picks this turn's step without touching the grid.
    fn decide(&mut self, ctx: &mut BrainContext<'_>) -> Option<Movement>;
}

/// Something whose presentation reacts to movement.
pub trait Movable {
    /// Called right before an approved step is applied.
    fn on_move_start(&mut self, movement: Movement);
}

/// An AI-driven enemy.
///
/// The enemy's position lives in the [`World`](crate::World) roster; the
/// entity itself carries its profile, its brain and presentation state.
pub struct EnemyEntity {
    id: EntityId,
    target: EntityId,
    profile: Option<Arc<EnemyData>>,
    brain: EnemyBrain,
    flip_x: bool,
}

impl EnemyEntity {
    /// Creates an enemy with no profile. It never acts until one is set.
    pub fn new(id: EntityId, target: EntityId) -> Self {
        Self {
            id,
            target,
            profile: None,
            brain: EnemyBrain::default(),
            flip_x: false,
        }
    }

    pub fn with_profile(id: EntityId, target: EntityId, profile: Arc<EnemyData>) -> Result<Self> {
        let mut enemy = Self::new(id, target);
        enemy.set_profile(profile)?;
        Ok(enemy)
    }

    /// Assigns a profile and rebuilds the brain from it.
    ///
    /// The new tree is built before anything is replaced, so a failed build
    /// leaves the enemy unchanged. A successful one discards the old tree
    /// along with its wait counters.
    pub fn set_profile(&mut self, profile: Arc<EnemyData>) -> Result<()> {
        let tree = build_tree(&profile, self.target).map_err(|source| RuntimeError::TreeBuild {
            profile: profile.name.clone(),
            source,
        })?;
        tracing::debug!(
            "{} uses profile '{}':\n{}",
            self.id,
            profile.name,
            tree.describe()
        );
        self.brain.replace(tree);
        self.flip_x = profile.is_flipped;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn profile(&self) -> Option<&EnemyData> {
        self.profile.as_deref()
    }

    pub fn brain(&self) -> &EnemyBrain {
        &self.brain
    }

    /// Whether the sprite is drawn mirrored horizontally.
    pub fn flip_x(&self) -> bool {
        self.flip_x
    }
}

impl Turnable for EnemyEntity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn decide(&mut self, ctx: &mut BrainContext<'_>) -> Option<Movement> {
        self.brain.decide(ctx)
    }
}

impl Movable for EnemyEntity {
    fn on_move_start(&mut self, movement: Movement) {
        let authored_left = self.profile.as_ref().is_some_and(|p| p.is_flipped);
        let facing = if authored_left {
            movement.mirrored()
        } else {
            movement
        };
        match facing {
            Movement::Left => self.flip_x = true,
            Movement::Right => self.flip_x = false,
            _ => {}
        }
    }
}

impl std::fmt::Debug for EnemyEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnemyEntity")
            .field("id", &self.id)
            .field("profile", &self.profile.as_ref().map(|p| p.name.as_str()))
            .field("flip_x", &self.flip_x)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Pathing;

    fn enemy(profile: EnemyData) -> EnemyEntity {
        EnemyEntity::with_profile(EntityId(1), EntityId::PLAYER, Arc::new(profile)).unwrap()
    }

    #[test]
    fn unprofiled_enemy_has_no_tree() {
        let enemy = EnemyEntity::new(EntityId(4), EntityId::PLAYER);
        assert!(enemy.profile().is_none());
        assert!(enemy.brain().is_empty());
    }

    #[test]
    fn profile_change_rebuilds_the_tree() {
        let mut enemy = enemy(EnemyData::new("skeleton", Pathing::Direct));
        assert!(enemy.brain().tree().unwrap().contains("GoToTarget"));

        enemy
            .set_profile(Arc::new(EnemyData::new("slime", Pathing::Random)))
            .unwrap();
        let tree = enemy.brain().tree().unwrap();
        assert!(tree.contains("GoRandomPosition"));
        assert!(!tree.contains("GoToTarget"));
        assert_eq!(enemy.profile().unwrap().name, "slime");
    }

    #[test]
    fn facing_follows_horizontal_steps() {
        let mut enemy = enemy(EnemyData::new("skeleton", Pathing::Direct));
        assert!(!enemy.flip_x());

        enemy.on_move_start(Movement::Left);
        assert!(enemy.flip_x());
        enemy.on_move_start(Movement::Up);
        assert!(enemy.flip_x());
        enemy.on_move_start(Movement::Right);
        assert!(!enemy.flip_x());
    }

    #[test]
    fn flipped_sprites_mirror_the_facing() {
        let mut enemy = enemy(EnemyData::new("bat", Pathing::Direct).flipped());
        assert!(enemy.flip_x());

        enemy.on_move_start(Movement::Right);
        assert!(enemy.flip_x());
        enemy.on_move_start(Movement::Left);
        assert!(!enemy.flip_x());
    }
}
