//! Level state the scheduler operates on.

use std::sync::Arc;

use game_core::{EnemyData, EntityId, Level, Position};

use crate::ai::Roster;
use crate::entity::{EnemyEntity, Turnable};
use crate::errors::{Result, RuntimeError};

/// The level grid plus everything standing on it.
///
/// The grid's occupancy layer and the roster always agree: every mutation
/// goes through a method here that updates both. Enemies are kept in
/// registration order, which is also turn order.
#[derive(Debug)]
pub struct World {
    level: Level,
    roster: Roster,
    enemies: Vec<EnemyEntity>,
    next_id: u32,
}

impl World {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            roster: Roster::new(),
            enemies: Vec::new(),
            next_id: EntityId::PLAYER.0 + 1,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Mutable grid access for tile layers (spawn marks, doors).
    ///
    /// Occupancy must not be changed through this handle.
    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn position(&self, entity: EntityId) -> Option<Position> {
        self.roster.get(&entity).copied()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.roster.contains_key(&entity)
    }

    pub fn player(&self) -> Option<Position> {
        self.position(EntityId::PLAYER)
    }

    pub fn place_player(&mut self, at: Position) -> Result<()> {
        if let Some(current) = self.player() {
            return Err(RuntimeError::PlayerAlreadyPlaced(current));
        }
        self.level.place(EntityId::PLAYER, at)?;
        self.roster.insert(EntityId::PLAYER, at);
        Ok(())
    }

    /// Creates an enemy with `profile` at `at` and appends it to turn order.
    pub fn spawn_enemy(&mut self, profile: Arc<EnemyData>, at: Position) -> Result<EntityId> {
        let id = EntityId(self.next_id);
        let enemy = EnemyEntity::with_profile(id, EntityId::PLAYER, profile)?;
        self.register(enemy, at)
    }

    /// Adds an enemy that has no profile yet.
    pub fn add_enemy(&mut self, at: Position) -> Result<EntityId> {
        let enemy = EnemyEntity::new(EntityId(self.next_id), EntityId::PLAYER);
        self.register(enemy, at)
    }

    fn register(&mut self, enemy: EnemyEntity, at: Position) -> Result<EntityId> {
        let id = enemy.id();
        self.level.place(id, at)?;
        self.roster.insert(id, at);
        self.enemies.push(enemy);
        self.next_id += 1;
        tracing::debug!("registered enemy {} at {}", id, at);
        Ok(id)
    }

    /// Takes an entity off the level. Returns where it stood.
    pub fn remove(&mut self, entity: EntityId) -> Result<Position> {
        let at = self
            .roster
            .remove(&entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        self.level.vacate(at);
        self.enemies.retain(|enemy| enemy.id() != entity);
        tracing::debug!("removed {} from {}", entity, at);
        Ok(at)
    }

    /// Enemies in registration order.
    pub fn enemies(&self) -> &[EnemyEntity] {
        &self.enemies
    }

    pub fn enemy(&self, entity: EntityId) -> Option<&EnemyEntity> {
        self.enemies.iter().find(|enemy| enemy.id() == entity)
    }

    pub fn enemy_mut(&mut self, entity: EntityId) -> Option<&mut EnemyEntity> {
        self.enemies.iter_mut().find(|enemy| enemy.id() == entity)
    }

    /// Snapshot of who acts this turn, in order.
    pub fn turn_order(&self) -> Vec<EntityId> {
        self.enemies.iter().map(Turnable::id).collect()
    }

    /// Moves an entity on both the grid and the roster. Returns the origin.
    pub(crate) fn move_entity(&mut self, entity: EntityId, to: Position) -> Result<Position> {
        let from = self
            .position(entity)
            .ok_or(RuntimeError::UnknownEntity(entity))?;
        self.level.relocate(from, to)?;
        self.roster.insert(entity, to);
        Ok(from)
    }

    /// Splits the borrow so an enemy can decide against the level it lives on.
    pub(crate) fn decision_parts(
        &mut self,
        entity: EntityId,
    ) -> Option<(&mut EnemyEntity, &Level, &Roster)> {
        let enemy = self.enemies.iter_mut().find(|enemy| enemy.id() == entity)?;
        Some((enemy, &self.level, &self.roster))
    }
}
