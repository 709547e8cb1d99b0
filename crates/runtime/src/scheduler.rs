//! Turn scheduling.
//!
//! A turn walks the enemies in registration order. For each one the
//! scheduler asks for a decision, then applies it to the grid before the
//! next enemy decides, so earlier enemies see a level where later ones have
//! not moved yet. Deciding never mutates the grid; applying is the only
//! place positions change.

use game_core::{EntityId, GridError, Level, LevelGrid, Movement, Position, RandomSource};

use crate::ai::BrainContext;
use crate::entity::{Movable, Turnable};
use crate::events::{TurnEvent, TurnReport};
use crate::world::World;

/// A step an entity wants to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intent {
    pub entity: EntityId,
    pub movement: Movement,
}

/// Drives enemies through turns.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    turn: u64,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns run so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Asks `entity` for this turn's step.
    ///
    /// Returns `None` for unknown entities, entities without a profile and
    /// entities that are waiting or have nowhere to go. The grid is never
    /// modified; only the entity's own timers and `rng` advance.
    pub fn decide(
        &self,
        world: &mut World,
        entity: EntityId,
        rng: &mut dyn RandomSource,
    ) -> Option<Intent> {
        let (enemy, level, roster) = world.decision_parts(entity)?;
        let mut ctx = BrainContext::new(entity, level, roster, rng);
        enemy
            .decide(&mut ctx)
            .map(|movement| Intent { entity, movement })
    }

    /// Applies a decided step to the grid.
    ///
    /// The step is re-validated against the current level, since other
    /// entities may have moved since it was decided. Walking into the player
    /// reports an encounter and leaves the grid alone.
    pub fn apply(&self, world: &mut World, intent: Intent) -> TurnEvent {
        let Intent { entity, movement } = intent;
        let Some(from) = world.position(entity) else {
            tracing::debug!("{} left the level before its step was applied", entity);
            return TurnEvent::Skipped { entity };
        };
        if movement.is_none() {
            return TurnEvent::Idle { entity };
        }

        let to = movement.destination_from(from);
        if let Some(player) = world.level().occupant(to).filter(|id| id.is_player()) {
            tracing::info!("{} encountered the player at {}", entity, to);
            return TurnEvent::Encounter {
                enemy: entity,
                player,
            };
        }
        if let Some(error) = entry_error(world.level(), to) {
            tracing::warn!("{} cannot step {}: {}", entity, movement, error);
            return TurnEvent::Blocked {
                entity,
                movement,
                error,
            };
        }

        if let Some(enemy) = world.enemy_mut(entity) {
            enemy.on_move_start(movement);
        }
        match world.move_entity(entity, to) {
            Ok(from) => TurnEvent::Moved {
                entity,
                movement,
                from,
                to,
            },
            Err(err) => {
                tracing::warn!("{} failed to move to {}: {}", entity, to, err);
                TurnEvent::Blocked {
                    entity,
                    movement,
                    error: GridError::Blocked(to),
                }
            }
        }
    }

    /// Runs one full turn: every enemy decides and applies in order.
    pub fn run_turn(&mut self, world: &mut World, rng: &mut dyn RandomSource) -> TurnReport {
        self.turn += 1;
        let order = world.turn_order();
        let mut events = Vec::with_capacity(order.len());

        for entity in order {
            if !world.contains(entity) {
                events.push(TurnEvent::Skipped { entity });
                continue;
            }
            let event = match self.decide(world, entity, rng) {
                Some(intent) => self.apply(world, intent),
                None => TurnEvent::Idle { entity },
            };
            events.push(event);
        }

        let report = TurnReport {
            turn: self.turn,
            events,
        };
        tracing::info!(
            "turn {}: {} of {} enemies moved, {} encounters",
            report.turn,
            report.moved(),
            report.events.len(),
            report.encounters().count()
        );
        report
    }
}

/// Why `to` cannot be entered, if it cannot.
fn entry_error(level: &Level, to: Position) -> Option<GridError> {
    if !level.contains(to) {
        return Some(GridError::OutOfBounds(to));
    }
    if !level.is_passable(to) {
        return Some(GridError::Blocked(to));
    }
    level
        .occupant(to)
        .map(|occupant| GridError::Occupied {
            position: to,
            occupant,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EnemyData, LevelRandom, Pathing};
    use std::sync::Arc;

    fn corridor() -> World {
        let mut world = World::new(game_core::Level::from_ascii("#######\n#.....#\n#######"));
        world.place_player(Position::new(5, 1)).unwrap();
        world
    }

    fn skeleton() -> Arc<EnemyData> {
        Arc::new(EnemyData::new("skeleton", Pathing::Direct))
    }

    #[test]
    fn apply_rejects_a_stale_step() {
        let mut world = corridor();
        let a = world.spawn_enemy(skeleton(), Position::new(1, 1)).unwrap();
        let b = world.spawn_enemy(skeleton(), Position::new(3, 1)).unwrap();
        let scheduler = TurnScheduler::new();

        let event = scheduler.apply(
            &mut world,
            Intent {
                entity: a,
                movement: Movement::Right,
            },
        );
        assert!(matches!(event, TurnEvent::Moved { .. }));

        // `a` now stands where `b` wants to go back to.
        let event = scheduler.apply(
            &mut world,
            Intent {
                entity: b,
                movement: Movement::Left,
            },
        );
        assert_eq!(
            event,
            TurnEvent::Blocked {
                entity: b,
                movement: Movement::Left,
                error: GridError::Occupied {
                    position: Position::new(2, 1),
                    occupant: a,
                },
            }
        );
        assert_eq!(world.position(b), Some(Position::new(3, 1)));
    }

    #[test]
    fn stepping_onto_the_player_is_an_encounter() {
        let mut world = corridor();
        let id = world.spawn_enemy(skeleton(), Position::new(4, 1)).unwrap();
        let scheduler = TurnScheduler::new();
        let mut rng = LevelRandom::new(0);

        let intent = scheduler.decide(&mut world, id, &mut rng).unwrap();
        assert_eq!(intent.movement, Movement::Right);
        assert_eq!(
            scheduler.apply(&mut world, intent),
            TurnEvent::Encounter {
                enemy: id,
                player: EntityId::PLAYER,
            }
        );
        assert_eq!(world.position(id), Some(Position::new(4, 1)));
        assert_eq!(world.player(), Some(Position::new(5, 1)));
    }

    #[test]
    fn wall_steps_are_blocked() {
        let mut world = corridor();
        let id = world.spawn_enemy(skeleton(), Position::new(1, 1)).unwrap();
        let event = TurnScheduler::new().apply(
            &mut world,
            Intent {
                entity: id,
                movement: Movement::Up,
            },
        );
        assert!(matches!(
            event,
            TurnEvent::Blocked {
                error: GridError::Blocked(_),
                ..
            }
        ));
    }

    #[test]
    fn unknown_entities_do_not_decide() {
        let mut world = corridor();
        let mut rng = LevelRandom::new(0);
        assert_eq!(
            TurnScheduler::new().decide(&mut world, EntityId(9), &mut rng),
            None
        );
    }
}
