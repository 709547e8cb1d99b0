//! Outcomes reported by the turn scheduler.

use game_core::{EntityId, GridError, Movement, Position};

/// What happened to one entity's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The entity stepped from `from` to `to`.
    Moved {
        entity: EntityId,
        movement: Movement,
        from: Position,
        to: Position,
    },

    /// The entity had no step this turn (still waiting or nowhere to go).
    Idle { entity: EntityId },

    /// The entity walked into the player. The grid is left unchanged.
    Encounter { enemy: EntityId, player: EntityId },

    /// The step was refused when applied.
    Blocked {
        entity: EntityId,
        movement: Movement,
        error: GridError,
    },

    /// The entity left the level between deciding and applying.
    Skipped { entity: EntityId },
}

impl TurnEvent {
    pub fn entity(&self) -> EntityId {
        match self {
            TurnEvent::Moved { entity, .. }
            | TurnEvent::Idle { entity }
            | TurnEvent::Blocked { entity, .. }
            | TurnEvent::Skipped { entity } => *entity,
            TurnEvent::Encounter { enemy, .. } => *enemy,
        }
    }
}

/// Everything that happened in one scheduler turn, in turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    pub events: Vec<TurnEvent>,
}

impl TurnReport {
    pub fn moved(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TurnEvent::Moved { .. }))
            .count()
    }

    pub fn encounters(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.events.iter().filter_map(|event| match event {
            TurnEvent::Encounter { enemy, .. } => Some(*enemy),
            _ => None,
        })
    }
}
