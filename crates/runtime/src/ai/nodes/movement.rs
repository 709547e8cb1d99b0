//! Movement leaves.
//!
//! Both leaves publish the chosen step under [`NEXT_MOVEMENT`] and succeed,
//! or fail without writing anything when no legal step exists. Neither
//! touches the grid; the scheduler applies the step later.

use behavior_tree::{Behavior, Blackboard, BlackboardError, Status};
use game_core::{EntityId, LevelGrid, Movement, Position};

use crate::ai::{Brain, BrainContext, NEXT_MOVEMENT};

/// Steps one cell closer to a target entity.
///
/// Only steps that reduce the Manhattan distance are considered, the
/// horizontal one first. A step is legal when the cell is passable and
/// either free or held by the target itself (walking into the target is an
/// encounter, resolved by the scheduler).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoToTarget {
    target: EntityId,
}

impl GoToTarget {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }
}

impl Behavior<Brain> for GoToTarget {
    fn tick(&mut self, ctx: &mut BrainContext<'_>, board: &mut Blackboard) -> Status {
        let (Some(from), Some(goal)) = (ctx.position(), ctx.locate(self.target)) else {
            return Status::Failure;
        };
        match step_toward(ctx.grid, from, goal, self.target) {
            Some(step) => publish(board, step),
            None => Status::Failure,
        }
    }

    fn alias(&self) -> &str {
        "GoToTarget"
    }

    fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
        board.declare(NEXT_MOVEMENT)
    }
}

/// First legal distance-reducing step from `from` toward `goal`.
pub fn step_toward(
    grid: &dyn LevelGrid,
    from: Position,
    goal: Position,
    target: EntityId,
) -> Option<Movement> {
    let horizontal = match (goal.x - from.x).signum() {
        1 => Some(Movement::Right),
        -1 => Some(Movement::Left),
        _ => None,
    };
    let vertical = match (goal.y - from.y).signum() {
        1 => Some(Movement::Down),
        -1 => Some(Movement::Up),
        _ => None,
    };

    [horizontal, vertical].into_iter().flatten().find(|step| {
        let to = step.destination_from(from);
        grid.is_passable(to) && grid.occupant(to).is_none_or(|occupant| occupant == target)
    })
}

/// Steps to a uniformly chosen free neighbour.
///
/// Candidates are collected in [`Movement::STEPS`] order before drawing, so
/// the same seed always yields the same walk. No number is drawn when every
/// neighbour is blocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoRandomPosition;

impl Behavior<Brain> for GoRandomPosition {
    fn tick(&mut self, ctx: &mut BrainContext<'_>, board: &mut Blackboard) -> Status {
        let Some(from) = ctx.position() else {
            return Status::Failure;
        };
        let open: Vec<Movement> = Movement::STEPS
            .into_iter()
            .filter(|step| ctx.grid.can_enter(step.destination_from(from)))
            .collect();
        if open.is_empty() {
            return Status::Failure;
        }
        let step = open[ctx.rng.pick_index(open.len())];
        publish(board, step)
    }

    fn alias(&self) -> &str {
        "GoRandomPosition"
    }

    fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
        board.declare(NEXT_MOVEMENT)
    }
}

fn publish(board: &mut Blackboard, step: Movement) -> Status {
    match board.set(NEXT_MOVEMENT, step) {
        Ok(()) => Status::Success,
        Err(err) => {
            tracing::warn!("movement leaf could not publish {}: {}", step, err);
            Status::Failure
        }
    }
}
