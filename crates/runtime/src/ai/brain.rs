//! Tree construction and the per-turn decision cycle.

use behavior_tree::builder::{selector_named, sequence_named};
use behavior_tree::{Behavior, Status, Tree, TreeError};
use game_core::{EnemyData, EntityId, Movement, Pathing};

use crate::ai::nodes::{GoRandomPosition, GoToTarget, WaitTurn};
use crate::ai::{Brain, BrainContext, NEXT_MOVEMENT};

/// Builds the tree for `profile`.
///
/// ```text
/// Root (selector)
///   Movement (sequence)
///     WaitTurn
///     GoToTarget | GoRandomPosition
/// ```
///
/// The movement leaf is chosen by [`EnemyData::pathing`]; `target` is the
/// entity a direct-pathing enemy walks toward.
pub fn build_tree(profile: &EnemyData, target: EntityId) -> Result<Tree<Brain>, TreeError> {
    let movement: Box<dyn Behavior<Brain>> = match profile.pathing {
        Pathing::Direct => Box::new(GoToTarget::new(target)),
        Pathing::Random => Box::new(GoRandomPosition),
    };
    let wait = WaitTurn::new(profile.reaction_delay, profile.wait_policy);

    let root = selector_named(
        "Root",
        vec![sequence_named("Movement", vec![Box::new(wait), movement])],
    );
    Tree::new(root)?.require(NEXT_MOVEMENT)
}

/// An entity's decision maker.
///
/// Empty until a profile has been assigned; an empty brain never acts.
#[derive(Default)]
pub struct EnemyBrain {
    tree: Option<Tree<Brain>>,
}

impl EnemyBrain {
    pub fn new(tree: Tree<Brain>) -> Self {
        Self { tree: Some(tree) }
    }

    pub fn tree(&self) -> Option<&Tree<Brain>> {
        self.tree.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Swaps in a freshly built tree; the old one and its timers are dropped.
    pub fn replace(&mut self, tree: Tree<Brain>) {
        self.tree = Some(tree);
    }

    /// Runs one reset-then-evaluate cycle.
    pub fn think(&mut self, ctx: &mut BrainContext<'_>) -> Status {
        match self.tree.as_mut() {
            Some(tree) => {
                tree.reset();
                tree.evaluate(ctx)
            }
            None => Status::Failure,
        }
    }

    /// Step published during the last [`think`](Self::think), if any.
    pub fn next_movement(&self) -> Option<Movement> {
        let tree = self.tree.as_ref()?;
        match tree.get(NEXT_MOVEMENT) {
            Ok(step) => step.copied().filter(|step| !step.is_none()),
            Err(err) => {
                tracing::warn!("brain blackboard unreadable: {}", err);
                None
            }
        }
    }

    /// Thinks and returns the intended step.
    ///
    /// `None` when the tree failed, is still waiting, or published nothing.
    pub fn decide(&mut self, ctx: &mut BrainContext<'_>) -> Option<Movement> {
        let status = self.think(ctx);
        let step = match status {
            Status::Failure => None,
            Status::Success | Status::Running => self.next_movement(),
        };
        tracing::debug!(
            "{} decided {:?} -> {}",
            ctx.entity,
            status,
            step.map_or_else(|| "nothing".to_string(), |s| s.to_string())
        );
        step
    }
}
