//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and the [`Context`] trait that
//! names what a node can see while it is evaluated.

use crate::{Blackboard, BlackboardError, Status};

/// Family of evaluation views a tree is driven with.
///
/// Trees are long-lived (one per entity, reused every turn) while the state
/// they read is only borrowed for the duration of one evaluation. The
/// generic associated type lets a stored tree accept a view that borrows
/// game state for any lifetime.
///
/// ```rust,ignore
/// struct Brain;
///
/// impl Context for Brain {
///     type View<'a> = BrainContext<'a>;
/// }
/// ```
pub trait Context: 'static {
    /// What nodes receive during a single evaluation.
    type View<'a>;
}

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C: Context>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The evaluation view (read game state, draw randomness).
    /// * `board` - The owning tree's blackboard. Nodes publish results here
    ///   instead of reaching up to a parent.
    fn tick(&mut self, ctx: &mut C::View<'_>, board: &mut Blackboard) -> Status;

    /// Clears per-evaluation bookkeeping.
    ///
    /// Composites forward this to every child. Leaves that carry state across
    /// turns (timers, counters) must keep that state.
    fn reset(&mut self) {}

    /// Human-readable name used in debug output and lookups.
    fn alias(&self) -> &str;

    /// Registers the blackboard keys this node writes.
    ///
    /// Called once when the tree is assembled.
    fn declare(&self, _board: &mut Blackboard) -> Result<(), BlackboardError> {
        Ok(())
    }

    /// Child nodes, in evaluation order. Leaves have none.
    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &[]
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C: Context> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C::View<'_>, board: &mut Blackboard) -> Status {
        (**self).tick(ctx, board)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn alias(&self) -> &str {
        (**self).alias()
    }

    #[inline]
    fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
        (**self).declare(board)
    }

    #[inline]
    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        (**self).children()
    }
}
