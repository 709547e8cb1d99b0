//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).

use crate::{Behavior, Blackboard, BlackboardError, Context, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops at that child** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C: Context> {
    alias: String,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C: Context> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            alias: "Sequence".to_string(),
            children,
        }
    }

    /// Replaces the default alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

impl<C: Context> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C::View<'_>, board: &mut Blackboard) -> Status {
        for child in &mut self.children {
            match child.tick(ctx, board) {
                Status::Success => continue,
                status => return status, // Failure or Running short-circuits
            }
        }
        Status::Success
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
        self.children
            .iter()
            .try_for_each(|child| child.declare(board))
    }

    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately** and returns it
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. Child
/// order is a priority list: earlier children are preferred.
pub struct Selector<C: Context> {
    alias: String,
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C: Context> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            alias: "Selector".to_string(),
            children,
        }
    }

    /// Replaces the default alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

impl<C: Context> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C::View<'_>, board: &mut Blackboard) -> Status {
        for child in &mut self.children {
            match child.tick(ctx, board) {
                Status::Failure => continue,
                status => return status, // Success or Running short-circuits
            }
        }
        Status::Failure
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
        self.children
            .iter()
            .try_for_each(|child| child.declare(board))
    }

    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test context: nodes append their alias when ticked.
    struct Trace;

    impl Context for Trace {
        type View<'a> = Vec<&'static str>;
    }

    struct Fixed {
        name: &'static str,
        status: Status,
        resets: Arc<AtomicUsize>,
    }

    fn fixed(name: &'static str, status: Status) -> Box<dyn Behavior<Trace>> {
        counted(name, status, &Arc::new(AtomicUsize::new(0)))
    }

    fn counted(
        name: &'static str,
        status: Status,
        resets: &Arc<AtomicUsize>,
    ) -> Box<dyn Behavior<Trace>> {
        Box::new(Fixed {
            name,
            status,
            resets: Arc::clone(resets),
        })
    }

    impl Behavior<Trace> for Fixed {
        fn tick(&mut self, ctx: &mut Vec<&'static str>, _board: &mut Blackboard) -> Status {
            ctx.push(self.name);
            self.status
        }

        fn reset(&mut self) {
            self.resets.fetch_add(1, Ordering::Relaxed);
        }

        fn alias(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![
            fixed("a", Status::Success),
            fixed("b", Status::Success),
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(seq.tick(&mut trace, &mut board), Status::Success);
        assert_eq!(trace, ["a", "b"]);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            fixed("first", Status::Success),
            fixed("second", Status::Success),
            fixed("third", Status::Failure),
            fixed("fourth", Status::Success), // Should not execute
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(seq.tick(&mut trace, &mut board), Status::Failure);
        assert_eq!(trace, ["first", "second", "third"]);
    }

    #[test]
    fn sequence_stops_at_running_child() {
        let mut seq = Sequence::new(vec![
            fixed("wait", Status::Running),
            fixed("act", Status::Success),
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(seq.tick(&mut trace, &mut board), Status::Running);
        assert_eq!(trace, ["wait"]);
    }

    #[test]
    fn selector_returns_first_non_failure() {
        let mut sel = Selector::new(vec![
            fixed("first", Status::Failure),
            fixed("second", Status::Failure),
            fixed("third", Status::Success),
            fixed("fourth", Status::Success), // Should not execute
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(sel.tick(&mut trace, &mut board), Status::Success);
        assert_eq!(trace, ["first", "second", "third"]);
    }

    #[test]
    fn selector_stops_at_running_child() {
        let mut sel = Selector::new(vec![
            fixed("busy", Status::Running),
            fixed("fallback", Status::Success),
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(sel.tick(&mut trace, &mut board), Status::Running);
        assert_eq!(trace, ["busy"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![
            fixed("a", Status::Failure),
            fixed("b", Status::Failure),
        ]);

        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(sel.tick(&mut trace, &mut board), Status::Failure);
        assert_eq!(trace, ["a", "b"]);
    }

    #[test]
    fn reset_reaches_every_descendant() {
        let resets = Arc::new(AtomicUsize::new(0));
        let mut root = Selector::new(vec![
            Box::new(Sequence::new(vec![
                counted("a", Status::Success, &resets),
                counted("b", Status::Success, &resets),
            ])),
            counted("c", Status::Success, &resets),
        ]);

        root.reset();
        root.reset();
        assert_eq!(resets.load(Ordering::Relaxed), 6);

        // Evaluation still works after resets and visits children in order.
        let mut trace = Vec::new();
        let mut board = Blackboard::new();
        assert_eq!(root.tick(&mut trace, &mut board), Status::Success);
        assert_eq!(trace, ["a", "b"]);
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].children()[1].alias(), "b");
    }

    #[test]
    fn aliases_default_and_override() {
        let seq = Sequence::new(vec![fixed("a", Status::Success)]);
        assert_eq!(Behavior::<Trace>::alias(&seq), "Sequence");

        let sel = Selector::new(vec![fixed("a", Status::Success)]).with_alias("Root");
        assert_eq!(Behavior::<Trace>::alias(&sel), "Root");
    }
}
