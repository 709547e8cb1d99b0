//! Tree ownership and per-turn lifecycle.
//!
//! A [`Tree`] owns its root node and exactly one [`Blackboard`]. Callers run
//! one decision cycle as `reset()` then `evaluate()`, and read results back
//! with [`Tree::get`].

use std::fmt::Write as _;

use crate::{Behavior, Blackboard, BlackboardError, BlackboardKey, Context, Status};

/// Errors raised while assembling a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("tree reads key {key:?} but no node declares it")]
    UndeclaredKey { key: &'static str },

    #[error(transparent)]
    Blackboard(#[from] BlackboardError),
}

/// An owned behavior tree with its blackboard.
pub struct Tree<C: Context> {
    root: Box<dyn Behavior<C>>,
    blackboard: Blackboard,
}

impl<C: Context> Tree<C> {
    /// Assembles a tree and collects the keys its nodes declare.
    pub fn new(root: Box<dyn Behavior<C>>) -> Result<Self, TreeError> {
        let mut blackboard = Blackboard::new();
        root.declare(&mut blackboard)?;
        Ok(Self { root, blackboard })
    }

    /// Fails unless some node declared `key` with type `T`.
    ///
    /// Used by whoever reads the blackboard after evaluation, so a tree that
    /// can never produce the value is rejected before it runs.
    pub fn require<T: 'static>(self, key: BlackboardKey<T>) -> Result<Self, TreeError> {
        if self.blackboard.is_declared(key) {
            Ok(self)
        } else {
            Err(TreeError::UndeclaredKey { key: key.name() })
        }
    }

    /// Clears transient state: every node's bookkeeping and the blackboard
    /// values from the previous evaluation.
    pub fn reset(&mut self) {
        self.root.reset();
        self.blackboard.clear();
    }

    /// Evaluates the root once.
    pub fn evaluate(&mut self, ctx: &mut C::View<'_>) -> Status {
        self.root.tick(ctx, &mut self.blackboard)
    }

    /// Reads a value published during the last evaluation.
    pub fn get<T: 'static>(&self, key: BlackboardKey<T>) -> Result<Option<&T>, BlackboardError> {
        self.blackboard.get(key)
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn root(&self) -> &dyn Behavior<C> {
        self.root.as_ref()
    }

    /// Returns `true` if any node in the tree carries `alias`.
    pub fn contains(&self, alias: &str) -> bool {
        fn walk<C: Context>(node: &dyn Behavior<C>, alias: &str) -> bool {
            node.alias() == alias || node.children().iter().any(|c| walk(c.as_ref(), alias))
        }
        walk(self.root.as_ref(), alias)
    }

    /// Renders the alias hierarchy, one node per line, two spaces per level.
    pub fn describe(&self) -> String {
        fn walk<C: Context>(node: &dyn Behavior<C>, depth: usize, out: &mut String) {
            let _ = writeln!(out, "{:indent$}{}", "", node.alias(), indent = depth * 2);
            for child in node.children() {
                walk(child.as_ref(), depth + 1, out);
            }
        }
        let mut out = String::new();
        walk(self.root.as_ref(), 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{selector, sequence};

    const PICK: BlackboardKey<u8> = BlackboardKey::new("Pick");
    const OTHER: BlackboardKey<u8> = BlackboardKey::new("Other");

    struct Numbers;

    impl Context for Numbers {
        type View<'a> = &'a mut Vec<u8>;
    }

    /// Pops a number from the context and publishes it.
    struct PopInto;

    impl Behavior<Numbers> for PopInto {
        fn tick(&mut self, ctx: &mut &mut Vec<u8>, board: &mut Blackboard) -> Status {
            match ctx.pop() {
                Some(n) if board.set(PICK, n).is_ok() => Status::Success,
                _ => Status::Failure,
            }
        }

        fn alias(&self) -> &str {
            "PopInto"
        }

        fn declare(&self, board: &mut Blackboard) -> Result<(), BlackboardError> {
            board.declare(PICK)
        }
    }

    fn tree() -> Tree<Numbers> {
        Tree::new(selector(vec![sequence(vec![Box::new(PopInto)])]))
            .and_then(|tree| tree.require(PICK))
            .unwrap()
    }

    #[test]
    fn evaluate_publishes_and_reset_clears() {
        let mut tree = tree();
        let mut numbers = vec![4, 9];

        tree.reset();
        assert_eq!(tree.evaluate(&mut &mut numbers), Status::Success);
        assert_eq!(tree.get(PICK), Ok(Some(&9)));

        tree.reset();
        assert_eq!(tree.get(PICK), Ok(None));
        assert_eq!(tree.evaluate(&mut &mut numbers), Status::Success);
        assert_eq!(tree.get(PICK), Ok(Some(&4)));

        tree.reset();
        assert_eq!(tree.evaluate(&mut &mut numbers), Status::Failure);
        assert_eq!(tree.get(PICK), Ok(None));
    }

    #[test]
    fn requiring_an_unwritten_key_fails_at_assembly() {
        let result = Tree::new(selector(vec![Box::new(PopInto)])).and_then(|t| t.require(OTHER));
        assert!(matches!(
            result,
            Err(TreeError::UndeclaredKey { key: "Other" })
        ));
    }

    #[test]
    fn describe_and_lookup_use_aliases() {
        let tree = tree();
        assert_eq!(tree.describe(), "Selector\n  Sequence\n    PopInto\n");
        assert!(tree.contains("PopInto"));
        assert!(!tree.contains("Missing"));
        assert_eq!(tree.root().alias(), "Selector");
    }
}
