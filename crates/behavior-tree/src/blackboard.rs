//! Keyed data store shared by the nodes of one tree.
//!
//! Keys are declared up front with a value type. Writing to an undeclared
//! key or with the wrong type is rejected, and a tree can check at assembly
//! time that every key it will be read through has a writer
//! (see [`crate::Tree::require`]).

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Typed handle to a blackboard entry.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlackboardKey<T: 'static> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BlackboardKey<T> {}

impl<T: 'static> Clone for BlackboardKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> fmt::Debug for BlackboardKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlackboardKey({:?})", self.name)
    }
}

impl<T: 'static> BlackboardKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }
}

/// Errors raised by blackboard access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlackboardError {
    #[error("blackboard key {0:?} was never declared")]
    Undeclared(&'static str),

    #[error("blackboard key {key:?} holds {declared}, not {requested}")]
    TypeMismatch {
        key: &'static str,
        declared: &'static str,
        requested: &'static str,
    },
}

struct Slot {
    type_id: TypeId,
    type_name: &'static str,
    value: Option<Box<dyn Any + Send + Sync>>,
}

/// Per-tree key/value store.
#[derive(Default)]
pub struct Blackboard {
    slots: BTreeMap<&'static str, Slot>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `key` with value type `T`.
    ///
    /// Declaring the same key twice with the same type is a no-op; a second
    /// declaration with a different type is reported.
    pub fn declare<T: Send + Sync + 'static>(
        &mut self,
        key: BlackboardKey<T>,
    ) -> Result<(), BlackboardError> {
        if let Some(slot) = self.slots.get(key.name) {
            return Self::check::<T>(key.name, slot);
        }
        self.slots.insert(
            key.name,
            Slot {
                type_id: TypeId::of::<T>(),
                type_name: std::any::type_name::<T>(),
                value: None,
            },
        );
        Ok(())
    }

    /// Returns `true` if `key` is declared with value type `T`.
    pub fn is_declared<T: 'static>(&self, key: BlackboardKey<T>) -> bool {
        self.slots
            .get(key.name)
            .is_some_and(|slot| slot.type_id == TypeId::of::<T>())
    }

    pub fn set<T: Send + Sync + 'static>(
        &mut self,
        key: BlackboardKey<T>,
        value: T,
    ) -> Result<(), BlackboardError> {
        let slot = self
            .slots
            .get_mut(key.name)
            .ok_or(BlackboardError::Undeclared(key.name))?;
        Self::check::<T>(key.name, slot)?;
        slot.value = Some(Box::new(value));
        Ok(())
    }

    /// Reads the current value. `Ok(None)` means declared but not written
    /// during this evaluation.
    pub fn get<T: 'static>(&self, key: BlackboardKey<T>) -> Result<Option<&T>, BlackboardError> {
        let slot = self
            .slots
            .get(key.name)
            .ok_or(BlackboardError::Undeclared(key.name))?;
        Self::check::<T>(key.name, slot)?;
        Ok(slot
            .value
            .as_ref()
            .and_then(|value| value.downcast_ref::<T>()))
    }

    /// Returns `true` if any declared key currently holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(|slot| slot.value.is_none())
    }

    /// Drops every stored value but keeps the declarations.
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            slot.value = None;
        }
    }

    fn check<T: 'static>(key: &'static str, slot: &Slot) -> Result<(), BlackboardError> {
        if slot.type_id == TypeId::of::<T>() {
            Ok(())
        } else {
            Err(BlackboardError::TypeMismatch {
                key,
                declared: slot.type_name,
                requested: std::any::type_name::<T>(),
            })
        }
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .map(|(name, slot)| (name, (slot.type_name, slot.value.is_some()))),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE: BlackboardKey<u32> = BlackboardKey::new("Score");
    const SCORE_AS_TEXT: BlackboardKey<String> = BlackboardKey::new("Score");
    const MISSING: BlackboardKey<u32> = BlackboardKey::new("Missing");

    #[test]
    fn declared_key_round_trips_value() {
        let mut board = Blackboard::new();
        board.declare(SCORE).unwrap();

        assert_eq!(board.get(SCORE), Ok(None));
        board.set(SCORE, 7).unwrap();
        assert_eq!(board.get(SCORE), Ok(Some(&7)));
    }

    #[test]
    fn undeclared_key_is_rejected() {
        let mut board = Blackboard::new();
        assert_eq!(board.set(MISSING, 1), Err(BlackboardError::Undeclared("Missing")));
        assert_eq!(board.get(MISSING), Err(BlackboardError::Undeclared("Missing")));
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let mut board = Blackboard::new();
        board.declare(SCORE).unwrap();

        assert!(matches!(
            board.set(SCORE_AS_TEXT, "seven".to_string()),
            Err(BlackboardError::TypeMismatch { key: "Score", .. })
        ));
        assert!(board.declare(SCORE_AS_TEXT).is_err());
        assert!(!board.is_declared(SCORE_AS_TEXT));
    }

    #[test]
    fn clear_keeps_declarations() {
        let mut board = Blackboard::new();
        board.declare(SCORE).unwrap();
        board.set(SCORE, 3).unwrap();
        assert!(!board.is_empty());

        board.clear();

        assert!(board.is_empty());
        assert!(board.is_declared(SCORE));
        assert_eq!(board.get(SCORE), Ok(None));
    }
}
