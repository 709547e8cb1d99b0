//! Enemy AI profiles.
//!
//! An [`EnemyData`] is immutable configuration attached to an enemy. Its
//! pathing strategy decides the shape of the behavior tree the enemy is
//! built with; everything else tunes the leaves or presentation.

/// How an enemy chooses where to step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pathing {
    /// Step toward the player.
    #[default]
    Direct,
    /// Step to a random free neighbour.
    Random,
}

/// What a wait leaf does once its delay has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaitPolicy {
    /// Stay elapsed: act every turn after the first delay.
    #[default]
    Hold,
    /// Start counting again: act once every `reaction_delay` turns.
    Rearm,
}

/// Immutable AI profile of one enemy kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyData {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pathing: Pathing,
    /// Turns spent waiting before the enemy may act.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reaction_delay: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wait_policy: WaitPolicy,
    /// The sprite is authored facing left.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_flipped: bool,
}

impl EnemyData {
    pub fn new(name: impl Into<String>, pathing: Pathing) -> Self {
        Self {
            name: name.into(),
            pathing,
            reaction_delay: 0,
            wait_policy: WaitPolicy::default(),
            is_flipped: false,
        }
    }

    pub fn with_reaction_delay(mut self, turns: u32) -> Self {
        self.reaction_delay = turns;
        self
    }

    pub fn with_wait_policy(mut self, policy: WaitPolicy) -> Self {
        self.wait_policy = policy;
        self
    }

    pub fn flipped(mut self) -> Self {
        self.is_flipped = true;
        self
    }
}
