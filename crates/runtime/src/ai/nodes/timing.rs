//! Turn-counting leaves.

use behavior_tree::{Behavior, Blackboard, Status};
use game_core::WaitPolicy;

use crate::ai::{Brain, BrainContext};

/// Holds its sequence back for a number of turns.
///
/// Every evaluation counts one turn down. The evaluation that brings the
/// counter to zero succeeds; earlier ones report [`Status::Running`]. With
/// [`WaitPolicy::Hold`] the leaf stays elapsed and succeeds on every later
/// evaluation. With [`WaitPolicy::Rearm`] the counter is restored right after
/// the success, so the entity acts once every `delay` turns.
///
/// The counter lives across turns: [`Behavior::reset`] leaves it alone and
/// only [`WaitTurn::rearm`] restores it explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitTurn {
    delay: u32,
    remaining: u32,
    policy: WaitPolicy,
}

impl WaitTurn {
    pub fn new(delay: u32, policy: WaitPolicy) -> Self {
        Self {
            delay,
            remaining: delay,
            policy,
        }
    }

    /// Turns left before the next success (0 once elapsed).
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Restores the full delay.
    pub fn rearm(&mut self) {
        self.remaining = self.delay;
    }

    fn count_down(&mut self) -> Status {
        if self.remaining > 1 {
            self.remaining -= 1;
            return Status::Running;
        }
        self.remaining = 0;
        if self.policy == WaitPolicy::Rearm {
            self.rearm();
        }
        Status::Success
    }
}

impl Behavior<Brain> for WaitTurn {
    fn tick(&mut self, _ctx: &mut BrainContext<'_>, _board: &mut Blackboard) -> Status {
        self.count_down()
    }

    fn alias(&self) -> &str {
        "WaitTurn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Roster;
    use game_core::{EntityId, Level, LevelRandom};

    /// Ticks `wait` once per turn, resetting it first as the brain does.
    fn run(wait: &mut WaitTurn, turns: usize) -> Vec<Status> {
        let level = Level::from_ascii("...");
        let roster = Roster::new();
        let mut rng = LevelRandom::new(0);
        let mut board = Blackboard::new();
        (0..turns)
            .map(|_| {
                let mut ctx = BrainContext::new(EntityId(1), &level, &roster, &mut rng);
                Behavior::<Brain>::reset(wait);
                wait.tick(&mut ctx, &mut board)
            })
            .collect()
    }

    #[test]
    fn delay_three_runs_twice_then_holds() {
        let mut wait = WaitTurn::new(3, WaitPolicy::Hold);
        assert_eq!(
            run(&mut wait, 5),
            [
                Status::Running,
                Status::Running,
                Status::Success,
                Status::Success,
                Status::Success,
            ]
        );
        assert_eq!(wait.remaining(), 0);
    }

    #[test]
    fn rearm_policy_repeats_the_cycle() {
        let mut wait = WaitTurn::new(3, WaitPolicy::Rearm);
        assert_eq!(
            run(&mut wait, 6),
            [
                Status::Running,
                Status::Running,
                Status::Success,
                Status::Running,
                Status::Running,
                Status::Success,
            ]
        );
    }

    #[test]
    fn zero_and_one_never_wait() {
        for delay in [0, 1] {
            for policy in [WaitPolicy::Hold, WaitPolicy::Rearm] {
                let mut wait = WaitTurn::new(delay, policy);
                assert!(run(&mut wait, 3).iter().all(|s| s.is_success()));
            }
        }
    }

    #[test]
    fn explicit_rearm_restarts_the_count() {
        let mut wait = WaitTurn::new(2, WaitPolicy::Hold);
        assert_eq!(run(&mut wait, 2), [Status::Running, Status::Success]);

        wait.rearm();
        assert_eq!(wait.remaining(), 2);
        assert_eq!(run(&mut wait, 2), [Status::Running, Status::Success]);
    }
}
