//! Session score counters. Outlives rounds; reset only when the player quits
//! back to the menu.

use crate::board::Mark;
use crate::common::RoundOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub player: u32,
    pub ties: u32,
    pub cpu: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. `player_mark` is the mark the human holds;
    /// an in-progress outcome records nothing.
    pub fn record(&mut self, outcome: RoundOutcome, player_mark: Mark) {
        match outcome {
            RoundOutcome::Win(mark) if mark == player_mark => self.player += 1,
            RoundOutcome::Win(_) => self.cpu += 1,
            RoundOutcome::Draw => self.ties += 1,
            RoundOutcome::InProgress => {}
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.player + self.ties + self.cpu
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
