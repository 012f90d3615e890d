#![cfg(feature = "std")]

//! Session driver: alternates human and CPU turns against one engine, owns
//! the scoreboard, and schedules CPU moves behind a thinking pause guarded
//! by the engine's generation token.

use crate::board::Mark;
use crate::common::{MoveError, RoundOutcome};
use crate::game::GameEngine;
use crate::player::Player;
use crate::player_cpu::CpuPlayer;
use crate::scoreboard::Scoreboard;
use crate::strategy::{think_delay, Difficulty};
use rand::rngs::SmallRng;
use tokio::time::sleep;

pub struct Session {
    engine: GameEngine,
    scoreboard: Scoreboard,
    cpu: CpuPlayer,
    human_mark: Mark,
    thinking: bool,
}

impl Session {
    pub fn new(difficulty: Difficulty, human_mark: Mark) -> Self {
        Self {
            engine: GameEngine::new(),
            scoreboard: Scoreboard::new(),
            cpu: CpuPlayer::new(difficulty),
            human_mark,
            thinking: true,
        }
    }

    /// Skip the CPU thinking pause. Used by the sim binary and tests.
    pub fn without_thinking_delay(mut self) -> Self {
        self.thinking = false;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn cpu_mark(&self) -> Mark {
        self.human_mark.other()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.cpu.difficulty()
    }

    /// Whose move the next [`Session::step`] will take.
    pub fn turn_is_human(&self) -> bool {
        self.engine.turn() == self.human_mark
    }

    /// Advance the round by exactly one move. A terminal result is recorded
    /// on the scoreboard before returning.
    pub async fn step(
        &mut self,
        human: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<RoundOutcome> {
        let outcome = if self.turn_is_human() {
            self.human_move(human, rng)?
        } else {
            self.cpu_move(rng).await?
        };
        if outcome.is_terminal() {
            self.scoreboard.record(outcome, self.human_mark);
            log::info!("round over: {:?}", outcome);
        }
        Ok(outcome)
    }

    /// Play one round to completion. The caller is expected to have reset
    /// the engine (or be on a fresh session).
    pub async fn play_round(
        &mut self,
        human: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<RoundOutcome> {
        loop {
            let outcome = self.step(human, rng).await?;
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }

    fn human_move(
        &mut self,
        human: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<RoundOutcome> {
        loop {
            let Some(index) =
                human.select_move(rng, self.engine.board(), self.human_mark, self.cpu_mark())
            else {
                anyhow::bail!("no move available from player");
            };
            match self.engine.apply_move(index, self.human_mark) {
                Ok(outcome) => return Ok(outcome),
                // refused silently: no state change, ask again
                Err(MoveError::CellOccupied) | Err(MoveError::OutOfRange) => continue,
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }

    /// Schedule and apply the CPU's move. The generation token captured at
    /// scheduling time fences off a reset landing while the pause is
    /// pending; a stale move is dropped as a no-op.
    async fn cpu_move(&mut self, rng: &mut SmallRng) -> anyhow::Result<RoundOutcome> {
        let cpu_mark = self.cpu_mark();
        let token = self.engine.generation();
        if self.thinking {
            sleep(think_delay(self.cpu.difficulty(), rng)).await;
        }
        let Some(index) =
            self.cpu
                .select_move(rng, self.engine.board(), cpu_mark, self.human_mark)
        else {
            // board full: defensive no-op, the outcome is already terminal
            return Ok(self.engine.outcome());
        };
        log::debug!("cpu ({:?}) picked cell {}", self.cpu.difficulty(), index);
        match self.engine.apply_scheduled(token, index, cpu_mark) {
            Ok(outcome) => Ok(outcome),
            Err(MoveError::Stale) => Ok(self.engine.outcome()),
            Err(e) => Err(anyhow::anyhow!(e)),
        }
    }

    /// Clear the board for the next round; scores persist.
    pub fn reset_round(&mut self) {
        self.engine.reset();
    }

    /// Quit-to-menu: scores are wiped along with the board.
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        self.engine.reset();
    }
}
