//! Session glue: one game plus the validation runtime answering its requests.
//!
//! The binary drives a [`Session`] from its frame loop; tests drive it directly.

use std::time::Duration;

use tracing::debug;

use crate::core::{GameSnapshot, GameState};
use crate::input::{resolve_command, Command};
use crate::lexicon::{ValidationOutcome, ValidationRuntime};
use crate::types::GameIntent;

pub struct Session {
    game: GameState,
    runtime: ValidationRuntime,
    snap: GameSnapshot,
}

impl Session {
    pub fn new(game: GameState, runtime: ValidationRuntime) -> Self {
        let snap = game.snapshot();
        Self {
            game,
            runtime,
            snap,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Latest snapshot, refreshed after every change.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snap
    }

    pub fn validator_name(&self) -> &'static str {
        self.runtime.validator_name()
    }

    /// Resolve a key command against the current table and apply it.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match resolve_command(command, &self.snap) {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => {
                debug!(?command, phase = self.snap.phase.as_str(), "command has no target");
                false
            }
        }
    }

    pub fn apply(&mut self, intent: GameIntent) {
        if let Some(request) = self.game.apply_intent(intent) {
            debug!(word = %request.word, kind = ?request.ticket.kind, "validating");
            self.runtime.submit(request);
        }
        self.refresh();
    }

    /// Feed every finished lookup back into the game. Returns `true` if any
    /// of them changed the state.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.runtime.try_recv() {
            changed |= self.resolve(outcome);
        }
        if changed {
            self.refresh();
        }
        changed
    }

    /// Block up to `wait` for one lookup and apply it.
    pub fn pump_blocking(&mut self, wait: Duration) -> bool {
        let Some(outcome) = self.runtime.recv_timeout(wait) else {
            return false;
        };
        let changed = self.resolve(outcome);
        self.refresh();
        changed
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let changed = self.game.tick(elapsed_ms);
        if changed {
            self.refresh();
        }
        changed
    }

    fn resolve(&mut self, outcome: ValidationOutcome) -> bool {
        debug!(word = %outcome.word, accepted = outcome.accepted, "lookup finished");
        self.game.resolve_validation(outcome.ticket, outcome.accepted)
    }

    fn refresh(&mut self) {
        self.game.snapshot_into(&mut self.snap);
    }
}
