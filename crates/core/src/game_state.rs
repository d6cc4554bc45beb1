//! Game state module - the turn/round state machine
//!
//! Ties together the deck, the selection and the score. Every user intent goes
//! through [`GameState::apply_intent`]; intents that do not fit the current phase
//! are dropped. Word validation is the only asynchronous step: the machine hands
//! out a [`ValidationRequest`] tagged with its current generation and applies the
//! answer in [`GameState::resolve_validation`] only if nothing changed meanwhile.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::deck::DeckManager;
use crate::distribution::TileDistribution;
use crate::scoring::{points_for, ScoreKeeper};
use crate::selection::SelectionTracker;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    deck: DeckManager,
    selection: SelectionTracker,
    score: ScoreKeeper,
    phase: GamePhase,
    /// Tiles of the last accepted word; replaced when discarding finishes.
    used_tiles: ArrayVec<TileId, MAX_SELECTION>,
    pending_trades: ArrayVec<usize, HAND_SIZE>,
    word_points: u32,
    check_result: Option<bool>,
    check_timer_ms: u32,
    phase_timer_ms: u32,
    /// Bumped on every selection edit and phase change.
    generation: u64,
    /// Generation of the submit waiting on the lexicon.
    pending_submit: Option<u64>,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
}

impl GameState {
    /// Create a game in `pregame` using the standard tile table
    pub fn new(seed: u64) -> Self {
        Self::with_distribution(TileDistribution::standard(), seed)
    }

    pub fn with_distribution(distribution: TileDistribution, seed: u64) -> Self {
        Self {
            deck: DeckManager::with_distribution(distribution, seed),
            selection: SelectionTracker::new(),
            score: ScoreKeeper::new(),
            phase: GamePhase::Pregame,
            used_tiles: ArrayVec::new(),
            pending_trades: ArrayVec::new(),
            word_points: 0,
            check_result: None,
            check_timer_ms: 0,
            phase_timer_ms: 0,
            generation: 0,
            pending_submit: None,
            game_id: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn words_played(&self) -> u32 {
        self.score.words()
    }

    pub fn word_points(&self) -> u32 {
        self.word_points
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn check_result(&self) -> Option<bool> {
        self.check_result
    }

    pub fn validating(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn selection(&self) -> &[TileId] {
        self.selection.ids()
    }

    pub fn used_tiles(&self) -> &[TileId] {
        &self.used_tiles
    }

    pub fn pending_trades(&self) -> &[usize] {
        &self.pending_trades
    }

    pub fn grid(&self) -> &[Tile] {
        self.deck.grid()
    }

    pub fn hand(&self) -> &[Tile] {
        self.deck.hand()
    }

    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    /// Candidate word for the current selection
    pub fn word(&self) -> String {
        self.selection.word(&self.deck)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clear();
        out.grid.extend(self.deck.grid().iter().copied());
        out.hand.clear();
        out.hand.extend(self.deck.hand().iter().copied());
        out.selection.clear();
        out.selection.extend(self.selection.ids().iter().copied());
        out.used.clear();
        out.used.extend(self.used_tiles.iter().copied());
        out.pending_trades.clear();
        out.pending_trades.extend(self.pending_trades.iter().copied());

        out.phase = self.phase;
        out.score = self.score.total();
        out.word_points = self.word_points;
        out.check_result = self.check_result;
        out.validating = self.validating();
        out.deck_remaining = self.deck.remaining() as u32;
        out.words_played = self.score.words();
        out.game_id = self.game_id;
        out.generation = self.generation;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a front-end intent.
    ///
    /// Returns a request when the intent needs the lexicon; the caller must feed
    /// the answer back through [`GameState::resolve_validation`].
    pub fn apply_intent(&mut self, intent: GameIntent) -> Option<ValidationRequest> {
        match intent {
            GameIntent::StartNewGame => {
                self.start_new_game();
                None
            }
            GameIntent::EndGame => {
                self.end_game();
                None
            }
            GameIntent::SelectTile(id) => {
                self.select_tile(id);
                None
            }
            GameIntent::DeselectTile(id) => {
                self.deselect_tile(id);
                None
            }
            GameIntent::ClearSelection => {
                self.clear_selection();
                None
            }
            GameIntent::CheckWord => self.check_word(),
            GameIntent::SubmitWord => self.submit_word(),
            GameIntent::ToggleTrade(slot) => {
                self.toggle_trade(slot);
                None
            }
            GameIntent::ConfirmContinue => {
                self.confirm_continue();
                None
            }
        }
    }

    /// Mint, shuffle and deal a fresh game. Allowed in every phase.
    pub fn start_new_game(&mut self) {
        self.deck.new_deck();
        let dealt = self.deck.deal();

        self.selection.clear();
        self.score.reset();
        self.used_tiles.clear();
        self.pending_trades.clear();
        self.word_points = 0;
        self.check_result = None;
        self.game_id = self.game_id.wrapping_add(1);

        if !dealt {
            warn!(
                population = self.deck.population(),
                "tile population too small for an opening deal"
            );
        }
        info!(
            game_id = self.game_id,
            population = self.deck.population(),
            "new game dealt"
        );
        self.set_phase(GamePhase::InitDeal);
    }

    /// Clear the table and finish. Score stays visible until the next game.
    pub fn end_game(&mut self) -> bool {
        if !self.phase.in_game() {
            return self.ignore("endGame");
        }
        self.deck.clear_cards();
        self.selection.clear();
        self.used_tiles.clear();
        self.pending_trades.clear();
        self.word_points = 0;
        self.check_result = None;
        info!(score = self.score.total(), "game ended by player");
        self.set_phase(GamePhase::GameOver);
        true
    }

    pub fn select_tile(&mut self, id: TileId) -> bool {
        if !self.phase.is_building() {
            return self.ignore("selectTile");
        }
        if !self.selection.select(id, &self.deck) {
            debug!(id, "tile not selectable");
            return false;
        }
        self.selection_changed();
        true
    }

    pub fn deselect_tile(&mut self, id: TileId) -> bool {
        if !self.phase.is_building() {
            return self.ignore("deselectTile");
        }
        if !self.selection.deselect(id) {
            return false;
        }
        self.selection_changed();
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        if !self.phase.is_building() {
            return self.ignore("clearSelection");
        }
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        self.selection_changed();
        true
    }

    /// Probe the lexicon without scoring.
    ///
    /// Asking again while a verdict is on display just clears the verdict.
    pub fn check_word(&mut self) -> Option<ValidationRequest> {
        if !self.phase.is_building() {
            self.ignore("checkWord");
            return None;
        }
        if self.check_result.take().is_some() {
            return None;
        }
        Some(self.request(ValidationKind::Check))
    }

    /// Submit the current selection for scoring.
    ///
    /// Empty selections are submitted too; the lexicon rejects them.
    pub fn submit_word(&mut self) -> Option<ValidationRequest> {
        if !self.phase.is_building() {
            self.ignore("submitWord");
            return None;
        }
        self.pending_submit = Some(self.generation);
        Some(self.request(ValidationKind::Submit))
    }

    /// Apply a lexicon verdict. Returns `false` if it was stale or out of place.
    pub fn resolve_validation(&mut self, ticket: ValidationTicket, accepted: bool) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale validation result"
            );
            return false;
        }
        if !self.phase.is_building() {
            return false;
        }

        match ticket.kind {
            ValidationKind::Check => {
                self.check_result = Some(accepted);
                self.check_timer_ms = CHECK_DISPLAY_MS;
                true
            }
            ValidationKind::Submit => {
                if self.pending_submit != Some(ticket.generation) {
                    return false;
                }
                self.pending_submit = None;
                self.check_result = None;

                if accepted {
                    let points = points_for(self.selection.ids(), &self.deck);
                    self.score.commit(points);
                    self.used_tiles.clear();
                    self.used_tiles.extend(self.selection.ids().iter().copied());
                    self.selection.clear();
                    self.word_points = 0;
                    info!(points, score = self.score.total(), "word accepted");
                    self.set_phase(GamePhase::SubmitAccept);
                } else {
                    debug!("word rejected");
                    self.set_phase(GamePhase::SubmitReject);
                }
                true
            }
        }
    }

    /// Mark or unmark a hand slot for trade-in while discarding.
    ///
    /// Slots holding a tile of the accepted word are replaced anyway and cannot
    /// be marked.
    pub fn toggle_trade(&mut self, slot: usize) -> bool {
        if self.phase != GamePhase::Discarding {
            return self.ignore("toggleTrade");
        }
        let Some(tile) = self.deck.hand().get(slot) else {
            return false;
        };
        if self.used_tiles.contains(&tile.id) {
            return false;
        }

        match self.pending_trades.iter().position(|&s| s == slot) {
            Some(i) => {
                self.pending_trades.remove(i);
            }
            None => {
                self.pending_trades.push(slot);
                self.pending_trades.sort_unstable();
            }
        }
        true
    }

    /// Move past a verdict or finish discarding.
    pub fn confirm_continue(&mut self) -> bool {
        match self.phase {
            GamePhase::SubmitAccept => self.set_phase(GamePhase::Discarding),
            GamePhase::SubmitReject => self.set_phase(GamePhase::ConfirmReject),
            GamePhase::Discarding => {
                for &slot in &self.pending_trades {
                    self.deck.trade_in_hand_card(slot);
                }
                let more = self.deck.redeal_cards(&self.used_tiles);

                self.used_tiles.clear();
                self.pending_trades.clear();
                self.selection.clear();
                self.word_points = 0;

                if more {
                    self.set_phase(GamePhase::Resetting);
                } else {
                    info!(score = self.score.total(), "deck exhausted");
                    self.set_phase(GamePhase::GameOver);
                }
            }
            GamePhase::ConfirmReject => {
                self.selection.clear();
                self.word_points = 0;
                let next = self.building_phase();
                self.set_phase(next);
            }
            _ => return self.ignore("confirmContinue"),
        }
        true
    }

    /// Advance display timers and settle transient phases.
    ///
    /// `init-deal` and `resetting` settle on the first tick after they are
    /// entered; verdicts stay up for their display time.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if self.check_result.is_some() {
            self.check_timer_ms = self.check_timer_ms.saturating_sub(elapsed_ms);
            if self.check_timer_ms == 0 {
                self.check_result = None;
                changed = true;
            }
        }

        match self.phase {
            GamePhase::InitDeal => {
                let next = if self.deck.grid().is_empty() {
                    GamePhase::GameOver
                } else {
                    self.building_phase()
                };
                self.set_phase(next);
                changed = true;
            }
            GamePhase::Resetting => {
                let next = self.building_phase();
                self.set_phase(next);
                changed = true;
            }
            GamePhase::SubmitAccept | GamePhase::SubmitReject => {
                self.phase_timer_ms = self.phase_timer_ms.saturating_sub(elapsed_ms);
                if self.phase_timer_ms == 0 {
                    let next = if self.phase == GamePhase::SubmitAccept {
                        GamePhase::Discarding
                    } else {
                        GamePhase::ConfirmReject
                    };
                    self.set_phase(next);
                    changed = true;
                }
            }
            _ => {}
        }

        changed
    }

    /// `final-round` once the deck can no longer refill a whole table
    fn building_phase(&self) -> GamePhase {
        if self.deck.remaining() < DEAL_SIZE {
            GamePhase::FinalRound
        } else {
            GamePhase::WordBuilding
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!(from = self.phase.as_str(), to = phase.as_str(), "phase change");
        self.phase = phase;
        self.phase_timer_ms = match phase {
            GamePhase::SubmitAccept | GamePhase::SubmitReject => RESULT_DISPLAY_MS,
            _ => 0,
        };
        self.bump_generation();
    }

    fn selection_changed(&mut self) {
        self.word_points = points_for(self.selection.ids(), &self.deck);
        self.check_result = None;
        self.bump_generation();
    }

    /// Any outstanding request becomes stale.
    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_submit = None;
    }

    fn request(&self, kind: ValidationKind) -> ValidationRequest {
        ValidationRequest {
            ticket: ValidationTicket {
                generation: self.generation,
                kind,
            },
            word: self.selection.word(&self.deck),
        }
    }

    fn ignore(&self, intent: &str) -> bool {
        debug!(intent, phase = self.phase.as_str(), "ignoring intent");
        false
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
