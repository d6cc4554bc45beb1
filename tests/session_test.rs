//! Session tests - game loop glue with a real validation runtime

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tile_words::core::GameState;
use tile_words::input::Command;
use tile_words::lexicon::{FixedValidator, ValidationRuntime, WordList, WordValidator};
use tile_words::session::Session;
use tile_words::types::{GameIntent, GamePhase, TICK_MS};

const WAIT: Duration = Duration::from_secs(5);

/// Validator that never answers within a test's patience.
struct Sleepy(Duration);

#[async_trait]
impl WordValidator for Sleepy {
    async fn validate(&self, _word: &str) -> bool {
        tokio::time::sleep(self.0).await;
        true
    }
}

fn session_with(validator: Arc<dyn WordValidator>, timeout: Duration, seed: u64) -> Session {
    let runtime = ValidationRuntime::new(validator, timeout).expect("runtime");
    let mut session = Session::new(GameState::new(seed), runtime);
    session.apply(GameIntent::StartNewGame);
    session.tick(TICK_MS);
    session
}

/// The first three grid letters, as the lexicon would see them.
fn opening_word(seed: u64) -> String {
    let mut game = GameState::new(seed);
    game.start_new_game();
    game.grid()[..3]
        .iter()
        .map(|t| t.face().to_ascii_lowercase())
        .collect()
}

#[test]
fn typed_word_is_accepted_end_to_end() {
    let seed = 41;
    let word = opening_word(seed);
    let list: WordList = [word.as_str()].into_iter().collect();
    let mut session = session_with(Arc::new(list), WAIT, seed);
    assert_eq!(session.validator_name(), "word-list");

    let expected: u32 = session.snapshot().grid[..3].iter().map(|t| t.value).sum();
    let ids: Vec<u32> = session.snapshot().grid[..3].iter().map(|t| t.id).collect();
    for id in ids {
        session.apply(GameIntent::SelectTile(id));
    }
    assert_eq!(session.snapshot().word(), word);

    assert!(session.handle_command(Command::Confirm));
    assert!(session.snapshot().validating);

    assert!(session.pump_blocking(WAIT));
    let snap = session.snapshot();
    assert_eq!(snap.phase, GamePhase::SubmitAccept);
    assert_eq!(snap.score, expected);
    assert!(!snap.validating);
}

#[test]
fn unknown_word_is_rejected() {
    let mut session = session_with(Arc::new(FixedValidator(false)), WAIT, 42);
    let first = session.snapshot().grid[0].face();
    assert!(session.handle_command(Command::Letter(first)));

    session.handle_command(Command::Confirm);
    assert!(session.pump_blocking(WAIT));
    assert_eq!(session.snapshot().phase, GamePhase::SubmitReject);
    assert_eq!(session.snapshot().score, 0);
}

#[test]
fn answer_for_an_edited_selection_is_dropped() {
    let mut session = session_with(Arc::new(FixedValidator(true)), WAIT, 43);
    let first = session.snapshot().grid[0].face();
    session.handle_command(Command::Letter(first));
    session.handle_command(Command::Confirm);

    // Edit before the answer is applied.
    session.handle_command(Command::DeselectLast);

    assert!(!session.pump_blocking(WAIT));
    assert_eq!(session.snapshot().phase, GamePhase::WordBuilding);
    assert_eq!(session.snapshot().score, 0);
}

#[test]
fn slow_lexicon_fails_closed() {
    let slow = Sleepy(Duration::from_secs(30));
    let mut session = session_with(Arc::new(slow), Duration::from_millis(50), 44);
    let first = session.snapshot().grid[0].face();
    session.handle_command(Command::Letter(first));
    session.handle_command(Command::Confirm);

    assert!(session.pump_blocking(WAIT));
    assert_eq!(session.snapshot().phase, GamePhase::SubmitReject);
}

#[test]
fn check_shows_verdict_without_scoring() {
    let mut session = session_with(Arc::new(FixedValidator(true)), WAIT, 45);
    let first = session.snapshot().grid[0].face();
    session.handle_command(Command::Letter(first));
    session.handle_command(Command::CheckWord);

    assert!(session.pump_blocking(WAIT));
    assert_eq!(session.snapshot().check_result, Some(true));
    assert_eq!(session.snapshot().score, 0);
    assert_eq!(session.snapshot().phase, GamePhase::WordBuilding);
}

#[test]
fn pump_without_lookups_is_idle() {
    let mut session = session_with(Arc::new(FixedValidator(true)), WAIT, 46);
    assert!(!session.pump());
    assert!(!session.pump_blocking(Duration::from_millis(10)));
}
