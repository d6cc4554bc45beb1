//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::HAND_SIZE;

/// Keyboard command, before it is matched against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a tile showing this (uppercase) letter
    Letter(char),
    /// Pick a blank tile
    Blank,
    /// Drop the latest pick
    DeselectLast,
    ClearSelection,
    CheckWord,
    /// Submit, acknowledge, continue or start, depending on the phase
    Confirm,
    /// Mark a hand slot for trade-in (0-based)
    ToggleTrade(usize),
    NewGame,
    EndGame,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::EndGame),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(Command::Letter(c.to_ascii_uppercase()))
        }
        KeyCode::Char('_') | KeyCode::Char('.') => Some(Command::Blank),

        // Trade-in marks
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            (slot < HAND_SIZE).then_some(Command::ToggleTrade(slot))
        }

        KeyCode::Backspace | KeyCode::Delete => Some(Command::DeselectLast),
        KeyCode::Esc => Some(Command::ClearSelection),
        KeyCode::Char('?') | KeyCode::Tab => Some(Command::CheckWord),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),

        KeyCode::F(2) => Some(Command::NewGame),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Plain `q` is a letter here, so quitting needs Control.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('q') | KeyCode::Char('Q')
        )
}
