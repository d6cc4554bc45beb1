//! Turn keyboard commands into game intents using the latest snapshot.
//!
//! Letters are ambiguous on their own: the same letter can sit on several
//! tiles. The first unselected match wins, grid before hand, in slot order.

use tile_words_core::GameSnapshot;

use crate::map::Command;
use crate::types::{GameIntent, GamePhase, Tile, TileId};

pub fn resolve_command(command: Command, snap: &GameSnapshot) -> Option<GameIntent> {
    match command {
        Command::Letter(letter) => {
            pick(snap, |t| t.letter == Some(letter)).map(GameIntent::SelectTile)
        }
        Command::Blank => pick(snap, Tile::is_blank).map(GameIntent::SelectTile),
        Command::DeselectLast => {
            if !snap.playable() {
                return None;
            }
            snap.selection.last().copied().map(GameIntent::DeselectTile)
        }
        Command::ClearSelection => snap.playable().then_some(GameIntent::ClearSelection),
        Command::CheckWord => snap.playable().then_some(GameIntent::CheckWord),
        Command::Confirm => confirm_intent(snap.phase),
        Command::ToggleTrade(slot) => {
            (snap.phase == GamePhase::Discarding).then_some(GameIntent::ToggleTrade(slot))
        }
        Command::NewGame => Some(GameIntent::StartNewGame),
        Command::EndGame => snap.phase.in_game().then_some(GameIntent::EndGame),
    }
}

/// What Enter means in each phase
pub fn confirm_intent(phase: GamePhase) -> Option<GameIntent> {
    match phase {
        GamePhase::Pregame | GamePhase::GameOver => Some(GameIntent::StartNewGame),
        GamePhase::WordBuilding | GamePhase::FinalRound => Some(GameIntent::SubmitWord),
        GamePhase::SubmitAccept
        | GamePhase::SubmitReject
        | GamePhase::Discarding
        | GamePhase::ConfirmReject => Some(GameIntent::ConfirmContinue),
        GamePhase::InitDeal | GamePhase::Resetting => None,
    }
}

fn pick(snap: &GameSnapshot, matches: impl Fn(&Tile) -> bool) -> Option<TileId> {
    if !snap.playable() {
        return None;
    }
    snap.grid
        .iter()
        .chain(snap.hand.iter())
        .find(|t| matches(t) && !snap.is_selected(t.id))
        .map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building() -> GameSnapshot {
        let mut snap = GameSnapshot {
            phase: GamePhase::WordBuilding,
            ..Default::default()
        };
        snap.grid.push(Tile::new(101, 'C', 3));
        snap.grid.push(Tile::new(102, 'A', 1));
        snap.grid.push(Tile::blank(150));
        snap.hand.push(Tile::new(110, 'A', 1));
        snap.hand.push(Tile::new(111, 'T', 1));
        snap
    }

    #[test]
    fn letter_prefers_grid_then_hand() {
        let mut snap = building();
        assert_eq!(
            resolve_command(Command::Letter('A'), &snap),
            Some(GameIntent::SelectTile(102))
        );

        snap.selection.push(102);
        assert_eq!(
            resolve_command(Command::Letter('A'), &snap),
            Some(GameIntent::SelectTile(110))
        );

        snap.selection.push(110);
        assert_eq!(resolve_command(Command::Letter('A'), &snap), None);
    }

    #[test]
    fn missing_letter_is_ignored() {
        let snap = building();
        assert_eq!(resolve_command(Command::Letter('Z'), &snap), None);
    }

    #[test]
    fn blank_key_picks_blank() {
        let snap = building();
        assert_eq!(
            resolve_command(Command::Blank, &snap),
            Some(GameIntent::SelectTile(150))
        );
    }

    #[test]
    fn backspace_drops_latest_pick() {
        let mut snap = building();
        assert_eq!(resolve_command(Command::DeselectLast, &snap), None);
        snap.selection.extend([101, 111]);
        assert_eq!(
            resolve_command(Command::DeselectLast, &snap),
            Some(GameIntent::DeselectTile(111))
        );
    }

    #[test]
    fn confirm_follows_phase() {
        assert_eq!(
            confirm_intent(GamePhase::Pregame),
            Some(GameIntent::StartNewGame)
        );
        assert_eq!(
            confirm_intent(GamePhase::FinalRound),
            Some(GameIntent::SubmitWord)
        );
        assert_eq!(
            confirm_intent(GamePhase::Discarding),
            Some(GameIntent::ConfirmContinue)
        );
        assert_eq!(confirm_intent(GamePhase::Resetting), None);
    }

    #[test]
    fn trades_only_while_discarding() {
        let mut snap = building();
        assert_eq!(resolve_command(Command::ToggleTrade(1), &snap), None);
        snap.phase = GamePhase::Discarding;
        assert_eq!(
            resolve_command(Command::ToggleTrade(1), &snap),
            Some(GameIntent::ToggleTrade(1))
        );
        assert_eq!(resolve_command(Command::Letter('C'), &snap), None);
    }

    #[test]
    fn end_game_needs_a_game() {
        let mut snap = building();
        assert_eq!(
            resolve_command(Command::EndGame, &snap),
            Some(GameIntent::EndGame)
        );
        snap.phase = GamePhase::GameOver;
        assert_eq!(resolve_command(Command::EndGame, &snap), None);
        assert_eq!(
            resolve_command(Command::NewGame, &snap),
            Some(GameIntent::StartNewGame)
        );
    }
}
