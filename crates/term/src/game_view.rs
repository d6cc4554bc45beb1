//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, Tile, GRID_SIZE, HAND_SIZE};

const GRID_COLS: u16 = 3;
const GRID_ROWS: u16 = (GRID_SIZE as u16).div_ceil(GRID_COLS);
const GAP: u16 = 1;

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 40, 35);
const TEXT: Rgb = Rgb::new(220, 220, 220);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// How a tile is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLook {
    Idle,
    /// Part of the candidate word, 1-based pick position
    Selected(usize),
    /// Part of the accepted word, about to be replaced
    Used,
    /// Hand tile marked for trade-in
    Trade,
}

impl TileLook {
    pub fn of(snap: &GameSnapshot, tile: &Tile, hand_slot: Option<usize>) -> Self {
        if let Some(pos) = snap.selection.iter().position(|&id| id == tile.id) {
            return TileLook::Selected(pos + 1);
        }
        if snap.is_used(tile.id) {
            return TileLook::Used;
        }
        if hand_slot.is_some_and(|slot| snap.is_trade_marked(slot)) {
            return TileLook::Trade;
        }
        TileLook::Idle
    }

    fn style(self) -> CellStyle {
        let (fg, bg) = match self {
            TileLook::Idle => (Rgb::new(40, 30, 20), Rgb::new(230, 210, 160)),
            TileLook::Selected(_) => (Rgb::new(20, 40, 20), Rgb::new(130, 210, 130)),
            TileLook::Used => (Rgb::new(150, 150, 150), Rgb::new(70, 70, 70)),
            TileLook::Trade => (Rgb::new(255, 240, 230), Rgb::new(200, 90, 70)),
        };
        CellStyle::new(fg, bg)
    }
}

/// Screen positions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left of the grid frame
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
    hand_y: u16,
    word_y: u16,
}

/// A lightweight terminal renderer for the tile game.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

impl GameView {
    /// Tiles smaller than 3x2 cannot show letter and value, so sizes are clamped.
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Grid frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        let w = GRID_COLS * self.tile_w + (GRID_COLS - 1) * GAP + 4;
        let h = GRID_ROWS * self.tile_h + (GRID_ROWS - 1) * GAP + 2;
        (w, h)
    }

    /// Rows used by title, grid, hand and word line.
    pub fn block_height(&self) -> u16 {
        let (_, frame_h) = self.frame_size();
        1 + frame_h + 2 + self.tile_h + 2
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(self.block_height()) / 2,
            AnchorY::Top => 0,
        };
        let y = top + 1;
        let hand_y = y + frame_h + 1;
        Layout {
            x,
            y,
            frame_w,
            frame_h,
            hand_y,
            word_y: hand_y + 1 + self.tile_h + 1,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        let label = CellStyle::new(TEXT, BG).bold();
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);

        fb.put_str(layout.x, layout.y.saturating_sub(1), "TILE WORDS", label);

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(TEXT, BOARD_BG),
        );
        self.draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        for (i, tile) in snap.grid.iter().enumerate() {
            let col = i as u16 % GRID_COLS;
            let row = i as u16 / GRID_COLS;
            let tx = layout.x + 2 + col * (self.tile_w + GAP);
            let ty = layout.y + 1 + row * (self.tile_h + GAP);
            self.draw_tile(fb, tx, ty, tile, TileLook::of(snap, tile, None));
        }

        self.draw_hand(fb, snap, &layout, label);
        self.draw_word_line(fb, snap, &layout);
        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(text) = overlay_text(snap) {
            self.draw_overlay_text(fb, &layout, text);
        }

        let hint = CellStyle::new(Rgb::new(150, 150, 150), BG).dim();
        let hint_y = viewport.height.saturating_sub(1);
        if hint_y > layout.word_y {
            fb.put_str(1, hint_y, phase_hint(snap.phase), hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Letter in the middle, value bottom right, pick position top left.
    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &Tile, look: TileLook) {
        let style = look.style();
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let letter_y = y + (self.tile_h - 1) / 2;
        fb.put_char(x + self.tile_w / 2, letter_y, tile.face(), style.bold());

        let value_w = decimal_width(tile.value);
        fb.put_u32(
            x + self.tile_w.saturating_sub(value_w),
            y + self.tile_h - 1,
            tile.value,
            style,
        );

        if let TileLook::Selected(pos) = look {
            if self.tile_h >= 3 {
                fb.put_u32(x, y, pos as u32, style.dim());
            }
        }
    }

    fn draw_hand(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        label: CellStyle,
    ) {
        fb.put_str(layout.x, layout.hand_y, "HAND", label);

        let slot_style = CellStyle::new(Rgb::new(160, 160, 160), BG);
        let hand_w = HAND_SIZE as u16 * self.tile_w + (HAND_SIZE as u16 - 1) * GAP;
        let start_x = layout.x + layout.frame_w.saturating_sub(hand_w) / 2;
        for (slot, tile) in snap.hand.iter().enumerate() {
            let tx = start_x + slot as u16 * (self.tile_w + GAP);
            if snap.phase == GamePhase::Discarding {
                fb.put_u32(tx + self.tile_w / 2, layout.hand_y, slot as u32 + 1, slot_style);
            }
            self.draw_tile(fb, tx, layout.hand_y + 1, tile, TileLook::of(snap, tile, Some(slot)));
        }
    }

    fn draw_word_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let label = CellStyle::new(TEXT, BG).bold();
        let word = CellStyle::new(Rgb::new(130, 210, 130), BG).bold();
        let dim = CellStyle::new(TEXT, BG).dim();

        let mut x = layout.x;
        x += fb.put_str(x, layout.word_y, "WORD ", label);
        for tile in snap.selected_tiles() {
            fb.put_char(x, layout.word_y, tile.face(), word);
            x += 1;
        }
        if !snap.selection.is_empty() {
            x += fb.put_str(x, layout.word_y, "  (", dim);
            x += fb.put_u32(x, layout.word_y, snap.word_points, dim);
            x += fb.put_str(x, layout.word_y, " pts, ", dim);
            x += fb.put_u32(x, layout.word_y, snap.selection.len() as u32, dim);
            fb.put_str(x, layout.word_y, " letters)", dim);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(3);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(TEXT, BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);

        let mut y = layout.y;
        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score),
            ("WORD PTS", snap.word_points),
            ("WORDS", snap.words_played),
            ("DECK", snap.deck_remaining),
        ];
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "PHASE", label);
        fb.put_str(panel_x, y + 1, phase_label(snap.phase), value);
        y = y.saturating_add(3);

        if snap.validating {
            fb.put_str(panel_x, y, "CHECKING...", value.dim());
        } else if let Some(ok) = snap.check_result {
            let (text, fg) = if ok {
                ("VALID WORD", Rgb::new(130, 210, 130))
            } else {
                ("NOT A WORD", Rgb::new(220, 110, 90))
            };
            fb.put_str(panel_x, y, text, CellStyle::new(fg, BG).bold());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Banner drawn over the grid
pub fn overlay_text(snap: &GameSnapshot) -> Option<&'static str> {
    match snap.phase {
        GamePhase::Pregame => Some(" PRESS ENTER "),
        GamePhase::SubmitAccept => Some(" ACCEPTED "),
        GamePhase::SubmitReject | GamePhase::ConfirmReject => Some(" NOT A WORD "),
        GamePhase::GameOver => Some(" GAME OVER "),
        _ => None,
    }
}

pub fn phase_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Pregame => "READY",
        GamePhase::InitDeal => "DEALING",
        GamePhase::WordBuilding => "BUILD A WORD",
        GamePhase::FinalRound => "FINAL ROUND",
        GamePhase::SubmitAccept => "ACCEPTED",
        GamePhase::SubmitReject => "REJECTED",
        GamePhase::Discarding => "TRADE IN",
        GamePhase::ConfirmReject => "REJECTED",
        GamePhase::Resetting => "DEALING",
        GamePhase::GameOver => "GAME OVER",
    }
}

/// One-line key help for the phase
pub fn phase_hint(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Pregame | GamePhase::GameOver => "ENTER new game  ^Q quit",
        GamePhase::WordBuilding | GamePhase::FinalRound => {
            "letters pick  BKSP undo  ESC clear  ? check  ENTER submit  ^E end"
        }
        GamePhase::SubmitAccept | GamePhase::SubmitReject | GamePhase::ConfirmReject => {
            "ENTER continue"
        }
        GamePhase::Discarding => "1-3 mark trades  ENTER deal",
        GamePhase::InitDeal | GamePhase::Resetting => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap_with_tiles() -> GameSnapshot {
        let mut snap = GameSnapshot {
            phase: GamePhase::WordBuilding,
            ..Default::default()
        };
        for (i, c) in "ABCDEFGHI".chars().enumerate() {
            snap.grid.push(Tile::new(101 + i as u32, c, 1));
        }
        snap.hand.push(Tile::new(120, 'Q', 10));
        snap.hand.push(Tile::new(121, 'X', 8));
        snap.hand.push(Tile::blank(130));
        snap
    }

    #[test]
    fn frame_size_for_default_tiles() {
        let view = GameView::default();
        assert_eq!(view.frame_size(), (21, 13));
    }

    #[test]
    fn tile_look_precedence() {
        let mut snap = snap_with_tiles();
        snap.selection.push(102);
        snap.used.push(103);
        snap.pending_trades.push(1);

        assert_eq!(TileLook::of(&snap, &snap.grid[1], None), TileLook::Selected(1));
        assert_eq!(TileLook::of(&snap, &snap.grid[2], None), TileLook::Used);
        assert_eq!(TileLook::of(&snap, &snap.hand[1], Some(1)), TileLook::Trade);
        assert_eq!(TileLook::of(&snap, &snap.hand[0], Some(0)), TileLook::Idle);
    }

    #[test]
    fn letters_and_values_land_on_tiles() {
        let snap = snap_with_tiles();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(21, 30));

        // Top-left tile starts inside border and padding at (2, 2).
        assert_eq!(fb.get(2 + 2, 2 + 1).unwrap().ch, 'A');
        assert_eq!(fb.get(2 + 4, 2 + 2).unwrap().ch, '1');
        assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    }

    #[test]
    fn overlays_follow_phase() {
        let mut snap = GameSnapshot::default();
        assert_eq!(overlay_text(&snap), Some(" PRESS ENTER "));
        snap.phase = GamePhase::WordBuilding;
        assert_eq!(overlay_text(&snap), None);
        snap.phase = GamePhase::GameOver;
        assert_eq!(overlay_text(&snap), Some(" GAME OVER "));
    }

    #[test]
    fn every_phase_has_a_label() {
        for phase in GamePhase::ALL {
            assert!(!phase_label(phase).is_empty());
        }
    }
}
