//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; after that
//! only changed runs of cells are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode plus alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// Callers keep one framebuffer and pass it in every frame; after the call
    /// it holds stale content that the next render overwrites.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out
            .write_all(&self.buf)
            .and_then(|()| self.out.flush())
            .context("failed to write frame")
    }
}

/// Encode a full-frame redraw into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print(out, fb.row(y))?;
    }
    pen.finish(out)
}

/// Encode only the changed runs between two frames.
///
/// Frames of different sizes fall back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_runs(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            pen.print(out, &row[start..end])?;
        }
    }
    pen.finish(out)
}

/// Half-open `[start, end)` ranges where two equally long rows differ.
fn changed_runs<'a>(
    old: &'a [Cell],
    new: &'a [Cell],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let differs = move |i: usize| old.get(i) != new.get(i);
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = (x..new.len()).find(|&i| differs(i))?;
        let end = (start..new.len()).find(|&i| !differs(i)).unwrap_or(new.len());
        x = end;
        Some((start, end))
    })
}

/// The terminal's current drawing attributes.
///
/// Only the parts of a style that changed since the last cell are sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.set(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // An attribute reset also drops both colors.
        let reset = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);
        if reset {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if reset || prev.map_or(true, |p| p.fg != style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
        }
        if reset || prev.map_or(true, |p| p.bg != style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn full_frame_contains_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "CAT", CellStyle::default());
        fb.put_str(0, 1, "DOG", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = printed(&out);
        assert!(text.contains("CAT"));
        assert!(text.contains("DOG"));
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in 1..=3 {
            b.set(x, 0, style.cell('X'));
        }
        b.set(5, 0, style.cell('Y'));

        let runs: Vec<_> = changed_runs(a.row(0), b.row(0)).collect();
        assert_eq!(runs, vec![(1, 4), (5, 6)]);
    }

    #[test]
    fn pen_only_sends_what_changed() {
        let base = CellStyle::default();
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "AB", base);
        fb.set(2, 0, base.bold().cell('C'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let mut expected = Vec::new();
        expected.queue(terminal::Clear(terminal::ClearType::All)).unwrap();
        expected.queue(cursor::MoveTo(0, 0)).unwrap();
        expected.queue(SetAttribute(Attribute::Reset)).unwrap();
        expected.queue(SetForegroundColor(color(base.fg))).unwrap();
        expected.queue(SetBackgroundColor(color(base.bg))).unwrap();
        expected.queue(Print('A')).unwrap();
        expected.queue(Print('B')).unwrap();
        expected.queue(SetAttribute(Attribute::Reset)).unwrap();
        expected.queue(SetAttribute(Attribute::Bold)).unwrap();
        expected.queue(SetForegroundColor(color(base.fg))).unwrap();
        expected.queue(SetBackgroundColor(color(base.bg))).unwrap();
        expected.queue(Print('C')).unwrap();
        expected.queue(ResetColor).unwrap();
        expected.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(printed(&out), printed(&expected));
    }

    #[test]
    fn size_change_falls_back_to_full_redraw() {
        let small = FrameBuffer::new(2, 1);
        let mut big = FrameBuffer::new(4, 1);
        big.put_str(0, 0, "WORD", CellStyle::default());

        let mut diff = Vec::new();
        encode_diff_into(&small, &big, &mut diff).unwrap();
        let mut full = Vec::new();
        encode_full_into(&big, &mut full).unwrap();
        assert_eq!(diff, full);
    }

    #[test]
    fn draw_swap_diffs_after_first_frame() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(0, 0, "TILES", CellStyle::default());
        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();
        assert!(printed(renderer.writer()).contains("TILES"));

        fb.clear(Cell::default());
        fb.put_str(0, 0, "TILES", CellStyle::default());
        renderer.draw_swap(&mut fb).unwrap();
        assert_eq!(renderer.writer().len(), first);
    }
}
