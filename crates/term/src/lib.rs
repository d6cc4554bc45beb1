//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed to
//! the terminal.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: snapshot to framebuffer, pure and testable
//! - [`renderer`]: raw-mode terminal output with diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tile_words_core as core;
pub use tile_words_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{phase_hint, phase_label, AnchorY, GameView, TileLook, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
