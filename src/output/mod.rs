//! Board rendering and terminal output
//!
//! `board` is pure and shared by every front end; `display` adds ANSI colours.

pub mod board;
pub mod display;

pub use board::{BoardRow, BoardSize, Cell, CellStyle, render, render_text, style_for};
pub use display::{format_board, format_secret};
