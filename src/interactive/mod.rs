//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, KEYPAD_ROWS, KeypadKey, run_tui};
