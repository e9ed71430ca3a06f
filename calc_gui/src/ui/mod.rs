//! UI module for Tally GUI
//!
//! # Layout (top to bottom)
//! - `toolbar` - Title and theme toggle
//! - `display` - Pending operation label and current operand
//! - `keypad` - Memory, editing, operator and digit buttons
//! - `history_panel` - Recent calculations, newest first
//! - `status_bar` - Engine state and memory value

pub mod display;
pub mod history_panel;
pub mod keypad;
pub mod status_bar;
pub mod toolbar;
