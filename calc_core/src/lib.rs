//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Tally: a small state machine
//! for an arithmetic calculator with a memory register and a bounded
//! calculation history. It has no UI dependency; front ends forward
//! [`Action`]s and render the [`DisplayState`] it hands back.
//!
//! ## Design Philosophy
//!
//! - **One owner**: all state lives in one [`CalculatorEngine`] value
//! - **One entry point**: every button and key becomes an [`Action`]
//! - **Quiet input handling**: malformed input is ignored, not reported;
//!   division by zero is the only error the arithmetic produces
//! - **JSON-friendly**: display snapshots, actions and settings serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Action, CalculatorEngine};
//!
//! let mut engine = CalculatorEngine::new();
//! for action in ["number:7", "multiply", "number:6", "equals"] {
//!     engine.dispatch(action.parse::<Action>()?)?;
//! }
//!
//! let state = engine.display_state();
//! assert_eq!(state.current, "42");
//! assert_eq!(state.history, ["7 × 6 = 42"]);
//! # Ok::<(), calc_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`action`] - Inputs and their control tags
//! - [`keymap`] - Standard keyboard bindings
//! - [`operation`] - Binary operators and their symbols
//! - [`operand`] - Operand buffer, parsing and number formatting
//! - [`history`] - Bounded calculation history
//! - [`settings`] - Engine tunables and settings files
//! - [`errors`] - Structured error types

pub mod action;
pub mod engine;
pub mod errors;
pub mod history;
pub mod keymap;
pub mod operand;
pub mod operation;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use action::Action;
pub use engine::{CalculatorEngine, DisplayState, EngineStatus, ErrorToken};
pub use errors::{CalcError, CalcResult};
pub use keymap::{action_for_key, Key};
pub use operation::Operation;
pub use settings::{load_settings, save_settings, EngineSettings};
