//! `knobdemo` - Continuous knob demo screen
//!
//! Wires three rotary knob controls to a shared row of toggle widgets: the
//! primary knob reports its position into a label while two auxiliary knobs
//! interactively set its minimum and maximum bounds. Image-asset sets can be
//! swapped at runtime through an asset picker surface. Single-threaded and
//! event-driven: user turns arrive through a channel, are routed by knob
//! role, and each handler runs to completion.
//!
//! # Environment
//!
//! - `KNOBDEMO_ASSETS` - image asset directory (default `assets`)
//! - `KNOBDEMO_SESSION` - JSON session script played instead of the built-in one
//! - `KNOBDEMO_LOG_DIR` - write logs to files in this directory instead of stderr
//! - `KNOBDEMO_LEGACY_HOST` - set to 1 to emulate a host without tint support
//! - `RUST_LOG` - log level filter (default `info`)

// Module declarations
pub mod assets;
pub mod config;
pub mod error;
pub mod knob;
pub mod screen;
pub mod session;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{KnobDemoError, Result};
