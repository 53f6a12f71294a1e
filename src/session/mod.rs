//! Scripted demo sessions
//!
//! A session stands in for the person at the screen: a serde model of user
//! interactions plus a runner that applies them to a `ContinuousScreen` one
//! at a time. The binary plays the built-in session unless `KNOBDEMO_SESSION`
//! names a JSON script file.

pub mod runner;
pub mod script;

pub use runner::run_session;
pub use script::{SessionScript, SessionStep, default_session};

/// Environment variable naming a session script JSON file
pub const SESSION_ENV: &str = "KNOBDEMO_SESSION";
