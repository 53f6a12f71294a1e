//! Demo configuration module
//!
//! Runtime settings come from defaults plus `KNOBDEMO_*` environment
//! overrides. The demo owns no persisted state, so there is no config file
//! to load or save.

pub mod models;

pub use models::{ASSETS_ENV, DemoConfig, LEGACY_HOST_ENV, ScreenLayout};
