//! `knobdemo` - Continuous knob demo screen
//!
//! Builds the continuous knob screen from environment-derived configuration,
//! plays a scripted session against it, and prints the final screen snapshot
//! as JSON on stdout.

use anyhow::{Context, Result};
use knobdemo::{
    config::DemoConfig,
    error::{KnobDemoError, get_user_friendly_error},
    screen::ContinuousScreen,
    session::{self, SessionScript, run_session},
    utils,
};
use tracing::{error, info};

/// Main entry point for the demo
///
/// Performs initialization including logging and configuration, then plays
/// the session to completion and reports the resulting screen state.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("knobdemo v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = DemoConfig::from_env();
    info!("Using asset directory: {}", config.assets_dir.display());

    let script = match load_session() {
        Ok(script) => script,
        Err(e) => {
            error!("Failed to load session script: {:#}", e);

            let message = if let Some(demo_error) = e.downcast_ref::<KnobDemoError>() {
                get_user_friendly_error(demo_error)
            } else {
                format!("{e:#}")
            };
            eprintln!("{message}");

            return Err(e);
        }
    };

    info!("Building demo screen");
    let mut screen = ContinuousScreen::new(&config);

    let snapshot = run_session(&mut screen, &script);

    let json = serde_json::to_string_pretty(&snapshot)
        .context("Failed to serialize screen snapshot")?;
    println!("{json}");

    info!("knobdemo shutting down");

    Ok(())
}

/// Session script from the file named by `KNOBDEMO_SESSION`, or the built-in
/// session when the variable is unset or empty.
fn load_session() -> Result<SessionScript> {
    match std::env::var(session::SESSION_ENV) {
        Ok(path) if !path.is_empty() => {
            info!("Loading session script: {path}");
            SessionScript::load(&path)
                .with_context(|| format!("Failed to load session script from {path}"))
        }
        _ => {
            info!("Playing the built-in session");
            Ok(session::default_session())
        }
    }
}
