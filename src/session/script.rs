//! Serde model of a scripted demo session

use crate::error::{KnobDemoError, Result};
use crate::screen::KnobRole;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One scripted user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    /// Turn a knob to a position in radians
    TurnKnob {
        /// Which knob to turn
        knob: KnobRole,
        /// Target position in radians
        position: f32,
    },
    /// Move the gesture segmented control
    SelectGesture {
        /// Segment index; unlisted indices leave the gesture unchanged
        segment: usize,
    },
    /// Flip the clockwise switch
    SetClockwise {
        /// New switch state
        on: bool,
    },
    /// Flip the circular switch
    SetCircular {
        /// New switch state
        on: bool,
    },
    /// Visit the picker and choose a title from its list
    ChooseImage {
        /// Picked title; "(none)" clears the selection
        title: String,
    },
}

/// A demo session: user interactions applied to the screen in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    /// Steps in playback order
    pub steps: Vec<SessionStep>,
}

impl SessionScript {
    /// Parse a script from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a JSON file.
    ///
    /// Read and parse failures both surface as
    /// [`KnobDemoError::SessionError`] so the caller can point at the
    /// script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading session script from {}", path.display());

        let contents =
            fs::read_to_string(path).map_err(|e| KnobDemoError::SessionError(Box::new(e)))?;
        serde_json::from_str(&contents).map_err(|e| KnobDemoError::SessionError(Box::new(e)))
    }
}

/// Built-in session played when no script file is named.
///
/// Touches every interaction the screen supports: primary and auxiliary
/// turns, each toggle, an auxiliary turn while the circular switch has them
/// locked out, and picker visits covering selection, clearing, and
/// reselection.
pub fn default_session() -> SessionScript {
    SessionScript {
        steps: vec![
            SessionStep::TurnKnob {
                knob: KnobRole::Primary,
                position: 0.78,
            },
            SessionStep::TurnKnob {
                knob: KnobRole::MinBound,
                position: -0.5,
            },
            SessionStep::TurnKnob {
                knob: KnobRole::MaxBound,
                position: 1.25,
            },
            SessionStep::SelectGesture { segment: 2 },
            SessionStep::SetClockwise { on: true },
            SessionStep::SetCircular { on: true },
            SessionStep::TurnKnob {
                knob: KnobRole::MinBound,
                position: -3.0,
            },
            SessionStep::SetCircular { on: false },
            SessionStep::ChooseImage {
                title: "knob".to_string(),
            },
            SessionStep::TurnKnob {
                knob: KnobRole::Primary,
                position: -0.25,
            },
            SessionStep::ChooseImage {
                title: "(none)".to_string(),
            },
            SessionStep::ChooseImage {
                title: "teardrop".to_string(),
            },
        ],
    }
}
