//! Demo configuration data models
//!
//! Runtime settings for the demo shell: where image assets live, where the
//! three knobs sit on the screen, and what the simulated host is capable
//! of. Values come from defaults plus environment overrides; nothing here
//! is written back to disk.

use crate::knob::{Frame, HostProfile};
use std::path::PathBuf;

/// Environment variable naming the asset catalog directory
pub const ASSETS_ENV: &str = "KNOBDEMO_ASSETS";

/// Environment variable that, when set to `1` or `true`, simulates a host
/// without accent tint support
pub const LEGACY_HOST_ENV: &str = "KNOBDEMO_LEGACY_HOST";

/// Placeholder regions the three knobs are sized to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    /// Primary knob placeholder
    pub primary: Frame,
    /// Min-auxiliary knob placeholder
    pub min: Frame,
    /// Max-auxiliary knob placeholder
    pub max: Frame,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            primary: Frame::new(80.0, 100.0, 160.0, 160.0),
            min: Frame::new(40.0, 320.0, 80.0, 80.0),
            max: Frame::new(200.0, 320.0, 80.0, 80.0),
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Directory the asset catalog resolves names in
    pub assets_dir: PathBuf,
    /// Placeholder regions for the three knobs
    pub layout: ScreenLayout,
    /// Capability profile of the embedding host
    pub host: HostProfile,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            layout: ScreenLayout::default(),
            host: HostProfile::default(),
        }
    }
}

impl DemoConfig {
    /// Build the configuration from defaults plus environment overrides.
    ///
    /// `KNOBDEMO_ASSETS` replaces the asset directory; `KNOBDEMO_LEGACY_HOST`
    /// set to `1` or `true` turns off host tint support so the title-color
    /// fallback path can be exercised.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(ASSETS_ENV) {
            if !dir.is_empty() {
                config.assets_dir = PathBuf::from(dir);
            }
        }

        if std::env::var(LEGACY_HOST_ENV)
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        {
            config.host.tint_support = false;
        }

        config
    }
}
