//! Continuous-mode demo screen
//!
//! # Overview
//!
//! `ContinuousScreen` wires three knob instances to a shared row of toggle
//! widgets. The large primary knob reports its position into a label; two
//! smaller auxiliary knobs interactively set the primary's minimum and
//! maximum bounds. A segmented control applies one gesture mode to all three
//! knobs, a clockwise switch flips their orientation together, and a
//! circular switch frees the primary from its bounds while locking the
//! auxiliaries out.
//!
//! Handlers run to completion on the caller's thread: a reported turn is
//! drained from the event channel and routed by role before `turn_knob`
//! returns.
//!
//! # Example Usage
//!
//! ```
//! use knobdemo::config::DemoConfig;
//! use knobdemo::screen::{ContinuousScreen, KnobRole};
//!
//! let mut screen = ContinuousScreen::new(&DemoConfig::default());
//! screen.turn_knob(KnobRole::MinBound, -0.25);
//!
//! assert_eq!(screen.labels().minimum, "-0.25");
//! ```

use crate::assets::{AssetCatalog, ImageSet};
use crate::config::DemoConfig;
use crate::knob::{
    Color, ControlEvent, ControlId, ControlState, Gesture, KnobControl, KnobMode,
};
use crate::screen::picker::{ImageChooser, NO_IMAGE_TITLE, PickerHandoff};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::sync::mpsc;
use tracing::{debug, info};

/// Capacity of the value-changed event channel shared by the three knobs
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Role a knob instance plays on the demo screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnobRole {
    /// The large demonstration knob
    Primary,
    /// Auxiliary knob driving the primary's minimum bound
    MinBound,
    /// Auxiliary knob driving the primary's maximum bound
    MaxBound,
}

impl KnobRole {
    /// All roles, primary first
    pub const ALL: [Self; 3] = [Self::Primary, Self::MinBound, Self::MaxBound];
}

/// Mirror of the toggle-widget states the screen derives its knob
/// configuration from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggles {
    /// Selected index of the gesture segmented control
    pub gesture_segment: usize,
    /// Clockwise switch state
    pub clockwise: bool,
    /// Circular switch state
    pub circular: bool,
}

/// Configuration every knob on the screen shares
///
/// Derived from the toggles in one place and applied uniformly, so the three
/// knobs can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedKnobSettings {
    /// Gesture mode for all three knobs
    pub gesture: Gesture,
    /// Orientation flag for all three knobs
    pub clockwise: bool,
}

/// Label texts the screen renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenLabels {
    /// Primary knob position, two decimal places
    pub position: String,
    /// Minimum bound, two decimal places
    pub minimum: String,
    /// Maximum bound, two decimal places
    pub maximum: String,
}

/// Point-in-time view of the screen's observable state
#[derive(Debug, Clone, Serialize)]
pub struct ScreenSnapshot {
    /// Current label texts
    pub labels: ScreenLabels,
    /// Gesture mode shared by the three knobs
    pub gesture: Gesture,
    /// Orientation flag shared by the three knobs
    pub clockwise: bool,
    /// Whether the primary rotates without bound clamping
    pub circular: bool,
    /// Whether the auxiliary knobs accept turns
    pub aux_enabled: bool,
    /// Primary knob minimum bound
    pub primary_min: f32,
    /// Primary knob maximum bound
    pub primary_max: f32,
    /// Primary knob position
    pub primary_position: f32,
    /// Active image title, if any
    pub image_title: Option<String>,
}

/// Format an angular position for a screen label
pub fn format_position(position: f32) -> String {
    format!("{position:.2}")
}

/// Demo screen wiring three knobs, their labels, and the toggle row
///
/// The screen owns all three knob instances and the receiving half of their
/// shared notification channel. Every user interaction enters through one of
/// the public methods and settles completely before that method returns.
pub struct ContinuousScreen {
    primary: KnobControl,
    min_control: KnobControl,
    max_control: KnobControl,
    toggles: Toggles,
    labels: ScreenLabels,
    image_title: Option<String>,
    assets: AssetCatalog,
    events: mpsc::Receiver<ControlEvent>,
}

impl ContinuousScreen {
    /// Build the screen: three continuous-mode knobs sized to the layout,
    /// symmetric initial bounds on the primary, each auxiliary parked at the
    /// bound it controls, colors per the host profile, and one shared
    /// notification channel.
    pub fn new(config: &DemoConfig) -> Self {
        info!("Building continuous knob screen");

        let (event_tx, event_rx) = mpsc::sync_channel(EVENT_CHANNEL_CAPACITY);

        let mut primary = KnobControl::with_host(config.layout.primary, config.host);
        primary.set_mode(KnobMode::Continuous);
        primary.set_min(-FRAC_PI_2);
        primary.set_max(FRAC_PI_2);

        let mut min_control = KnobControl::with_host(config.layout.min, config.host);
        min_control.set_mode(KnobMode::Continuous);
        min_control.set_position(primary.min());

        let mut max_control = KnobControl::with_host(config.layout.max, config.host);
        max_control.set_mode(KnobMode::Continuous);
        max_control.set_position(primary.max());

        if primary.supports_tint() {
            let accent = Color::from_hsba(0.5, 1.0, 1.0, 1.0);
            for knob in [&mut primary, &mut min_control, &mut max_control] {
                knob.set_tint(accent);
            }
        } else {
            // Older hosts take a per-state title color instead of a tint
            for knob in [&mut primary, &mut min_control, &mut max_control] {
                knob.set_title_color(ControlState::Normal, Color::WHITE);
                knob.set_title_color(ControlState::Highlighted, Color::WHITE);
            }
        }

        for knob in [&mut primary, &mut min_control, &mut max_control] {
            knob.observe_value_changed(event_tx.clone());
        }

        let mut screen = Self {
            primary,
            min_control,
            max_control,
            toggles: Toggles::default(),
            labels: ScreenLabels::default(),
            image_title: None,
            assets: AssetCatalog::new(config.assets_dir.clone()),
            events: event_rx,
        };

        screen.sync_knob_properties();

        // Prime the bound labels from the auxiliaries' starting positions
        screen.position_changed(KnobRole::MinBound);
        screen.position_changed(KnobRole::MaxBound);

        screen
    }

    /// Knob instance playing the given role
    pub fn control(&self, role: KnobRole) -> &KnobControl {
        match role {
            KnobRole::Primary => &self.primary,
            KnobRole::MinBound => &self.min_control,
            KnobRole::MaxBound => &self.max_control,
        }
    }

    fn control_mut(&mut self, role: KnobRole) -> &mut KnobControl {
        match role {
            KnobRole::Primary => &mut self.primary,
            KnobRole::MinBound => &mut self.min_control,
            KnobRole::MaxBound => &mut self.max_control,
        }
    }

    fn role_of(&self, id: ControlId) -> Option<KnobRole> {
        KnobRole::ALL
            .into_iter()
            .find(|&role| self.control(role).id() == id)
    }

    /// Current toggle states
    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    /// Label texts as currently rendered
    pub fn labels(&self) -> &ScreenLabels {
        &self.labels
    }

    /// Active image title, if any
    pub fn image_title(&self) -> Option<&str> {
        self.image_title.as_deref()
    }

    /// Report a user turn on the knob with the given role and process the
    /// resulting notification before returning.
    pub fn turn_knob(&mut self, role: KnobRole, position: f32) {
        debug!("Turn on {role:?} to {position:.4}");
        self.control_mut(role).turn_to(position);
        self.drain_control_events();
    }

    /// Move the gesture segmented control and resynchronize the knobs
    pub fn select_gesture_segment(&mut self, segment: usize) {
        debug!("Gesture segment changed to {segment}");
        self.toggles.gesture_segment = segment;
        self.sync_knob_properties();
    }

    /// Flip the clockwise switch and resynchronize the knobs
    pub fn set_clockwise_switch(&mut self, on: bool) {
        debug!("Clockwise switch changed to {on}");
        self.toggles.clockwise = on;
        self.sync_knob_properties();
    }

    /// Flip the circular switch and resynchronize the knobs
    pub fn set_circular_switch(&mut self, on: bool) {
        debug!("Circular switch changed to {on}");
        self.toggles.circular = on;
        self.sync_knob_properties();
    }

    /// Payload for the asset picker: the selectable titles and the currently
    /// active one. The caller presents the picker and routes its choice back
    /// through [`ImageChooser::image_chosen`].
    pub fn picker_handoff(&self) -> PickerHandoff {
        PickerHandoff::new(self.image_title.as_deref())
    }

    /// Snapshot the observable screen state
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            labels: self.labels.clone(),
            gesture: self.primary.gesture(),
            clockwise: self.primary.clockwise(),
            circular: self.primary.circular(),
            aux_enabled: self.min_control.enabled() && self.max_control.enabled(),
            primary_min: self.primary.min(),
            primary_max: self.primary.max(),
            primary_position: self.primary.position(),
            image_title: self.image_title.clone(),
        }
    }

    /// Configuration the toggles currently call for.
    ///
    /// An unlisted gesture segment leaves the mode unchanged, so the
    /// primary's current gesture is carried forward to all three knobs.
    pub fn shared_settings(&self) -> SharedKnobSettings {
        SharedKnobSettings {
            gesture: Gesture::from_segment(self.toggles.gesture_segment)
                .unwrap_or_else(|| self.primary.gesture()),
            clockwise: self.toggles.clockwise,
        }
    }

    fn drain_control_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_control_event(event);
        }
    }

    fn handle_control_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::ValueChanged { control, .. } => {
                if let Some(role) = self.role_of(control) {
                    self.position_changed(role);
                } else {
                    debug!("Ignoring event from unknown control {control:?}");
                }
            }
        }
    }

    /// Route a position change by role. The primary updates the position
    /// label; an auxiliary writes its position into the bound it controls
    /// and updates that bound's label. Exactly one label changes per call.
    fn position_changed(&mut self, role: KnobRole) {
        match role {
            KnobRole::Primary => {
                self.labels.position = format_position(self.primary.position());
            }
            KnobRole::MinBound => {
                self.primary.set_min(self.min_control.position());
                self.labels.minimum = format_position(self.primary.min());
            }
            KnobRole::MaxBound => {
                self.primary.set_max(self.max_control.position());
                self.labels.maximum = format_position(self.primary.max());
            }
        }
    }

    /// Push the shared settings to all three knobs, then apply the circular
    /// flag to the primary and gate the auxiliaries on it.
    fn sync_knob_properties(&mut self) {
        let settings = self.shared_settings();
        debug!("Applying shared knob settings {settings:?}");

        for role in KnobRole::ALL {
            let knob = self.control_mut(role);
            knob.set_gesture(settings.gesture);
            knob.set_clockwise(settings.clockwise);
            // Reassert the position so the host lays the indicator out for
            // the new orientation
            let position = knob.position();
            knob.set_position(position);
        }

        self.primary.set_circular(self.toggles.circular);
        let aux_enabled = !self.primary.circular();
        self.min_control.set_enabled(aux_enabled);
        self.max_control.set_enabled(aux_enabled);
    }

    /// Resolve the active title against the catalog and install the result
    /// on all three knobs. The auxiliaries mirror the primary's background
    /// and never carry a foreground overlay.
    fn update_knob_images(&mut self) {
        match self.image_title.clone() {
            Some(title) => {
                info!("Using image title {title:?}");
                let set = ImageSet::resolve(&self.assets, &title);

                self.primary.set_image(ControlState::Normal, set.normal.clone());
                self.primary
                    .set_image(ControlState::Highlighted, set.highlighted.clone());
                self.primary
                    .set_image(ControlState::Disabled, set.disabled.clone());
                self.primary.set_background_image(set.background);
                self.primary.set_foreground_image(set.foreground);

                for knob in [&mut self.min_control, &mut self.max_control] {
                    knob.set_image(ControlState::Normal, set.normal.clone());
                    knob.set_image(ControlState::Highlighted, set.highlighted.clone());
                    knob.set_image(ControlState::Disabled, set.disabled.clone());
                }
            }
            None => {
                info!("Clearing knob images");
                for knob in [&mut self.primary, &mut self.min_control, &mut self.max_control] {
                    knob.set_image(ControlState::Normal, None);
                    knob.set_image(ControlState::Highlighted, None);
                    knob.set_image(ControlState::Disabled, None);
                }
                self.primary.set_background_image(None);
                self.primary.set_foreground_image(None);
            }
        }

        let background = self.primary.background_image().cloned();
        self.min_control.set_background_image(background.clone());
        self.max_control.set_background_image(background);
    }
}

impl ImageChooser for ContinuousScreen {
    fn image_chosen(&mut self, title: Option<&str>) {
        info!(
            "Selected image title {}",
            title.unwrap_or(NO_IMAGE_TITLE)
        );
        self.image_title = title.map(str::to_string);
        self.update_knob_images();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knob::HostProfile;
    use crate::test_utils::{create_test_dir, write_test_png};
    use std::path::PathBuf;

    fn test_config() -> DemoConfig {
        DemoConfig {
            assets_dir: PathBuf::from("missing-test-assets"),
            ..DemoConfig::default()
        }
    }

    fn test_screen() -> ContinuousScreen {
        ContinuousScreen::new(&test_config())
    }

    fn legacy_screen() -> ContinuousScreen {
        let config = DemoConfig {
            host: HostProfile {
                tint_support: false,
            },
            ..test_config()
        };
        ContinuousScreen::new(&config)
    }

    /// Screen backed by a catalog holding the full "knob" asset family
    fn screen_with_knob_assets() -> (ContinuousScreen, tempfile::TempDir) {
        let dir = create_test_dir();
        for name in [
            "knob",
            "knob-highlighted",
            "knob-disabled",
            "knob-background",
            "knob-foreground",
        ] {
            write_test_png(dir.path(), name, 80, 80);
        }

        let config = DemoConfig {
            assets_dir: dir.path().to_path_buf(),
            ..DemoConfig::default()
        };
        (ContinuousScreen::new(&config), dir)
    }

    #[test]
    fn test_initial_primary_bounds() {
        let screen = test_screen();
        let primary = screen.control(KnobRole::Primary);

        assert_eq!(primary.mode(), KnobMode::Continuous);
        assert_eq!(primary.min(), -FRAC_PI_2);
        assert_eq!(primary.max(), FRAC_PI_2);
        assert_eq!(primary.position(), 0.0);
    }

    #[test]
    fn test_initial_aux_positions_match_bounds() {
        let screen = test_screen();
        let primary = screen.control(KnobRole::Primary);
        let min_control = screen.control(KnobRole::MinBound);
        let max_control = screen.control(KnobRole::MaxBound);

        assert_eq!(min_control.mode(), KnobMode::Continuous);
        assert_eq!(max_control.mode(), KnobMode::Continuous);
        assert_eq!(min_control.position(), primary.min());
        assert_eq!(max_control.position(), primary.max());
    }

    #[test]
    fn test_initial_labels() {
        let screen = test_screen();

        assert_eq!(screen.labels().minimum, "-1.57");
        assert_eq!(screen.labels().maximum, "1.57");
        assert_eq!(screen.labels().position, "");
    }

    #[test]
    fn test_initial_shared_settings_applied() {
        let screen = test_screen();

        for role in KnobRole::ALL {
            let knob = screen.control(role);
            assert_eq!(knob.gesture(), Gesture::OneFingerRotation);
            assert!(!knob.clockwise());
        }
        assert!(!screen.control(KnobRole::Primary).circular());
        assert!(screen.control(KnobRole::MinBound).enabled());
        assert!(screen.control(KnobRole::MaxBound).enabled());
    }

    #[test]
    fn test_initial_tint_on_modern_host() {
        let screen = test_screen();
        let accent = Color::from_hsba(0.5, 1.0, 1.0, 1.0);

        for role in KnobRole::ALL {
            let knob = screen.control(role);
            assert_eq!(knob.tint(), Some(accent));
            assert!(knob.title_color(ControlState::Normal).is_none());
        }
    }

    #[test]
    fn test_initial_title_colors_on_legacy_host() {
        let screen = legacy_screen();

        for role in KnobRole::ALL {
            let knob = screen.control(role);
            assert!(knob.tint().is_none());
            assert_eq!(knob.title_color(ControlState::Normal), Some(Color::WHITE));
            assert_eq!(
                knob.title_color(ControlState::Highlighted),
                Some(Color::WHITE)
            );
            assert!(knob.title_color(ControlState::Disabled).is_none());
        }
    }

    #[test]
    fn test_turn_primary_updates_only_position_label() {
        let mut screen = test_screen();

        screen.turn_knob(KnobRole::Primary, 0.5);

        assert_eq!(screen.labels().position, "0.50");
        assert_eq!(screen.labels().minimum, "-1.57");
        assert_eq!(screen.labels().maximum, "1.57");
        assert_eq!(screen.control(KnobRole::Primary).min(), -FRAC_PI_2);
        assert_eq!(screen.control(KnobRole::Primary).max(), FRAC_PI_2);
    }

    #[test]
    fn test_turn_min_aux_sets_primary_min() {
        let mut screen = test_screen();

        screen.turn_knob(KnobRole::MinBound, -0.25);

        assert_eq!(screen.control(KnobRole::Primary).min(), -0.25);
        assert_eq!(screen.control(KnobRole::MinBound).position(), -0.25);
        assert_eq!(screen.labels().minimum, "-0.25");
        assert_eq!(screen.labels().position, "");
        assert_eq!(screen.labels().maximum, "1.57");
    }

    #[test]
    fn test_turn_max_aux_sets_primary_max() {
        let mut screen = test_screen();

        screen.turn_knob(KnobRole::MaxBound, 1.0);

        assert_eq!(screen.control(KnobRole::Primary).max(), 1.0);
        assert_eq!(screen.labels().maximum, "1.00");
        assert_eq!(screen.labels().minimum, "-1.57");
    }

    #[test]
    fn test_bounds_are_stored_without_clamping() {
        let mut screen = test_screen();

        // A minimum above the current maximum is stored as given
        screen.turn_knob(KnobRole::MinBound, 2.0);

        assert_eq!(screen.control(KnobRole::Primary).min(), 2.0);
        assert_eq!(screen.control(KnobRole::Primary).max(), FRAC_PI_2);
        assert_eq!(screen.labels().minimum, "2.00");
    }

    #[test]
    fn test_select_gesture_segment_applies_to_all() {
        let mut screen = test_screen();

        screen.select_gesture_segment(2);

        for role in KnobRole::ALL {
            assert_eq!(screen.control(role).gesture(), Gesture::VerticalPan);
        }
    }

    #[test]
    fn test_unlisted_segment_keeps_current_gesture() {
        let mut screen = test_screen();
        screen.select_gesture_segment(1);

        screen.select_gesture_segment(9);

        for role in KnobRole::ALL {
            assert_eq!(screen.control(role).gesture(), Gesture::TwoFingerRotation);
        }
    }

    #[test]
    fn test_clockwise_switch_applies_to_all() {
        let mut screen = test_screen();

        screen.set_clockwise_switch(true);

        for role in KnobRole::ALL {
            assert!(screen.control(role).clockwise());
        }
    }

    #[test]
    fn test_circular_switch_gates_auxiliaries() {
        let mut screen = test_screen();

        screen.set_circular_switch(true);
        assert!(screen.control(KnobRole::Primary).circular());
        assert!(!screen.control(KnobRole::MinBound).enabled());
        assert!(!screen.control(KnobRole::MaxBound).enabled());
        assert!(screen.control(KnobRole::Primary).enabled());

        screen.set_circular_switch(false);
        assert!(!screen.control(KnobRole::Primary).circular());
        assert!(screen.control(KnobRole::MinBound).enabled());
        assert!(screen.control(KnobRole::MaxBound).enabled());
    }

    #[test]
    fn test_disabled_aux_ignores_turns() {
        let mut screen = test_screen();
        screen.set_circular_switch(true);

        screen.turn_knob(KnobRole::MinBound, 1.0);

        assert_eq!(screen.control(KnobRole::Primary).min(), -FRAC_PI_2);
        assert_eq!(screen.control(KnobRole::MinBound).position(), -FRAC_PI_2);
        assert_eq!(screen.labels().minimum, "-1.57");
    }

    #[test]
    fn test_reenabled_aux_accepts_turns_again() {
        let mut screen = test_screen();
        screen.set_circular_switch(true);
        screen.set_circular_switch(false);

        screen.turn_knob(KnobRole::MinBound, -0.5);

        assert_eq!(screen.control(KnobRole::Primary).min(), -0.5);
        assert_eq!(screen.labels().minimum, "-0.50");
    }

    #[test]
    fn test_sync_does_not_touch_labels() {
        let mut screen = test_screen();
        screen.turn_knob(KnobRole::Primary, 0.75);
        let before = screen.labels().clone();

        screen.set_clockwise_switch(true);
        screen.select_gesture_segment(3);

        assert_eq!(screen.labels(), &before);
    }

    #[test]
    fn test_sync_preserves_positions() {
        let mut screen = test_screen();
        screen.turn_knob(KnobRole::Primary, 0.75);

        screen.set_clockwise_switch(true);

        assert_eq!(screen.control(KnobRole::Primary).position(), 0.75);
        assert_eq!(screen.control(KnobRole::MinBound).position(), -FRAC_PI_2);
    }

    #[test]
    fn test_image_chosen_fills_all_slots() {
        let (mut screen, _dir) = screen_with_knob_assets();

        screen.image_chosen(Some("knob"));

        let primary = screen.control(KnobRole::Primary);
        assert_eq!(primary.image(ControlState::Normal).unwrap().name(), "knob");
        assert_eq!(
            primary.image(ControlState::Highlighted).unwrap().name(),
            "knob-highlighted"
        );
        assert_eq!(
            primary.image(ControlState::Disabled).unwrap().name(),
            "knob-disabled"
        );
        let background = primary.background_image().unwrap();
        assert_eq!(background.name(), "knob-background");
        assert_eq!(
            primary.foreground_image().unwrap().name(),
            "knob-foreground"
        );

        for role in [KnobRole::MinBound, KnobRole::MaxBound] {
            let aux = screen.control(role);
            assert_eq!(aux.image(ControlState::Normal).unwrap().name(), "knob");
            assert_eq!(
                aux.image(ControlState::Highlighted).unwrap().name(),
                "knob-highlighted"
            );
            assert_eq!(
                aux.image(ControlState::Disabled).unwrap().name(),
                "knob-disabled"
            );
            assert!(
                aux.background_image()
                    .unwrap()
                    .shares_pixels_with(background),
                "auxiliaries must reuse the primary's background"
            );
            assert!(aux.foreground_image().is_none());
        }
        assert_eq!(screen.image_title(), Some("knob"));
    }

    #[test]
    fn test_image_chosen_none_clears_every_slot() {
        let (mut screen, _dir) = screen_with_knob_assets();
        screen.image_chosen(Some("knob"));

        screen.image_chosen(None);

        for role in KnobRole::ALL {
            let knob = screen.control(role);
            assert!(knob.image(ControlState::Normal).is_none());
            assert!(knob.image(ControlState::Highlighted).is_none());
            assert!(knob.image(ControlState::Disabled).is_none());
            assert!(knob.background_image().is_none());
            assert!(knob.foreground_image().is_none());
        }
        assert!(screen.image_title().is_none());
    }

    #[test]
    fn test_image_chosen_with_missing_assets() {
        let mut screen = test_screen();

        screen.image_chosen(Some("knob"));

        let primary = screen.control(KnobRole::Primary);
        assert!(primary.image(ControlState::Normal).is_none());
        assert!(primary.background_image().is_none());
        assert_eq!(screen.image_title(), Some("knob"));
    }

    #[test]
    fn test_partial_asset_family_resolves_partially() {
        let dir = create_test_dir();
        write_test_png(dir.path(), "teardrop", 64, 64);
        write_test_png(dir.path(), "teardrop-background", 64, 64);
        let config = DemoConfig {
            assets_dir: dir.path().to_path_buf(),
            ..DemoConfig::default()
        };
        let mut screen = ContinuousScreen::new(&config);

        screen.image_chosen(Some("teardrop"));

        let primary = screen.control(KnobRole::Primary);
        assert_eq!(
            primary.image(ControlState::Normal).unwrap().name(),
            "teardrop"
        );
        assert!(primary.image(ControlState::Highlighted).is_none());
        assert_eq!(
            primary.background_image().unwrap().name(),
            "teardrop-background"
        );
        assert!(primary.foreground_image().is_none());
    }

    #[test]
    fn test_picker_handoff_reflects_selection() {
        let mut screen = test_screen();

        let handoff = screen.picker_handoff();
        assert_eq!(handoff.titles, vec!["(none)", "knob", "teardrop"]);
        assert!(handoff.current.is_none());

        screen.image_chosen(Some("teardrop"));
        let handoff = screen.picker_handoff();
        assert_eq!(handoff.current.as_deref(), Some("teardrop"));
    }

    #[test]
    fn test_snapshot_reflects_screen_state() {
        let mut screen = test_screen();
        screen.turn_knob(KnobRole::MinBound, -0.75);
        screen.select_gesture_segment(3);
        screen.set_circular_switch(true);

        let snapshot = screen.snapshot();

        assert_eq!(snapshot.labels.minimum, "-0.75");
        assert_eq!(snapshot.gesture, Gesture::Tap);
        assert!(!snapshot.clockwise);
        assert!(snapshot.circular);
        assert!(!snapshot.aux_enabled);
        assert_eq!(snapshot.primary_min, -0.75);
        assert_eq!(snapshot.primary_max, FRAC_PI_2);
        assert!(snapshot.image_title.is_none());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let screen = test_screen();

        let value = serde_json::to_value(screen.snapshot()).unwrap();

        assert_eq!(value["labels"]["minimum"], "-1.57");
        assert_eq!(value["gesture"], "one_finger_rotation");
        assert_eq!(value["aux_enabled"], true);
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an auxiliary turn lands in the primary's bound
            /// exactly, not a clamped or rounded copy
            #[test]
            fn aux_turn_copies_exact_value(position in -6.3f32..6.3) {
                let mut screen = test_screen();

                screen.turn_knob(KnobRole::MinBound, position);

                prop_assert_eq!(screen.control(KnobRole::Primary).min(), position);
                prop_assert_eq!(&screen.labels().minimum, &format_position(position));
            }

            /// Property: listed segments select their gesture, unlisted
            /// segments leave the mode alone
            #[test]
            fn gesture_segment_mapping(segment in 0usize..12) {
                let mut screen = test_screen();

                screen.select_gesture_segment(segment);

                let expected = Gesture::from_segment(segment)
                    .unwrap_or(Gesture::OneFingerRotation);
                for role in KnobRole::ALL {
                    prop_assert_eq!(screen.control(role).gesture(), expected);
                }
            }

            /// Property: after any toggle combination the three knobs agree
            /// on gesture and orientation, and only the circular flag gates
            /// the auxiliaries
            #[test]
            fn toggles_keep_knobs_pairwise_identical(
                segment in 0usize..6,
                clockwise in any::<bool>(),
                circular in any::<bool>()
            ) {
                let mut screen = test_screen();

                screen.select_gesture_segment(segment);
                screen.set_clockwise_switch(clockwise);
                screen.set_circular_switch(circular);

                let primary = screen.control(KnobRole::Primary);
                for role in [KnobRole::MinBound, KnobRole::MaxBound] {
                    let aux = screen.control(role);
                    prop_assert_eq!(aux.gesture(), primary.gesture());
                    prop_assert_eq!(aux.clockwise(), primary.clockwise());
                    prop_assert_eq!(aux.enabled(), !circular);
                }
                prop_assert!(primary.enabled());
            }
        }
    }
}
