//! Knob control property surface
//!
//! `KnobControl` is the handle through which the demo drives one knob
//! instance hosted by the embedding surface. Gesture capture, hit testing,
//! and drawing live in the host layer; this side holds the readable and
//! writable properties and reports user turns through an event channel.

use crate::assets::KnobImage;
use crate::knob::color::Color;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc;
use tracing::{debug, warn};

/// Placement rectangle for a control, in host points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Horizontal origin
    pub x: f32,
    /// Vertical origin
    pub y: f32,
    /// Width of the region
    pub width: f32,
    /// Height of the region
    pub height: f32,
}

impl Frame {
    /// Create a frame from origin and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Process-unique identifier for a control instance
///
/// Carried in value-changed events so a receiver draining one shared channel
/// can tell which control reported the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u32);

static NEXT_CONTROL_ID: AtomicU32 = AtomicU32::new(0);

impl ControlId {
    fn next() -> Self {
        Self(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Input technique used to change a knob's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Rotate by dragging a single touch around the knob center
    OneFingerRotation,
    /// Rotate with a two-finger twist
    TwoFingerRotation,
    /// Map vertical pan distance to rotation
    VerticalPan,
    /// Jump to the tapped angle
    Tap,
}

impl Gesture {
    /// Map a segmented-control index to a gesture mode.
    ///
    /// Indices 0 through 3 select the four gestures in declaration order;
    /// anything else yields `None` so callers can leave the mode unchanged.
    pub fn from_segment(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::OneFingerRotation),
            1 => Some(Self::TwoFingerRotation),
            2 => Some(Self::VerticalPan),
            3 => Some(Self::Tap),
            _ => None,
        }
    }
}

/// Positional mode of a knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnobMode {
    /// Position varies smoothly over the configured range
    Continuous,
    /// Position snaps to discrete detents
    Detented,
}

/// Visual state a per-state property applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Resting state
    Normal,
    /// While a touch is active on the control
    Highlighted,
    /// While the control is disabled
    Disabled,
}

impl ControlState {
    /// Number of visual states
    pub const COUNT: usize = 3;

    fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Highlighted => 1,
            Self::Disabled => 2,
        }
    }
}

/// Notification emitted by a control through its registered observer channel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// The user turned a control to a new position
    ValueChanged {
        /// Identity of the control that was turned
        control: ControlId,
        /// The position after the turn, in radians
        position: f32,
    },
}

/// Capability profile of the embedding host
///
/// Older hosts predate accent tinting; the screen queries this before
/// deciding between a tint and a title-color override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostProfile {
    /// Whether the host honors `set_tint`
    pub tint_support: bool,
}

impl Default for HostProfile {
    fn default() -> Self {
        Self { tint_support: true }
    }
}

/// Handle to one knob control instance
///
/// Programmatic setters never emit notifications; only `turn_to`, the entry
/// point the host gesture layer calls for user interaction, does. The host
/// is responsible for mapping touches to angles, so positions are stored as
/// given without clamping.
pub struct KnobControl {
    id: ControlId,
    frame: Frame,
    host: HostProfile,
    mode: KnobMode,
    gesture: Gesture,
    position: f32,
    min: f32,
    max: f32,
    clockwise: bool,
    circular: bool,
    enabled: bool,
    tint: Option<Color>,
    title_colors: [Option<Color>; ControlState::COUNT],
    state_images: [Option<KnobImage>; ControlState::COUNT],
    background_image: Option<KnobImage>,
    foreground_image: Option<KnobImage>,
    value_changed: Option<mpsc::SyncSender<ControlEvent>>,
}

impl KnobControl {
    /// Create a control sized to the given placement frame, assuming a
    /// modern host profile.
    pub fn new(frame: Frame) -> Self {
        Self::with_host(frame, HostProfile::default())
    }

    /// Create a control sized to the given placement frame on a host with
    /// the given capability profile.
    pub fn with_host(frame: Frame, host: HostProfile) -> Self {
        Self {
            id: ControlId::next(),
            frame,
            host,
            mode: KnobMode::Continuous,
            gesture: Gesture::OneFingerRotation,
            position: 0.0,
            min: -PI,
            max: PI,
            clockwise: false,
            circular: false,
            enabled: true,
            tint: None,
            title_colors: [None, None, None],
            state_images: [None, None, None],
            background_image: None,
            foreground_image: None,
            value_changed: None,
        }
    }

    /// Identity of this control instance
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Placement frame the control was created with
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Whether the host honors accent tinting
    pub fn supports_tint(&self) -> bool {
        self.host.tint_support
    }

    /// Current positional mode
    pub fn mode(&self) -> KnobMode {
        self.mode
    }

    /// Set the positional mode
    pub fn set_mode(&mut self, mode: KnobMode) {
        self.mode = mode;
    }

    /// Current gesture mode
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Set the gesture mode
    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    /// Current angular position in radians
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Set the position programmatically.
    ///
    /// Does not notify observers; notification is reserved for user turns
    /// reported through `turn_to`. Re-applying the current position is how
    /// the host is told to reposition the indicator after an orientation
    /// change.
    pub fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    /// Minimum position bound
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Set the minimum position bound
    pub fn set_min(&mut self, min: f32) {
        self.min = min;
    }

    /// Maximum position bound
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Set the maximum position bound
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    /// Whether position increases clockwise
    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Set the clockwise orientation flag
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    /// Whether the knob rotates without bound clamping
    pub fn circular(&self) -> bool {
        self.circular
    }

    /// Set the circular flag
    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    /// Whether the control responds to user interaction
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable user interaction
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current accent tint, if any
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Apply an accent tint.
    ///
    /// Ignored on hosts without tint support; callers that care should
    /// check `supports_tint` first and fall back to title colors.
    pub fn set_tint(&mut self, color: Color) {
        if !self.host.tint_support {
            debug!("Host has no tint support; ignoring tint on {:?}", self.id);
            return;
        }
        self.tint = Some(color);
    }

    /// Title color for a visual state, if set
    pub fn title_color(&self, state: ControlState) -> Option<Color> {
        self.title_colors[state.index()]
    }

    /// Set the title color for a visual state
    pub fn set_title_color(&mut self, state: ControlState, color: Color) {
        self.title_colors[state.index()] = Some(color);
    }

    /// Foreground image for a visual state, if set
    pub fn image(&self, state: ControlState) -> Option<&KnobImage> {
        self.state_images[state.index()].as_ref()
    }

    /// Set or clear the foreground image for a visual state
    pub fn set_image(&mut self, state: ControlState, image: Option<KnobImage>) {
        self.state_images[state.index()] = image;
    }

    /// Background image, if set
    pub fn background_image(&self) -> Option<&KnobImage> {
        self.background_image.as_ref()
    }

    /// Set or clear the background image
    pub fn set_background_image(&mut self, image: Option<KnobImage>) {
        self.background_image = image;
    }

    /// Foreground overlay image, if set
    pub fn foreground_image(&self) -> Option<&KnobImage> {
        self.foreground_image.as_ref()
    }

    /// Set or clear the foreground overlay image
    pub fn set_foreground_image(&mut self, image: Option<KnobImage>) {
        self.foreground_image = image;
    }

    /// Register the channel that receives this control's value-changed
    /// notifications. A control has one observer; registering again
    /// replaces the previous channel.
    pub fn observe_value_changed(&mut self, sender: mpsc::SyncSender<ControlEvent>) {
        self.value_changed = Some(sender);
    }

    /// Report a user turn to the given position.
    ///
    /// This is the host gesture layer's entry point. Disabled controls
    /// ignore turns entirely: the position stays put and no notification is
    /// emitted.
    pub fn turn_to(&mut self, position: f32) {
        if !self.enabled {
            debug!("Ignoring turn on disabled control {:?}", self.id);
            return;
        }

        self.position = position;
        self.notify_value_changed();
    }

    fn notify_value_changed(&self) {
        let Some(sender) = &self.value_changed else {
            return;
        };

        let event = ControlEvent::ValueChanged {
            control: self.id,
            position: self.position,
        };

        if let Err(e) = sender.try_send(event) {
            warn!(
                "Dropping value-changed notification from {:?}: {}",
                self.id, e
            );
        }
    }
}
