//! Knob control surface
//!
//! This module holds the consumed surface of the external knob widget: the
//! property handles the demo screen drives and the notification events it
//! listens to. The widget's own gesture-to-angle mapping and rendering
//! belong to the embedding host and are not reproduced here.
//!
//! # Overview
//!
//! - **`KnobControl`**: a property handle per knob instance (position,
//!   bounds, gesture mode, orientation, circular flag, enabled flag, tint,
//!   per-state title colors, per-state images, background and foreground
//!   overlay images)
//! - **`ControlEvent`**: value-changed notifications carrying the control's
//!   identity, sent over an mpsc channel registered by the observer
//! - **`HostProfile`**: capability query for hosts that predate accent
//!   tinting
//! - **`Color`**: RGBA value with an HSB constructor for host-style accent
//!   colors
//!
//! # Notification model
//!
//! A control notifies only for user interaction: `turn_to` (called by the
//! host gesture layer) emits `ControlEvent::ValueChanged`, while every
//! programmatic setter stays silent. Disabled controls swallow turns
//! entirely. Events go through `std::sync::mpsc` with `try_send`, so a
//! stalled receiver loses notifications rather than blocking the UI thread.
//!
//! # Example Usage
//!
//! ```
//! use knobdemo::knob::{ControlEvent, Frame, KnobControl};
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::sync_channel(32);
//!
//! let mut knob = KnobControl::new(Frame::new(0.0, 0.0, 160.0, 160.0));
//! knob.observe_value_changed(tx);
//!
//! // The host gesture layer reports a user turn; the observer hears it.
//! knob.turn_to(0.75);
//!
//! match rx.try_recv() {
//!     Ok(ControlEvent::ValueChanged { control, position }) => {
//!         assert_eq!(control, knob.id());
//!         assert!((position - 0.75).abs() < f32::EPSILON);
//!     }
//!     _ => panic!("expected a value-changed event"),
//! }
//! ```

pub mod color;
pub mod control;

pub use color::Color;
pub use control::{
    ControlEvent, ControlId, ControlState, Frame, Gesture, HostProfile, KnobControl, KnobMode,
};
