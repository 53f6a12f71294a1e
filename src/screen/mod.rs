//! Demo screens
//!
//! `continuous` holds the screen the demo is about; `picker` holds the
//! consumed surface of the secondary asset picker screen.

pub mod continuous;
pub mod picker;

pub use continuous::{
    ContinuousScreen, KnobRole, ScreenLabels, ScreenSnapshot, SharedKnobSettings, Toggles,
    format_position,
};
pub use picker::{IMAGE_TITLES, ImageChooser, NO_IMAGE_TITLE, PickerHandoff, choice_for_title};
