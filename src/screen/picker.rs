//! Consumed surface of the asset picker screen
//!
//! The picker itself lives in the embedding shell. This module defines what
//! crosses the boundary: the payload handed to the picker at navigation time
//! and the callback trait it invokes with the user's choice.

/// Titles the picker offers, in display order. The first entry stands for
/// the empty selection.
pub const IMAGE_TITLES: [&str; 3] = ["(none)", "knob", "teardrop"];

/// Display title of the empty selection
pub const NO_IMAGE_TITLE: &str = "(none)";

/// Callback surface for receiving the picker's choice.
///
/// The continuous screen implements this. Whatever presents the picker calls
/// `image_chosen` once per visit, passing `None` when the empty entry was
/// picked.
pub trait ImageChooser {
    /// Accept the chosen asset title, or `None` for no image set
    fn image_chosen(&mut self, title: Option<&str>);
}

/// Payload handed to the picker at navigation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerHandoff {
    /// Titles to offer, in display order
    pub titles: Vec<String>,
    /// Currently active asset title, if any
    pub current: Option<String>,
}

impl PickerHandoff {
    /// Build the handoff for the given active title
    pub fn new(current: Option<&str>) -> Self {
        Self {
            titles: IMAGE_TITLES.iter().map(ToString::to_string).collect(),
            current: current.map(str::to_string),
        }
    }
}

/// Map a picked title to the callback argument. The empty entry becomes
/// `None`, every other title passes through unchanged.
pub fn choice_for_title(title: &str) -> Option<&str> {
    if title == NO_IMAGE_TITLE {
        None
    } else {
        Some(title)
    }
}
