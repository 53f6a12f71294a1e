//! Plays a session script against the continuous screen

use crate::screen::{ContinuousScreen, ImageChooser, ScreenSnapshot, choice_for_title};
use crate::session::script::{SessionScript, SessionStep};
use tracing::{info, warn};

/// Apply every step of the script to the screen in order, then return the
/// final snapshot.
///
/// Each step settles completely before the next begins. Image titles the
/// picker does not offer are skipped with a warning.
pub fn run_session(screen: &mut ContinuousScreen, script: &SessionScript) -> ScreenSnapshot {
    info!("Playing session with {} steps", script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        info!("Step {}: {:?}", index + 1, step);
        apply_step(screen, step);
    }

    screen.snapshot()
}

fn apply_step(screen: &mut ContinuousScreen, step: &SessionStep) {
    match step {
        SessionStep::TurnKnob { knob, position } => screen.turn_knob(*knob, *position),
        SessionStep::SelectGesture { segment } => screen.select_gesture_segment(*segment),
        SessionStep::SetClockwise { on } => screen.set_clockwise_switch(*on),
        SessionStep::SetCircular { on } => screen.set_circular_switch(*on),
        SessionStep::ChooseImage { title } => choose_image(screen, title),
    }
}

/// Stand-in for the picker screen: check the title against the handoff list
/// and route the choice back through the chooser callback.
fn choose_image(screen: &mut ContinuousScreen, title: &str) {
    let handoff = screen.picker_handoff();
    if !handoff.titles.iter().any(|offered| offered == title) {
        warn!("Skipping image title {title:?}: the picker does not offer it");
        return;
    }

    screen.image_chosen(choice_for_title(title));
}
