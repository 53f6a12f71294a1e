#![no_main]

use knobdemo::config::DemoConfig;
use knobdemo::screen::ContinuousScreen;
use knobdemo::session::{SessionScript, run_session};
use libfuzzer_sys::fuzz_target;
use std::path::PathBuf;

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary bytes as a script and, when that succeeds, play it
    // against a fresh screen. Positions can be anything a JSON number can
    // encode; the screen must settle without panicking
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(script) = SessionScript::from_json(s) else {
        return;
    };

    let config = DemoConfig {
        assets_dir: PathBuf::from("fuzz-missing-assets"),
        ..DemoConfig::default()
    };
    let mut screen = ContinuousScreen::new(&config);
    let _snapshot = run_session(&mut screen, &script);
});
