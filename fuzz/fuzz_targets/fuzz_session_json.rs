#![no_main]

use knobdemo::session::SessionScript;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as JSON into SessionScript
    // This tests for crashes and panics in the serde model
    if let Ok(s) = std::str::from_utf8(data) {
        let _result: Result<SessionScript, _> = serde_json::from_str(s);
        // We don't care if parsing fails, we just want to ensure it doesn't crash
    }
});
