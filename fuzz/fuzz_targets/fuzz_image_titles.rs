#![no_main]

use knobdemo::assets::{AssetCatalog, SlotNames};
use knobdemo::screen::choice_for_title;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Run arbitrary strings through the title handling paths: suffix
    // derivation, the picker's empty-entry mapping, and a catalog lookup
    // against a directory that doesn't exist
    if let Ok(s) = std::str::from_utf8(data) {
        let names = SlotNames::for_title(s);
        let _ = names.normal.len();

        let _choice = choice_for_title(s);

        let catalog = AssetCatalog::new("fuzz-missing-assets");
        let _image = catalog.image(s);
    }
});
