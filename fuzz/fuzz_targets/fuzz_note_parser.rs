#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use skosnote::note::Note;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Only panics matter; malformed headers are expected to error
        let _ = Note::parse(Path::new("Fuzz.md"), content);
    }
});
