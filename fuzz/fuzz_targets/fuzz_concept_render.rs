#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use skosnote::config::ConceptConfig;
use skosnote::note::Note;
use skosnote::render;
use skosnote::skos::Concept;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(note) = Note::parse(Path::new("Fuzz Note.md"), content) else {
        return;
    };

    let concept = Concept::from_note(&note.name, &note.metadata, &ConceptConfig::default());
    let rendered = render::render(&concept).expect("rendering a parsed note never fails");

    // The embedded document must not be able to close its script element
    let script = rendered
        .html
        .split("<script type=\"application/ld+json\">")
        .nth(1)
        .and_then(|rest| rest.split("</script>").next())
        .expect("page embeds the JSON-LD document");
    assert!(!script.contains("</"));
});
