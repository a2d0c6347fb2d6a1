//! Shared integration-test harness for running the `skosnote` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Environment variables that would change conversion output.
const SCRUBBED_ENV: [&str; 4] = [
    "SKOSNOTE_BASE_URI",
    "SKOSNOTE_LANG",
    "SKOSNOTE_LOG_LEVEL",
    "SKOSNOTE_COLOR",
];

/// Runs `skosnote` with `args` in `cwd` and waits for it to exit.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command_in(args: &[&str], cwd: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skosnote"));
    cmd.args(args).current_dir(cwd);
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd.output().expect("failed to run skosnote")
}

/// Runs `skosnote` with `args` in a throwaway directory.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("failed to create temp dir");
    spawn_command_in(args, dir.path())
}

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copies a fixture into `dir`, returning the new path.
#[allow(clippy::missing_panics_doc)]
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let dest = dir.join(name);
    std::fs::copy(fixture_path(name), &dest).expect("failed to copy fixture");
    dest
}

/// Reads and parses a JSON-LD artifact.
#[allow(clippy::missing_panics_doc)]
pub fn read_jsonld(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("failed to read JSON-LD output");
    serde_json::from_str(&text).expect("JSON-LD output should be valid JSON")
}

/// Node object of the single concept in a JSON-LD document.
#[allow(clippy::missing_panics_doc)]
pub fn concept_node(doc: &Value) -> &Value {
    let graph = doc["@graph"].as_array().expect("@graph should be an array");
    assert_eq!(graph.len(), 1, "expected exactly one node: {doc}");
    &graph[0]
}

/// Values of a property as a list, whether stored singly or as an array.
pub fn values<'a>(node: &'a Value, key: &str) -> Vec<&'a Value> {
    match node.get(key) {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(value) => vec![value],
    }
}

/// `@id` of every IRI value of a property.
pub fn ids(node: &Value, key: &str) -> Vec<String> {
    values(node, key)
        .into_iter()
        .filter_map(|v| v["@id"].as_str().map(str::to_string))
        .collect()
}

/// Stdout as a lossy string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
