use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the gororobas binary with the config directory pinned to
/// `config_dir`, so a developer's own config never leaks into tests.
pub fn gororobas(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gororobas");
    cmd.env("GOROROBAS_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .env_remove("GOROROBAS_LOG")
        .env_remove("GOROROBAS_LOG_LEVEL");
    cmd
}

/// Write `content` to `name` under `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

/// A stored note with a heading, two paragraphs, a list and a mention
#[allow(dead_code)]
pub fn sample_note() -> String {
    serde_json::json!({
        "type": "doc",
        "content": [
            { "type": "heading", "attrs": { "level": 1 }, "content": [{ "type": "text", "text": "Horta de inverno" }] },
            { "type": "paragraph", "content": [
                { "type": "text", "text": "Plantar " },
                { "type": "mention", "attrs": { "data": {
                    "version": 1, "kind": "vegetable", "id": "veg-couve", "label": "Couve"
                } } },
                { "type": "text", "text": " em maio." },
            ] },
            { "type": "bulletList", "content": [
                { "type": "listItem", "content": [
                    { "type": "paragraph", "content": [{ "type": "text", "text": "adubar" }] },
                ] },
            ] },
            { "type": "paragraph", "content": [
                { "type": "text", "text": "Com " },
                { "type": "mention", "attrs": { "data": {
                    "version": 1, "kind": "person", "id": "pes-ana", "label": "Ana"
                } } },
                { "type": "text", "text": " e mais " },
                { "type": "mention", "attrs": { "data": {
                    "version": 1, "kind": "vegetable", "id": "veg-couve", "label": "Couve"
                } } },
            ] },
        ],
    })
    .to_string()
}
