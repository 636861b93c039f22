//! Integration Test: Core Has No Terminal Dependencies
//!
//! **Policy**: `waifu-core` owns state only. Terminal crates live in the TUI.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const TERMINAL_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("core/Cargo.toml")).unwrap();

    for krate in TERMINAL_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "core/Cargo.toml depends on {krate}"
        );
    }
}

#[test]
fn test_core_sources_never_name_terminal_crates() {
    let violations = find_violations(&["core/src", "core/tests"], |code| {
        TERMINAL_CRATES
            .iter()
            .any(|krate| code.contains(&format!("{krate}::")))
    });

    assert!(
        violations.is_empty(),
        "\nTerminal crates used in core:\n  {}",
        violations.join("\n  ")
    );
}
