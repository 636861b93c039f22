//! Integration Test: Single Consumer
//!
//! **Policy**: Companion state changes only when the run loop applies a
//! dequeued action. No other TUI module may call into it mutably.

use architectural_enforcement::{production_lines, rust_sources};

const MUTATORS: &[&str] = &[
    ".handle(",
    ".handle_all(",
    ".apply_intent(",
    ".encourage(",
    ".open_dress_up(",
    ".open_gift_menu(",
    ".open_background(",
];

#[test]
fn test_only_app_applies_actions() {
    let mut violations = Vec::new();

    for path in rust_sources("tui/src") {
        if path.ends_with("app.rs") {
            continue;
        }
        for line in production_lines(&path) {
            if MUTATORS.iter().any(|m| line.code.contains(m)) {
                violations.push(format!("{}:{} - {}", path.display(), line.number, line.code));
            }
        }
    }

    assert!(violations.is_empty(), "{violations:#?}");
}

#[test]
fn test_app_has_exactly_one_apply_site() {
    let app = rust_sources("tui/src")
        .into_iter()
        .find(|p| p.ends_with("app.rs"))
        .unwrap();

    let sites = production_lines(&app)
        .into_iter()
        .filter(|l| l.code.contains("companion.handle("))
        .count();
    assert_eq!(sites, 1);
}
