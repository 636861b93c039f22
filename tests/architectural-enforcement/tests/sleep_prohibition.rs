//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT block a thread to wait. Delays are
//! tokio timers whose results come back through the action queue.

use architectural_enforcement::find_violations;

#[test]
fn test_no_thread_sleep_in_production_code() {
    let violations = find_violations(&["core/src", "tui/src"], |code| {
        code.contains("thread::sleep") || code.contains("std::thread::park")
    });

    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        panic!(
            "\nFound {} blocking sleep(s) in production code. Schedule an Action instead.",
            violations.len()
        );
    }
}
