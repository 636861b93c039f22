//! Integration Test: No Panicking Shortcuts
//!
//! **Policy**: Production code propagates errors with `?` or handles them.
//! `unwrap()` and `expect()` are for tests only.

use architectural_enforcement::find_violations;

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let violations = find_violations(&["core/src", "tui/src"], |code| {
        code.contains(".unwrap()") || code.contains(".expect(")
    });

    assert!(
        violations.is_empty(),
        "\nunwrap/expect in production code:\n  {}",
        violations.join("\n  ")
    );
}
