//! Changelog section labels

/// Rendering order for known category keys; unknown keys follow in
/// first-seen order.
pub const SECTION_ORDER: &[&str] = &[
    "breaking", "feat", "fix", "build", "ci", "docs", "style", "refactor", "perf", "test",
];

/// Human-readable label for a category key.
///
/// Unrecognized keys pass through unmodified.
pub fn section_label(key: &str) -> &str {
    match key {
        "breaking" => "Breaking Changes",
        "feat" => "Features",
        "fix" => "Bug Fixes",
        "build" => "Build System",
        "ci" => "Continuous Integration",
        "docs" => "Documentation",
        "style" => "Styling",
        "refactor" => "Code Refactoring",
        "perf" => "Performance Improvements",
        "test" => "Tests",
        other => other,
    }
}
