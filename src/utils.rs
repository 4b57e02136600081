//! Common small functions used throughout the crate
//!
//! These are left public for the convenience of the user, since anyone poking
//! around inside SWMM text outputs tends to need the same handful of string
//! checks.

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Case-insensitive substring check
///
/// Report file headers are matched without regard to case, so this gets used
/// anywhere a marker could be typeset differently between SWMM builds.
///
/// ```rust
/// # use swmmtab::utils::contains_ignore_case;
/// assert!(contains_ignore_case("  Node Depth Summary  ", "node depth"));
/// assert!(!contains_ignore_case("  Node Depth Summary  ", "node inflow"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Check for the dashed separator rows SWMM writes between summary sections
///
/// A run of four or more `-` characters in a row key marks the row as a
/// visual divider rather than data.
///
/// ```rust
/// # use swmmtab::utils::is_dashed_separator;
/// assert!(is_dashed_separator("-----------------"));
/// assert!(!is_dashed_separator("NODE-1"));
/// ```
pub fn is_dashed_separator(text: &str) -> bool {
    text.contains("----")
}
