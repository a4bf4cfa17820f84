//! Loose on/off interpretation of user supplied values.
//!
//! Environment variables and config values arrive as `"yes"`, `"0"`,
//! `"Enabled"`, `-1` and so on. These helpers turn them into a `bool`,
//! falling back to a caller supplied default when the value is not
//! recognizable.

use std::fmt::Display;

const ON_WORDS: &[&str] = &["1", "on", "yes", "y", "enabled", "active", "true", "t", "+"];
const OFF_WORDS: &[&str] = &["0", "off", "no", "n", "disabled", "inactive", "false", "f", "-"];

/// The state a value describes, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    On,
    Off,
}

fn state_of(value: &dyn Display) -> Option<State> {
    let text = value.to_string().to_lowercase();
    if ON_WORDS.contains(&text.as_str()) {
        return Some(State::On);
    }
    if OFF_WORDS.contains(&text.as_str()) {
        return Some(State::Off);
    }
    text.parse::<i64>()
        .ok()
        .map(|n| if n > 0 { State::On } else { State::Off })
}

/// Returns true if `value` describes an enabled state.
///
/// Integers count as on when positive. Anything unrecognized yields `default`.
///
/// ```rust
/// use toolshed_common::is_on;
///
/// assert!(is_on("Yes", false));
/// assert!(is_on(3, false));
/// assert!(!is_on("off", true));
/// assert!(is_on("maybe", true));
/// ```
pub fn is_on(value: impl Display, default: bool) -> bool {
    state_of(&value).map_or(default, |s| s == State::On)
}

/// Returns true if `value` describes a disabled state.
///
/// Integers count as off when zero or negative. Anything unrecognized yields
/// `default`.
pub fn is_off(value: impl Display, default: bool) -> bool {
    state_of(&value).map_or(default, |s| s == State::Off)
}
