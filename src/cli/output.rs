//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR and non-tty output):
//! - Green: success
//! - Red: errors
//! - Cyan: hints

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ exported 2 variables`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ API call failed: ...`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ DSV_RETRIEVE must be a JSON array`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}
