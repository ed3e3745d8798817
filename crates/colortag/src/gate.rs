//! The render gate.
//!
//! Color output happens when the caller has not disabled it and the
//! terminal supports it, or when a test has forced rendering open:
//!
//! ```text
//! render = enabled && (terminal_support || forced_open)
//! ```
//!
//! Terminal support is probed once per process (see [`crate::env`]).
//! [`force_open_color_render`] returns a guard so that forcing is always
//! paired with a reset:
//!
//! ```rust
//! use colortag::{force_open_color_render, sprint};
//!
//! let _guard = force_open_color_render();
//! assert_eq!(sprint(&[&"<red>MSG</>"]), "\x1b[0;31mMSG\x1b[0m");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

use crate::env::{detect_color_support, detect_like_in_cmd, terminal_supports_color, RealEnv};

static ENABLED: AtomicBool = AtomicBool::new(true);
static FORCED_OPEN: AtomicBool = AtomicBool::new(false);

static SUPPORT_COLOR: Lazy<bool> =
    Lazy::new(|| detect_color_support(&RealEnv, terminal_supports_color));

static LIKE_IN_CMD: Lazy<bool> = Lazy::new(|| detect_like_in_cmd(terminal_supports_color));

/// Enables or disables color rendering for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns the caller-controlled enable flag (default `true`).
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Returns the probed terminal support, ignoring any forced override.
pub fn is_support_color() -> bool {
    *SUPPORT_COLOR
}

/// Returns true when stdout is a console that shows raw ANSI literally.
pub fn is_like_in_cmd() -> bool {
    *LIKE_IN_CMD
}

/// Returns the effective rendering decision.
pub fn render_enabled() -> bool {
    is_enabled() && (FORCED_OPEN.load(Ordering::Relaxed) || is_support_color())
}

/// Forces rendering open regardless of terminal support.
///
/// The previous state is restored when the guard drops. The enable flag
/// still applies: a disabled gate stays closed.
#[must_use = "rendering is reset as soon as the guard is dropped"]
pub fn force_open_color_render() -> ForceColorGuard {
    let previous = FORCED_OPEN.swap(true, Ordering::Relaxed);
    ForceColorGuard { previous }
}

/// Drops any forced override, going back to the probed value.
pub fn reset_color_render() {
    FORCED_OPEN.store(false, Ordering::Relaxed);
}

/// Keeps rendering forced open while alive.
#[derive(Debug)]
pub struct ForceColorGuard {
    previous: bool,
}

impl Drop for ForceColorGuard {
    fn drop(&mut self) {
        FORCED_OPEN.store(self.previous, Ordering::Relaxed);
    }
}
