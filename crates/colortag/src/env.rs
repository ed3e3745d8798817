//! Environment abstractions for color support detection.
//!
//! The probe reads two variables before falling back to the terminal:
//!
//! - `NO_COLOR`: any non-empty value disables color support.
//! - `FORCE_COLOR`: any non-empty value other than `0` or `false` enables it.
//!
//! Reading goes through [`EnvReader`] so tests can run without touching
//! the real process environment.

use std::collections::HashMap;

use console::Term;

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment reader for testing.
#[derive(Debug, Default, Clone)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Asks the terminal attached to stdout whether it renders ANSI colors.
pub fn terminal_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Decides whether color output is supported.
///
/// Environment overrides win over `terminal`, which is only called when
/// neither variable decides.
pub fn detect_color_support<E, F>(env: &E, terminal: F) -> bool
where
    E: EnvReader + ?Sized,
    F: FnOnce() -> bool,
{
    if let Some(value) = env.var("NO_COLOR").filter(|v| !v.is_empty()) {
        tracing::debug!(supported = false, source = "NO_COLOR", value = %value, "Color support disabled by environment");
        return false;
    }

    if let Some(value) = env.var("FORCE_COLOR").filter(|v| !v.is_empty()) {
        let forced = value != "0" && !value.eq_ignore_ascii_case("false");
        tracing::debug!(supported = forced, source = "FORCE_COLOR", value = %value, "Color support set by environment");
        return forced;
    }

    let supported = terminal();
    tracing::debug!(supported, source = "terminal", "Probed terminal color support");
    supported
}

/// Detects a console where raw ANSI written to stdout is shown literally.
///
/// Only Windows consoles without virtual terminal processing behave this way.
pub fn detect_like_in_cmd<F: FnOnce() -> bool>(terminal: F) -> bool {
    cfg!(windows) && !terminal()
}
