//! A reusable handle bound to one registry tag.

use std::fmt;

use crate::output::write_stdout;
use crate::print::{concat, for_stdout, join, Operand};
use crate::{replace_tag, wrap_tag};

/// A tag name ready to wrap printed text.
///
/// The handle only stores the name. Every call wraps the composed body in
/// `<name>...</>` and renders it like the free functions do.
///
/// ```rust
/// use colortag::{force_open_color_render, tag};
///
/// let _guard = force_open_color_render();
/// assert_eq!(tag("mga").sprint(&[&"msg"]), "\x1b[0;35mmsg\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
}

/// Creates a [`Tag`] handle for `name`.
pub fn tag(name: impl Into<String>) -> Tag {
    Tag::new(name)
}

impl Tag {
    /// Creates a handle for `name`. The name is not checked against the registry.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the bound tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, body: &str) -> String {
        replace_tag(&wrap_tag(body, &self.name))
    }

    /// Renders the operands inside this tag, spaced as by [`sprint`](crate::sprint).
    pub fn sprint(&self, args: &[&dyn Operand]) -> String {
        self.render(&concat(args))
    }

    /// Renders pre-formatted arguments inside this tag.
    pub fn sprintf(&self, args: fmt::Arguments<'_>) -> String {
        self.render(&fmt::format(args))
    }

    /// Prints the operands inside this tag.
    pub fn print(&self, args: &[&dyn Operand]) {
        write_stdout(&for_stdout(self.sprint(args)));
    }

    /// Prints the space-joined operands inside this tag, then a newline
    /// outside of it.
    pub fn println(&self, args: &[&dyn Operand]) {
        let mut line = for_stdout(self.render(&join(args)));
        line.push('\n');
        write_stdout(&line);
    }

    /// Prints pre-formatted arguments inside this tag.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        write_stdout(&for_stdout(self.sprintf(args)));
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::capture_stdout;
    use crate::print::prepare_stdout;
    use crate::{force_open_color_render, is_like_in_cmd};
    use serial_test::serial;

    fn stdout_expect(rendered: &str) -> String {
        prepare_stdout(rendered.to_string(), is_like_in_cmd())
    }

    #[test]
    #[serial]
    fn sprint_wraps_body() {
        let _guard = force_open_color_render();
        assert_eq!(tag("info").sprint(&[&"msg"]), "\x1b[0;32mmsg\x1b[0m");
        assert_eq!(tag("mga").sprint(&[&"msg"]), "\x1b[0;35mmsg\x1b[0m");
    }

    #[test]
    #[serial]
    fn sprintf_wraps_formatted_body() {
        let _guard = force_open_color_render();
        assert_eq!(
            tag("info").sprintf(format_args!("m{}", "sg")),
            "\x1b[0;32mmsg\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn print_family() {
        let _guard = force_open_color_render();
        let info = tag("info");

        let out = capture_stdout(|| info.print(&[&"msg"]));
        assert_eq!(out, stdout_expect("\x1b[0;32mmsg\x1b[0m"));

        let out = capture_stdout(|| info.println(&[&"msg"]));
        assert_eq!(out, stdout_expect("\x1b[0;32mmsg\x1b[0m\n"));

        let out = capture_stdout(|| info.printf(format_args!("m{}", "sg")));
        assert_eq!(out, stdout_expect("\x1b[0;32mmsg\x1b[0m"));
    }

    #[test]
    #[serial]
    fn println_joins_operands_inside_tag() {
        let _guard = force_open_color_render();
        let out = capture_stdout(|| tag("mga").println(&[&"a", &"b"]));
        assert_eq!(out, stdout_expect("\x1b[0;35ma b\x1b[0m\n"));
    }

    #[test]
    #[serial]
    fn sprint_spaces_numbers() {
        let _guard = force_open_color_render();
        assert_eq!(tag("info").sprint(&[&1, &2]), "\x1b[0;32m1 2\x1b[0m");
    }

    #[test]
    #[serial]
    fn empty_body_renders_nothing() {
        let _guard = force_open_color_render();
        assert_eq!(tag("info").sprint(&[]), "");
    }

    #[test]
    #[serial]
    fn empty_name_leaves_body() {
        let _guard = force_open_color_render();
        assert_eq!(tag("").sprint(&[&"msg"]), "msg");
    }

    #[test]
    #[serial]
    fn unknown_name_left_literal() {
        let _guard = force_open_color_render();
        assert_eq!(tag("nope").sprint(&[&"msg"]), "<nope>msg</>");
    }

    #[test]
    fn handle_keeps_name() {
        let t = Tag::new("warn");
        assert_eq!(t.name(), "warn");
        assert_eq!(t.to_string(), "warn");
        assert_eq!(t, tag("warn"));
    }
}
