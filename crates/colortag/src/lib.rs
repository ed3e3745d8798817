//! # colortag - Inline Color Tags for Terminal Output
//!
//! `colortag` turns `<tag>text</>` markup into ANSI SGR escape sequences, or
//! into plain text when color is disabled or the terminal cannot show it.
//!
//! ## Core Concepts
//!
//! - Named tags: `<info>`, `<err>`, `<red>` ... resolved through a built-in
//!   registry ([`color_tags`], [`tag_code`]).
//! - Attribute tags: `<fg=yellow;bg=black;op=bold,underscore>` translated on
//!   the fly ([`parse_code_from_attr`]).
//! - The render gate: [`set_enabled`] plus a terminal probe that honors
//!   `NO_COLOR` and `FORCE_COLOR`. Tests use [`force_open_color_render`].
//! - Printing: [`sprint`], [`println`], [`fprintf`] ... and the [`Tag`] handle.
//!   Operands implement [`Operand`], which tells strings from other values.
//!
//! ## Quick Start
//!
//! ```rust
//! use colortag::{apply_tag, clear_tag, force_open_color_render, replace_tag};
//!
//! let _guard = force_open_color_render();
//!
//! assert_eq!(replace_tag("<red>MSG</>"), "\x1b[0;31mMSG\x1b[0m");
//! assert_eq!(apply_tag("info", "MSG"), "\x1b[0;32mMSG\x1b[0m");
//! assert_eq!(
//!     clear_tag("abc <err>error</> def <info>info text</>"),
//!     "abc error def info text"
//! );
//! ```
//!
//! ## Tag Syntax
//!
//! Every tag closes with the literal `</>`. Content may span lines. Tags do
//! not nest: an inner opener is kept as text and the outer tag ends at the
//! first `</>`. Unknown names, unclosed openers and stray `</>` are left
//! exactly as written by [`replace_tag`] and removed by [`clear_tag`].
//!
//! ```rust
//! let _guard = colortag::force_open_color_render();
//!
//! let out = colortag::replace_tag("abc <err>err-text</> def <d>");
//! assert!(out.contains("<d>"));
//! assert!(!out.contains("<err>"));
//! ```
//!
//! ## Disabling Color
//!
//! ```rust
//! colortag::set_enabled(false);
//! assert_eq!(colortag::text("<err>text</>"), "text");
//! colortag::set_enabled(true);
//! ```

pub mod env;
mod gate;
mod handle;
mod output;
mod print;
mod registry;

pub use colortag_parser::{
    parse_code_from_attr, UnknownTagError, UnknownTagErrors, UnknownTagKind, CLOSE_TAG,
};
use colortag_parser::{TagParser, TagTransform};

pub use gate::{
    force_open_color_render, is_enabled, is_like_in_cmd, is_support_color, render_enabled,
    reset_color_render, set_enabled, ForceColorGuard,
};
pub use handle::{tag, Tag};
pub use output::{reset_output, set_output};
pub use print::{
    fprint, fprintf, fprintln, print, printf, println, sprint, sprintf, Operand, Value,
};
pub use registry::{color_tags, is_defined_tag, tag_code};

/// Renders every tag in `input` according to the render gate.
///
/// With the gate open each resolvable tag becomes `ESC[<code>m...ESC[0m`;
/// with it closed the tag is replaced by its content. Unknown names and
/// unclosed tags are left as written.
pub fn replace_tag(input: &str) -> String {
    if !input.contains(CLOSE_TAG) {
        return input.to_string();
    }

    let transform = if render_enabled() {
        TagTransform::Apply
    } else {
        TagTransform::Remove
    };
    TagParser::new(color_tags(), transform).parse(input)
}

/// Removes all tag syntax from `input`, keeping tag contents.
///
/// Unlike [`replace_tag`] with color disabled, this also drops unknown
/// tags, unclosed openers and stray `</>`.
pub fn clear_tag(input: &str) -> String {
    TagParser::new(color_tags(), TagTransform::Strip).parse(input)
}

/// Wraps `body` in `<name>...</>`.
///
/// Returns an empty string for an empty body and the body itself for an
/// empty name.
pub fn wrap_tag(body: &str, name: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    if name.is_empty() {
        return body.to_string();
    }
    format!("<{}>{}{}", name, body, CLOSE_TAG)
}

/// Wraps `body` in the tag `name` and renders it.
pub fn apply_tag(name: &str, body: &str) -> String {
    replace_tag(&wrap_tag(body, name))
}

/// Shorthand for [`replace_tag`].
pub fn string(input: &str) -> String {
    replace_tag(input)
}

/// Renders `input` for display: ANSI when the gate is open, plain text
/// otherwise.
pub fn text(input: &str) -> String {
    replace_tag(input)
}

/// Renders the operands like [`sprint`]. `render(&[])` is the empty string.
pub fn render(args: &[&dyn Operand]) -> String {
    if args.is_empty() {
        return String::new();
    }
    sprint(args)
}

/// Wraps `text` in an explicit SGR code, honoring the render gate.
///
/// ```rust
/// let _guard = colortag::force_open_color_render();
/// assert_eq!(colortag::render_code("1;31", "x"), "\x1b[1;31mx\x1b[0m");
/// assert_eq!(colortag::render_code("", "x"), "x");
/// ```
pub fn render_code(code: &str, text: &str) -> String {
    if render_enabled() {
        colortag_parser::render_code(code, text)
    } else {
        text.to_string()
    }
}

/// Removes ANSI escape sequences from `text`.
pub fn clear_code(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

/// Reports every closed tag in `input` that would not be styled.
///
/// ```rust
/// assert!(colortag::validate_tags("<info>ok</>").is_ok());
///
/// let errors = colortag::validate_tags("<inof>typo</>").unwrap_err();
/// assert_eq!(errors.errors[0].tag, "inof");
/// ```
pub fn validate_tags(input: &str) -> Result<(), UnknownTagErrors> {
    colortag_parser::validate_tags(input, color_tags()).inspect_err(|errors| {
        for error in errors {
            tracing::trace!(tag = %error.tag, kind = %error.kind, offset = error.offset, "Tag would not be styled");
        }
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serial_test::serial;

    fn registered_name() -> impl Strategy<Value = &'static str> {
        let mut names: Vec<&'static str> = color_tags().keys().copied().collect();
        names.sort_unstable();
        prop::sample::select(names)
    }

    fn body() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"\n]{1,40}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        #[serial]
        fn registered_tag_renders_with_its_code(name in registered_name(), b in body()) {
            let _guard = force_open_color_render();
            let code = tag_code(name);
            prop_assert_eq!(
                replace_tag(&format!("<{}>{}</>", name, b)),
                format!("\x1b[{}m{}\x1b[0m", code, b)
            );
        }

        #[test]
        #[serial]
        fn rendered_output_has_no_tag_syntax(name in registered_name(), b in body()) {
            let _guard = force_open_color_render();
            let out = replace_tag(&format!("x <{}>{}</> y", name, b));
            let open_tag = format!("<{}>", name);
            prop_assert!(!out.contains(&open_tag));
            prop_assert!(!out.contains("</>"));
        }

        #[test]
        fn wrap_then_clear_returns_body(name in registered_name(), b in body()) {
            prop_assert_eq!(clear_tag(&wrap_tag(&b, name)), b);
        }
    }
}
