//! Formatted printing through the tag renderer.
//!
//! Three families share the same contract: compose the operands, run the
//! result through [`replace_tag`], then return or write it.
//!
//! - Produce-only: [`sprint`], [`sprintf`].
//! - Standard output: [`print`], [`println`], [`printf`]. On consoles that
//!   show raw ANSI literally ([`is_like_in_cmd`]) escape codes are removed
//!   before writing.
//! - Caller sink: [`fprint`], [`fprintln`], [`fprintf`]. The sink gets
//!   exactly what the renderer produced, and its errors are returned.
//!
//! Operands are passed as `&[&dyn Operand]`. [`sprint`] puts a space
//! between two neighbouring operands when neither is a string; the
//! `println` variants always separate operands with a space. The
//! `cformat!`, `cprint!`, `cprintln!`, `cwrite!` and `cwriteln!` macros
//! cover format strings.

use std::borrow::Cow;
use std::fmt::{self, Display, Write as _};
use std::io;

use crate::gate::is_like_in_cmd;
use crate::output::write_stdout;
use crate::{clear_code, replace_tag};

/// A value accepted by the print functions.
///
/// Implemented for strings, numbers, `bool`, `char` and references to any
/// of them. Wrap other `Display` types in [`Value`].
pub trait Operand: Display {
    /// Returns true for string operands, which are never space-separated
    /// by [`sprint`].
    fn is_str(&self) -> bool {
        false
    }
}

impl Operand for str {
    fn is_str(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_str(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_str(&self) -> bool {
        true
    }
}

impl Operand for fmt::Arguments<'_> {
    fn is_str(&self) -> bool {
        true
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_str(&self) -> bool {
        (**self).is_str()
    }
}

macro_rules! non_string_operands {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

non_string_operands!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Treats any `Display` value as a non-string operand.
///
/// ```rust
/// use colortag::{sprint, Value};
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::LOCALHOST;
/// assert_eq!(sprint(&[&Value(addr), &Value(8080)]), "127.0.0.1 8080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<T>(pub T);

impl<T: Display> Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Display> Operand for Value<T> {}

/// Concatenates operands, adding a space between two non-string neighbours.
pub(crate) fn concat(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut prev_is_str = true;
    for (idx, arg) in args.iter().enumerate() {
        let is_str = arg.is_str();
        if idx > 0 && !is_str && !prev_is_str {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", arg);
        prev_is_str = is_str;
    }
    out
}

/// Joins operands with single spaces.
pub(crate) fn join(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Prepares rendered text for a console, removing escape codes when the
/// console would show them literally.
pub(crate) fn prepare_stdout(rendered: String, like_in_cmd: bool) -> String {
    if like_in_cmd {
        clear_code(&rendered)
    } else {
        rendered
    }
}

/// Prepares rendered text for the current stdout.
pub(crate) fn for_stdout(rendered: String) -> String {
    prepare_stdout(rendered, is_like_in_cmd())
}

/// Renders the operands, spacing out neighbouring non-string operands.
///
/// ```rust
/// use colortag::{force_open_color_render, sprint};
///
/// let _guard = force_open_color_render();
/// assert_eq!(
///     sprint(&[&"<red>H</>", &"<green>I</>"]),
///     "\x1b[0;31mH\x1b[0m\x1b[0;32mI\x1b[0m"
/// );
/// ```
pub fn sprint(args: &[&dyn Operand]) -> String {
    replace_tag(&concat(args))
}

/// Renders pre-formatted arguments, usually built with `format_args!`.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    replace_tag(&fmt::format(args))
}

/// Renders the operands to stdout, spaced as by [`sprint`].
pub fn print(args: &[&dyn Operand]) {
    write_stdout(&for_stdout(sprint(args)));
}

/// Renders the space-joined operands to stdout, followed by a newline.
pub fn println(args: &[&dyn Operand]) {
    let mut line = for_stdout(replace_tag(&join(args)));
    line.push('\n');
    write_stdout(&line);
}

/// Renders pre-formatted arguments to stdout.
pub fn printf(args: fmt::Arguments<'_>) {
    write_stdout(&for_stdout(sprintf(args)));
}

/// Renders the operands to `w`, spaced as by [`sprint`], returning the
/// bytes written.
pub fn fprint<W: io::Write + ?Sized>(w: &mut W, args: &[&dyn Operand]) -> io::Result<usize> {
    write_rendered(w, sprint(args))
}

/// Renders the space-joined operands to `w`, followed by a newline.
///
/// ```rust
/// use colortag::{force_open_color_render, fprintln};
///
/// let _guard = force_open_color_render();
/// let mut buf = Vec::new();
/// fprintln(&mut buf, &[&"<red>hello</>", &"world"]).unwrap();
/// assert_eq!(buf, b"\x1b[0;31mhello\x1b[0m world\n");
/// ```
pub fn fprintln<W: io::Write + ?Sized>(w: &mut W, args: &[&dyn Operand]) -> io::Result<usize> {
    let mut line = replace_tag(&join(args));
    line.push('\n');
    write_rendered(w, line)
}

/// Renders pre-formatted arguments to `w`.
pub fn fprintf<W: io::Write + ?Sized>(w: &mut W, args: fmt::Arguments<'_>) -> io::Result<usize> {
    write_rendered(w, sprintf(args))
}

fn write_rendered<W: io::Write + ?Sized>(w: &mut W, text: String) -> io::Result<usize> {
    w.write_all(text.as_bytes())?;
    Ok(text.len())
}

/// Formats and renders color tags, returning a `String`.
///
/// ```rust
/// let _guard = colortag::force_open_color_render();
/// assert_eq!(colortag::cformat!("<red>{}</>", "MSG"), "\x1b[0;31mMSG\x1b[0m");
/// ```
#[macro_export]
macro_rules! cformat {
    ($($arg:tt)*) => {
        $crate::sprintf(::std::format_args!($($arg)*))
    };
}

/// Formats and renders color tags to stdout.
#[macro_export]
macro_rules! cprint {
    ($($arg:tt)*) => {
        $crate::printf(::std::format_args!($($arg)*))
    };
}

/// Formats and renders color tags to stdout, followed by a newline.
#[macro_export]
macro_rules! cprintln {
    () => {
        $crate::printf(::std::format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::println(&[&::std::format_args!($($arg)*)])
    };
}

/// Formats and renders color tags to an `io::Write`.
#[macro_export]
macro_rules! cwrite {
    ($dst:expr, $($arg:tt)*) => {
        $crate::fprintf($dst, ::std::format_args!($($arg)*))
    };
}

/// Formats and renders color tags to an `io::Write`, followed by a newline.
#[macro_export]
macro_rules! cwriteln {
    ($dst:expr $(,)?) => {
        $crate::fprintf($dst, ::std::format_args!("\n"))
    };
    ($dst:expr, $($arg:tt)*) => {
        $crate::fprintln($dst, &[&::std::format_args!($($arg)*)])
    };
}
