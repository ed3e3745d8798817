//! Angle-bracket color tag parser for terminal styling.
//!
//! This crate turns `<tag>content</>` markup into ANSI SGR escape sequences.
//! A tag body is either a name resolved through a [`TagCodes`] lookup, or an
//! attribute body such as `fg=red;bg=black;op=bold` translated by
//! [`parse_code_from_attr`]. Every tag closes with the same literal `</>`.
//!
//! # Example
//!
//! ```rust
//! use colortag_parser::{TagParser, TagTransform};
//! use std::collections::HashMap;
//!
//! let codes = HashMap::from([("red", "0;31"), ("info", "0;32")]);
//!
//! // Apply ANSI codes
//! let parser = TagParser::new(&codes, TagTransform::Apply);
//! assert_eq!(parser.parse("<red>hello</>"), "\x1b[0;31mhello\x1b[0m");
//!
//! // Drop known tags, keep content (color disabled)
//! let parser = TagParser::new(&codes, TagTransform::Remove);
//! assert_eq!(parser.parse("<red>hello</> <d>"), "hello <d>");
//!
//! // Remove every piece of tag syntax
//! let parser = TagParser::new(&codes, TagTransform::Strip);
//! assert_eq!(parser.parse("<red>hello</> <d>"), "hello ");
//! ```
//!
//! # Grammar
//!
//! ```text
//! Tag      := '<' TagBody '>' Content '</>'
//! TagBody  := Name | AttrBody
//! Name     := [A-Za-z0-9_-]+
//! AttrBody := Key '=' Value ( ';' Key '=' Value )* ';'?
//! ```
//!
//! Content runs up to the first `</>` and may span lines. Tags do not nest:
//! an opener inside content stays literal, and the outer tag closes at the
//! first `</>`.

mod attr;
mod scan;
pub mod sgr;
mod validate;

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

pub use attr::parse_code_from_attr;
pub use scan::{is_valid_tag_name, CLOSE_TAG};
pub use validate::{validate_tags, UnknownTagError, UnknownTagErrors, UnknownTagKind};

use scan::{pieces, Piece, Token, Tokenizer};

/// How to transform matched tags in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Wrap the content of every resolvable tag in its SGR sequence.
    /// Used when color output is enabled.
    Apply,

    /// Replace every resolvable tag by its bare content.
    /// Used when color output is disabled.
    Remove,

    /// Remove every opening tag and every `</>`, known or not, closed or not.
    /// Used to produce plain text regardless of the registry.
    Strip,
}

/// Lookup from tag name to SGR parameter string (e.g. `"0;31"`).
pub trait TagCodes {
    /// Returns the code for `name`, or `None` when the name is unknown.
    fn code(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> TagCodes for HashMap<String, String, S> {
    fn code(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<'k, S: BuildHasher> TagCodes for HashMap<&'k str, &'k str, S> {
    fn code(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl<'k> TagCodes for BTreeMap<&'k str, &'k str> {
    fn code(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Wraps `content` in `ESC[<code>m ... ESC[0m`.
///
/// Returns the content unchanged when `code` is empty.
pub fn render_code(code: &str, content: &str) -> String {
    let mut output = String::new();
    push_rendered(&mut output, code, content);
    output
}

fn push_rendered(output: &mut String, code: &str, content: &str) {
    if code.is_empty() {
        output.push_str(content);
        return;
    }
    output.reserve(code.len() + content.len() + 3 + sgr::RESET.len());
    output.push_str("\x1b[");
    output.push_str(code);
    output.push('m');
    output.push_str(content);
    output.push_str(sgr::RESET);
}

/// A color tag parser bound to a code lookup and a transform mode.
///
/// The parser processes `<tag>content</>` patterns and transforms them
/// according to the configured [`TagTransform`].
#[derive(Debug)]
pub struct TagParser<'c, C: TagCodes + ?Sized> {
    codes: &'c C,
    transform: TagTransform,
}

impl<C: TagCodes + ?Sized> Clone for TagParser<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TagCodes + ?Sized> Copy for TagParser<'_, C> {}

impl<'c, C: TagCodes + ?Sized> TagParser<'c, C> {
    /// Creates a new parser with the given code lookup and transform mode.
    pub fn new(codes: &'c C, transform: TagTransform) -> Self {
        Self { codes, transform }
    }

    /// Returns the transform mode this parser applies.
    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    /// Parses the input string and transforms tags according to the configured mode.
    ///
    /// In `Apply` and `Remove` mode a tag whose name is unknown is emitted
    /// exactly as written, as are unclosed openers and orphan `</>`.
    pub fn parse(&self, input: &str) -> String {
        if self.transform == TagTransform::Strip {
            return Self::strip(input);
        }

        let mut output = String::with_capacity(input.len());
        for piece in pieces(input) {
            match piece {
                Piece::Text(text) | Piece::Unclosed(text) | Piece::Orphan(text) => {
                    output.push_str(text);
                }
                Piece::Tag {
                    body, content, raw, ..
                } => match self.resolve(body) {
                    Some(code) if self.transform == TagTransform::Apply => {
                        push_rendered(&mut output, &code, content);
                    }
                    Some(_) => output.push_str(content),
                    None => output.push_str(raw),
                },
            }
        }
        output
    }

    /// Resolves a tag body to its SGR code.
    ///
    /// Attribute bodies always resolve, possibly to an empty code. Names
    /// resolve only when the lookup knows them.
    pub fn resolve(&self, body: &str) -> Option<Cow<'c, str>> {
        if body.contains('=') {
            Some(Cow::Owned(parse_code_from_attr(body)))
        } else {
            self.codes.code(body).map(Cow::Borrowed)
        }
    }

    /// Drops tag tokens until none are left.
    ///
    /// A single pass can join literal pieces into new tag syntax
    /// (`<</>red>` becomes `<red>`), so passes repeat until nothing is removed.
    fn strip(input: &str) -> String {
        let mut current = input.to_string();
        loop {
            let mut removed = false;
            let next: String = Tokenizer::new(&current)
                .filter_map(|spanned| match spanned.token {
                    Token::Text(text) => Some(text),
                    Token::OpenTag(_) | Token::CloseTag => {
                        removed = true;
                        None
                    }
                })
                .collect();
            if !removed {
                return next;
            }
            current = next;
        }
    }
}
