//! Unknown-tag reporting.
//!
//! At render time an unknown tag is passed through untouched, which makes a
//! typo in a tag name easy to miss. [`validate_tags`] walks the same pairing
//! the renderer uses and reports every closed tag that would not be styled.

use std::fmt;

use crate::attr::parse_code_from_attr;
use crate::scan::{pieces, Piece};
use crate::TagCodes;

/// Why a tag would be left unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTagKind {
    /// The tag name is not in the code lookup.
    UnknownName,
    /// The attribute body resolves to no SGR code at all.
    EmptyAttributes,
}

impl fmt::Display for UnknownTagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownTagKind::UnknownName => write!(f, "unknown tag"),
            UnknownTagKind::EmptyAttributes => write!(f, "empty attribute tag"),
        }
    }
}

/// A single tag that would not be styled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} <{tag}> at byte {offset}")]
pub struct UnknownTagError {
    /// The tag body as written between `<` and `>`.
    pub tag: String,
    /// Why the tag would not be styled.
    pub kind: UnknownTagKind,
    /// Byte offset of the opening `<` in the input.
    pub offset: usize,
}

/// Every unknown tag found in one input, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} tag(s) would not be styled: {}", .errors.len(), summary(.errors))]
pub struct UnknownTagErrors {
    /// The individual errors, in order of appearance.
    pub errors: Vec<UnknownTagError>,
}

impl UnknownTagErrors {
    /// Number of unknown tags found.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when no unknown tag was found.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors in order of appearance.
    pub fn iter(&self) -> std::slice::Iter<'_, UnknownTagError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a UnknownTagErrors {
    type Item = &'a UnknownTagError;
    type IntoIter = std::slice::Iter<'a, UnknownTagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn summary(errors: &[UnknownTagError]) -> String {
    errors
        .iter()
        .map(|e| format!("<{}>", e.tag))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every closed tag in `input` against `codes`.
///
/// Unclosed openers and orphan `</>` are not reported.
///
/// # Example
///
/// ```rust
/// use colortag_parser::validate_tags;
/// use std::collections::HashMap;
///
/// let codes = HashMap::from([("red", "0;31")]);
/// assert!(validate_tags("<red>ok</>", &codes).is_ok());
///
/// let errors = validate_tags("<rde>typo</>", &codes).unwrap_err();
/// assert_eq!(errors.errors[0].tag, "rde");
/// ```
pub fn validate_tags<C: TagCodes + ?Sized>(input: &str, codes: &C) -> Result<(), UnknownTagErrors> {
    let errors: Vec<UnknownTagError> = pieces(input)
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Tag { body, offset, .. } => {
                let kind = if body.contains('=') {
                    parse_code_from_attr(body)
                        .is_empty()
                        .then_some(UnknownTagKind::EmptyAttributes)
                } else {
                    codes.code(body).is_none().then_some(UnknownTagKind::UnknownName)
                };
                let kind = kind?;
                Some(UnknownTagError {
                    tag: body.to_string(),
                    kind,
                    offset,
                })
            }
            _ => None,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(UnknownTagErrors { errors })
    }
}
