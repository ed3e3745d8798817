//! Tokenizer for `<body>content</>` markup.

/// The closing delimiter shared by every tag.
pub const CLOSE_TAG: &str = "</>";

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Plain text content, including `<` that does not start a tag.
    Text(&'a str),
    /// Opening tag `<body>`, carrying the body.
    OpenTag(&'a str),
    /// The closing delimiter `</>`.
    CloseTag,
}

/// A token together with its byte range in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spanned<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub end: usize,
}

/// A closed or dangling piece of markup, resolved against its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Text(&'a str),
    /// An opening tag paired with the first `</>` that follows it.
    Tag {
        body: &'a str,
        content: &'a str,
        raw: &'a str,
        offset: usize,
    },
    /// An opening tag with no `</>` anywhere after it.
    Unclosed(&'a str),
    /// A `</>` with no opening tag before it.
    Orphan(&'a str),
}

/// Checks if a string is a valid tag name: `[A-Za-z0-9_-]+`.
pub fn is_valid_tag_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Checks if a string can appear between `<` and `>` as a tag body.
///
/// Bodies containing `=` are attribute bodies and may also hold `;`, `,`
/// and blanks. Anything else must be a plain tag name.
pub(crate) fn is_valid_tag_body(body: &str) -> bool {
    if body.contains('=') {
        body.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '=' | ',' | ';' | ' ' | '\t')
        })
    } else {
        is_valid_tag_name(body)
    }
}

pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Reads the token starting at a `<`, returning it with its length.
    fn tag_at(remaining: &'a str) -> (Token<'a>, usize) {
        if remaining.starts_with(CLOSE_TAG) {
            return (Token::CloseTag, CLOSE_TAG.len());
        }

        let rest = &remaining[1..];
        if let Some(stop) = rest.find(|c: char| c == '<' || c == '>') {
            let body = &rest[..stop];
            if rest[stop..].starts_with('>') && is_valid_tag_body(body) {
                return (Token::OpenTag(body), stop + 2);
            }
        }

        // Not a tag: the `<` is literal and scanning resumes right after it
        (Token::Text(&remaining[..1]), 1)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Spanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let remaining = &self.input[start..];
        let (token, len) = match remaining.find('<') {
            Some(0) => Self::tag_at(remaining),
            Some(lt) => (Token::Text(&remaining[..lt]), lt),
            None => (Token::Text(remaining), remaining.len()),
        };

        self.pos += len;
        Some(Spanned {
            token,
            start,
            end: self.pos,
        })
    }
}

/// Pairs every opening tag with the first `</>` after it.
///
/// Pairing is non-greedy and non-overlapping: once an opener claims a
/// closer, everything between them (including further openers) is content.
pub(crate) fn pieces(input: &str) -> Vec<Piece<'_>> {
    let tokens: Vec<Spanned<'_>> = Tokenizer::new(input).collect();

    // next_close[i] is the index of the first `</>` strictly after token i
    let mut next_close = vec![None; tokens.len()];
    let mut seen = None;
    for (idx, spanned) in tokens.iter().enumerate().rev() {
        next_close[idx] = seen;
        if spanned.token == Token::CloseTag {
            seen = Some(idx);
        }
    }

    let mut pieces = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let spanned = tokens[i];
        match spanned.token {
            Token::Text(text) => pieces.push(Piece::Text(text)),
            Token::CloseTag => pieces.push(Piece::Orphan(&input[spanned.start..spanned.end])),
            Token::OpenTag(body) => match next_close[i] {
                Some(close_idx) => {
                    let close = tokens[close_idx];
                    pieces.push(Piece::Tag {
                        body,
                        content: &input[spanned.end..close.start],
                        raw: &input[spanned.start..close.end],
                        offset: spanned.start,
                    });
                    i = close_idx + 1;
                    continue;
                }
                None => pieces.push(Piece::Unclosed(&input[spanned.start..spanned.end])),
            },
        }
        i += 1;
    }

    pieces
}
