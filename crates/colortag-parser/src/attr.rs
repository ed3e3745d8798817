//! Attribute tag bodies: `fg=red;bg=black;op=bold,blink`.

use crate::sgr::{bg_code, fg_code, op_code};

/// Converts an attribute body into an SGR parameter string.
///
/// Segments are separated by `;` and hold a single `key=value` pair.
/// Recognized keys are `fg`, `bg` and `op`; `op` takes a comma-separated
/// list. Whitespace around separators is ignored. Unknown keys, unknown
/// values and empty segments are skipped, so the result is empty when
/// nothing is recognized.
///
/// # Example
///
/// ```rust
/// use colortag_parser::parse_code_from_attr;
///
/// assert_eq!(parse_code_from_attr("fg=lightRed;bg=lightRed;op=bold,blink"), "91;100;1;5");
/// assert_eq!(parse_code_from_attr("fg = lightRed"), "91");
/// assert_eq!(parse_code_from_attr("="), "");
/// ```
pub fn parse_code_from_attr(attr: &str) -> String {
    let mut codes: Vec<u8> = Vec::new();

    for segment in attr.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key {
            "fg" => codes.extend(fg_code(value)),
            "bg" => codes.extend(bg_code(value)),
            "op" => codes.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|op| !op.is_empty())
                    .filter_map(op_code),
            ),
            _ => {}
        }
    }

    codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
