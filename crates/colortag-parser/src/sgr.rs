//! SGR parameter tables for attribute tag bodies.
//!
//! Names are case-sensitive and follow the camelCase spelling used in tag
//! bodies (`lightRed`, `fastBlink`). Each lookup returns the numeric SGR
//! parameter, or `None` for names outside the table.

/// Terminates every rendered span.
pub const RESET: &str = "\x1b[0m";

/// Looks up a foreground color name: `30..=37`, `39`, and `90..=97`.
pub fn fg_code(name: &str) -> Option<u8> {
    let code = match name {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        "default" => 39,
        "darkGray" | "gray" => 90,
        "lightRed" => 91,
        "lightGreen" => 92,
        "lightYellow" => 93,
        "lightBlue" => 94,
        "lightMagenta" => 95,
        "lightCyan" => 96,
        "lightWhite" => 97,
        _ => return None,
    };
    Some(code)
}

/// Looks up a background color name: `40..=47`, `49`, and `100..=106`.
///
/// The light variants start at `lightRed = 100`, so `bg=lightRed` renders
/// as `100` rather than `101`. Existing markup depends on that numbering.
pub fn bg_code(name: &str) -> Option<u8> {
    let code = match name {
        "black" => 40,
        "red" => 41,
        "green" => 42,
        "yellow" => 43,
        "blue" => 44,
        "magenta" => 45,
        "cyan" => 46,
        "white" => 47,
        "default" => 49,
        "lightRed" => 100,
        "lightGreen" => 101,
        "lightYellow" => 102,
        "lightBlue" => 103,
        "lightMagenta" => 104,
        "lightCyan" => 105,
        "lightWhite" => 106,
        _ => return None,
    };
    Some(code)
}

/// Looks up a text operation name (`bold`, `underscore`, ...).
pub fn op_code(name: &str) -> Option<u8> {
    let code = match name {
        "reset" => 0,
        "bold" => 1,
        "fuzzy" => 2,
        "italic" => 3,
        "underscore" => 4,
        "blink" => 5,
        "fastBlink" => 6,
        "reverse" => 7,
        "concealed" => 8,
        "strikethrough" => 9,
        _ => return None,
    };
    Some(code)
}
