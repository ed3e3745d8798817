//! The named tag registry.
//!
//! Maps short tag names (`info`, `err`, `red`, ...) to SGR parameter
//! strings. The table is built once on first use and never changes, so
//! lookups are safe from any thread.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Every built-in tag, in declaration order.
const TAG_CODES: &[(&str, &str)] = &[
    // Basic colors, plain and bold
    ("red", "0;31"),
    ("red1", "1;31"),
    ("redB", "1;31"),
    ("red_b", "1;31"),
    ("blue", "0;34"),
    ("blue1", "1;34"),
    ("blueB", "1;34"),
    ("blue_b", "1;34"),
    ("cyan", "0;36"),
    ("cyan1", "1;36"),
    ("cyanB", "1;36"),
    ("cyan_b", "1;36"),
    ("green", "0;32"),
    ("green1", "1;32"),
    ("greenB", "1;32"),
    ("green_b", "1;32"),
    ("black", "0;30"),
    ("white", "1;37"),
    ("default", "0;39"),
    ("normal", "0;39"),
    ("brown", "1;33"),
    ("yellow", "0;33"),
    ("ylw0", "0;33"),
    ("yellowB", "1;33"),
    ("ylw1", "1;33"),
    ("ylwB", "1;33"),
    ("magenta", "0;35"),
    ("mga", "0;35"),
    ("magentaB", "1;35"),
    ("mgb", "1;35"),
    ("mgaB", "1;35"),
    // Light / high intensity colors
    ("gray", "0;90"),
    ("darkGray", "0;90"),
    ("dark_gray", "0;90"),
    ("lightRed", "0;91"),
    ("light_red", "0;91"),
    ("hiRed", "0;91"),
    ("hi_red", "0;91"),
    ("lightGreen", "0;92"),
    ("light_green", "0;92"),
    ("hiGreen", "0;92"),
    ("hi_green", "0;92"),
    ("lightYellow", "0;93"),
    ("light_yellow", "0;93"),
    ("hiYellow", "0;93"),
    ("hi_yellow", "0;93"),
    ("hiYellowB", "1;93"),
    ("lightBlue", "0;94"),
    ("light_blue", "0;94"),
    ("hiBlue", "0;94"),
    ("hi_blue", "0;94"),
    ("lightMagenta", "0;95"),
    ("light_magenta", "0;95"),
    ("hiMagenta", "0;95"),
    ("hi_magenta", "0;95"),
    ("lightCyan", "0;96"),
    ("light_cyan", "0;96"),
    ("hiCyan", "0;96"),
    ("hi_cyan", "0;96"),
    ("lightWhite", "0;97;40"),
    ("light_white", "0;97;40"),
    // Text options
    ("bold", "1"),
    ("b", "1"),
    ("fuzzy", "2"),
    ("italic", "3"),
    ("i", "3"),
    ("underscore", "4"),
    ("us", "4"),
    ("blink", "5"),
    ("fb", "6"),
    ("reverse", "7"),
    ("st", "9"),
    // Alert styles
    ("suc", "1;32"),
    ("success", "1;32"),
    ("info", "0;32"),
    ("comment", "0;33"),
    ("note", "36;1"),
    ("notice", "36;4"),
    ("warn", "0;1;33"),
    ("warning", "0;30;43"),
    ("primary", "0;34"),
    ("danger", "1;31"),
    ("err", "97;41"),
    ("error", "97;41"),
];

static TAGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TAG_CODES.iter().copied().collect());

/// Returns the full registry, name to SGR code.
pub fn color_tags() -> &'static HashMap<&'static str, &'static str> {
    &TAGS
}

/// Returns true if `name` is a registered tag. Case-sensitive.
pub fn is_defined_tag(name: &str) -> bool {
    TAGS.contains_key(name)
}

/// Returns the SGR code for `name`, or an empty string if it is unknown.
pub fn tag_code(name: &str) -> &'static str {
    TAGS.get(name).copied().unwrap_or_default()
}
