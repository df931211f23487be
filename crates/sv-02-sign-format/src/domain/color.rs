//! Legacy colour codes.
//!
//! Configuration carries colours as `&c`; signs carry them as `§c`.

/// Marker the client renders as a formatting code.
pub const COLOR_CHAR: char = '\u{00A7}';

/// Portable marker used in configuration files.
pub const LEGACY_COLOR_CODE: char = '&';

/// `§` as it appears after a UTF-8 file was read as Latin-1.
pub const BUGGY_COLOR_CODE_SEQUENCE: &str = "\u{00C2}\u{00A7}";

const FORMAT_CODES: &str = "0123456789abcdefklmnorx";

/// Expand `&<code>` into `§<code>`.
///
/// Mis-decoded `Â§` sequences are first turned back into `&` so they expand
/// like any other code. An `&` not followed by a known code is kept as is.
#[must_use]
pub fn translate_color_codes(text: &str) -> String {
    let repaired = text.replace(BUGGY_COLOR_CODE_SEQUENCE, "&");

    let mut out = String::with_capacity(repaired.len());
    let mut chars = repaired.chars().peekable();
    while let Some(c) = chars.next() {
        if c == LEGACY_COLOR_CODE {
            if let Some(&code) = chars.peek() {
                let lower = code.to_ascii_lowercase();
                if FORMAT_CODES.contains(lower) {
                    out.push(COLOR_CHAR);
                    out.push(lower);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// `§c`, the colour used for rejection messages.
#[must_use]
pub fn red() -> String {
    format!("{COLOR_CHAR}c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_known_codes() {
        assert_eq!(translate_color_codes("&2Deposit"), "§2Deposit");
        assert_eq!(translate_color_codes("&lBold&r"), "§lBold§r");
    }

    #[test]
    fn test_codes_are_lowercased() {
        assert_eq!(translate_color_codes("&AHi"), "§aHi");
    }

    #[test]
    fn test_uppercase_code_inside_word_is_translated() {
        assert_eq!(translate_color_codes("R&D"), "R\u{00A7}d");
    }

    #[test]
    fn test_unknown_codes_and_trailing_marker_stay() {
        assert_eq!(translate_color_codes("R&Z"), "R&Z");
        assert_eq!(translate_color_codes("A & B"), "A & B");
        assert_eq!(translate_color_codes("end&"), "end&");
    }

    #[test]
    fn test_repairs_misdecoded_marker() {
        assert_eq!(translate_color_codes("\u{00C2}\u{00A7}4Withdraw"), "§4Withdraw");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(translate_color_codes("[SignVault]"), "[SignVault]");
    }
}
