//! Color parsing and terminal color conversion for palette swatches.

/// Parses a `#rrggbb` hex color into an RGB triplet.
///
/// The leading `#` is optional. Returns `None` for anything that is not
/// six hex digits.
///
/// # Example
///
/// ```rust
/// use accentuate::parse_hex;
///
/// assert_eq!(parse_hex("#ff6f3c"), Some((255, 111, 60)));
/// assert_eq!(parse_hex("ececec"), Some((236, 236, 236)));
/// assert_eq!(parse_hex("#fff"), None);
/// ```
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grayscale values map onto the 24-step gray ramp; everything else maps
/// onto the 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use accentuate::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Parses a hex color and converts it to an ANSI 256-color index.
///
/// Returns `None` if the hex string is malformed.
pub fn hex_to_ansi256(hex: &str) -> Option<u8> {
    parse_hex(hex).map(rgb_to_ansi256)
}

/// Pads a string with trailing spaces to the given display width.
///
/// Uses Unicode width calculations so CJK and other wide characters line
/// up. Strings already at or past `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + width - current);
    result.push_str(s);
    for _ in current..width {
        result.push(' ');
    }
    result
}
