//! Color token resolution.
//!
//! Maps a named color or a 6-hex-digit string (with optional `#` prefix) to
//! an RGBA value with alpha forced to fully opaque. The named table is a
//! process-scoped constant with no hidden mutable state.

use image::Rgba;

use crate::error::FramesheetError;

/// Named colors accepted by [`parse_color`], matched case-insensitively.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00]),
    ("lime", [0x00, 0xFF, 0x00]),
    ("blue", [0x00, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00]),
    ("cyan", [0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF]),
    ("silver", [0xC0, 0xC0, 0xC0]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("olive", [0x80, 0x80, 0x00]),
    ("green", [0x00, 0x80, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("teal", [0x00, 0x80, 0x80]),
    ("navy", [0x00, 0x00, 0x80]),
    ("darkgray", [0xA9, 0xA9, 0xA9]),
    ("darkgrey", [0xA9, 0xA9, 0xA9]),
    ("lightgray", [0xD3, 0xD3, 0xD3]),
    ("lightgrey", [0xD3, 0xD3, 0xD3]),
];

/// Resolve a color token to an opaque RGBA value.
///
/// Accepts a member of the fixed named-color table (case-insensitive) or a
/// 6-hex-digit string optionally prefixed with `#`. The alpha channel is
/// always 255.
///
/// # Errors
///
/// Returns [`FramesheetError::InvalidColor`] when the token is neither a
/// known name nor six valid hex digits.
///
/// # Example
///
/// ```
/// use image::Rgba;
///
/// assert_eq!(framesheet::parse_color("white")?, Rgba([255, 255, 255, 255]));
/// assert_eq!(framesheet::parse_color("#111111")?, Rgba([17, 17, 17, 255]));
/// assert!(framesheet::parse_color("zzzzzz").is_err());
/// # Ok::<(), framesheet::FramesheetError>(())
/// ```
pub fn parse_color(token: &str) -> Result<Rgba<u8>, FramesheetError> {
    let lowered = token.to_ascii_lowercase();

    if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lowered) {
        return Ok(Rgba([rgb[0], rgb[1], rgb[2], 0xFF]));
    }

    let hex = lowered.strip_prefix('#').unwrap_or(&lowered);
    if hex.len() != 6 {
        return Err(FramesheetError::InvalidColor(token.to_string()));
    }

    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| FramesheetError::InvalidColor(token.to_string()))?;

    Ok(Rgba([
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
        0xFF,
    ]))
}
