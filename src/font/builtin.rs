//! Built-in font tables and icon glyphs.
//!
//! Tables are stored in the binary format [`super::Font`] parses: a `u16` LE
//! glyph count, `(codepoint, offset)` entries, then the glyph records.
//! The list keeps five slots so layout font ids stay stable across the
//! resolution variants; slot 0 doubles as the fallback font.

use super::Font;

/// List index of the general character set.
pub const FONT_CHARSET: usize = 0;
/// List index of the segment-style digit font.
pub const FONT_DIGITS: usize = 1;

/// Font list indexed by layout/protocol font ids. Index 0 is the fallback.
pub static FONTS: [Font; 5] = [
    Font::new(&CHARSET_5X7),
    Font::new(&SEGMENT_10X16),
    Font::new(&CHARSET_5X7),
    Font::new(&SEGMENT_10X16),
    Font::new(&CHARSET_5X7),
];

/// Radio-link indicator, drawn as a standalone glyph record.
pub static ICON_LINK: [u8; 20] = [
    0x08, 0x08, 0x0F, 0x00, 0x00, //
    0x10, 0x18, 0x14, 0x92, 0x51, 0x32, 0x14, 0x18, 0x14, 0x32, 0x51, 0x92, 0x14, 0x18, 0x10,
];

/// Printable ASCII, 5x7 cells on a 6-pixel advance.
pub static CHARSET_5X7: [u8; 1522] = [
    0x5F, 0x00, 0x20, 0x00, 0x7E, 0x01, 0x21, 0x00, 0x8A, 0x01, 0x22, 0x00,
    0x96, 0x01, 0x23, 0x00, 0xA2, 0x01, 0x24, 0x00, 0xAE, 0x01, 0x25, 0x00,
    0xBA, 0x01, 0x26, 0x00, 0xC6, 0x01, 0x27, 0x00, 0xD2, 0x01, 0x28, 0x00,
    0xDE, 0x01, 0x29, 0x00, 0xEA, 0x01, 0x2A, 0x00, 0xF6, 0x01, 0x2B, 0x00,
    0x02, 0x02, 0x2C, 0x00, 0x0E, 0x02, 0x2D, 0x00, 0x1A, 0x02, 0x2E, 0x00,
    0x26, 0x02, 0x2F, 0x00, 0x32, 0x02, 0x30, 0x00, 0x3E, 0x02, 0x31, 0x00,
    0x4A, 0x02, 0x32, 0x00, 0x56, 0x02, 0x33, 0x00, 0x62, 0x02, 0x34, 0x00,
    0x6E, 0x02, 0x35, 0x00, 0x7A, 0x02, 0x36, 0x00, 0x86, 0x02, 0x37, 0x00,
    0x92, 0x02, 0x38, 0x00, 0x9E, 0x02, 0x39, 0x00, 0xAA, 0x02, 0x3A, 0x00,
    0xB6, 0x02, 0x3B, 0x00, 0xC2, 0x02, 0x3C, 0x00, 0xCE, 0x02, 0x3D, 0x00,
    0xDA, 0x02, 0x3E, 0x00, 0xE6, 0x02, 0x3F, 0x00, 0xF2, 0x02, 0x40, 0x00,
    0xFE, 0x02, 0x41, 0x00, 0x0A, 0x03, 0x42, 0x00, 0x16, 0x03, 0x43, 0x00,
    0x22, 0x03, 0x44, 0x00, 0x2E, 0x03, 0x45, 0x00, 0x3A, 0x03, 0x46, 0x00,
    0x46, 0x03, 0x47, 0x00, 0x52, 0x03, 0x48, 0x00, 0x5E, 0x03, 0x49, 0x00,
    0x6A, 0x03, 0x4A, 0x00, 0x76, 0x03, 0x4B, 0x00, 0x82, 0x03, 0x4C, 0x00,
    0x8E, 0x03, 0x4D, 0x00, 0x9A, 0x03, 0x4E, 0x00, 0xA6, 0x03, 0x4F, 0x00,
    0xB2, 0x03, 0x50, 0x00, 0xBE, 0x03, 0x51, 0x00, 0xCA, 0x03, 0x52, 0x00,
    0xD6, 0x03, 0x53, 0x00, 0xE2, 0x03, 0x54, 0x00, 0xEE, 0x03, 0x55, 0x00,
    0xFA, 0x03, 0x56, 0x00, 0x06, 0x04, 0x57, 0x00, 0x12, 0x04, 0x58, 0x00,
    0x1E, 0x04, 0x59, 0x00, 0x2A, 0x04, 0x5A, 0x00, 0x36, 0x04, 0x5B, 0x00,
    0x42, 0x04, 0x5C, 0x00, 0x4E, 0x04, 0x5D, 0x00, 0x5A, 0x04, 0x5E, 0x00,
    0x66, 0x04, 0x5F, 0x00, 0x72, 0x04, 0x60, 0x00, 0x7E, 0x04, 0x61, 0x00,
    0x8A, 0x04, 0x62, 0x00, 0x96, 0x04, 0x63, 0x00, 0xA2, 0x04, 0x64, 0x00,
    0xAE, 0x04, 0x65, 0x00, 0xBA, 0x04, 0x66, 0x00, 0xC6, 0x04, 0x67, 0x00,
    0xD2, 0x04, 0x68, 0x00, 0xDE, 0x04, 0x69, 0x00, 0xEA, 0x04, 0x6A, 0x00,
    0xF6, 0x04, 0x6B, 0x00, 0x02, 0x05, 0x6C, 0x00, 0x0E, 0x05, 0x6D, 0x00,
    0x1A, 0x05, 0x6E, 0x00, 0x26, 0x05, 0x6F, 0x00, 0x32, 0x05, 0x70, 0x00,
    0x3E, 0x05, 0x71, 0x00, 0x4A, 0x05, 0x72, 0x00, 0x56, 0x05, 0x73, 0x00,
    0x62, 0x05, 0x74, 0x00, 0x6E, 0x05, 0x75, 0x00, 0x7A, 0x05, 0x76, 0x00,
    0x86, 0x05, 0x77, 0x00, 0x92, 0x05, 0x78, 0x00, 0x9E, 0x05, 0x79, 0x00,
    0xAA, 0x05, 0x7A, 0x00, 0xB6, 0x05, 0x7B, 0x00, 0xC2, 0x05, 0x7C, 0x00,
    0xCE, 0x05, 0x7D, 0x00, 0xDA, 0x05, 0x7E, 0x00, 0xE6, 0x05, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x50, 0x50, 0xF8, 0x50, 0xF8, 0x50, 0x50, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x78, 0xA0, 0x70, 0x28, 0xF0, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xC0, 0xC8, 0x10, 0x20, 0x40, 0x98, 0x18, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x60, 0x90, 0xA0, 0x40, 0xA8, 0x90, 0x68, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x60, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x10, 0x20, 0x40, 0x40, 0x40, 0x20, 0x10, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x40, 0x20, 0x10, 0x10, 0x10, 0x20, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x20, 0xA8, 0x70, 0xA8, 0x20, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x20, 0x20, 0xF8, 0x20, 0x20, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x20, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x60, 0x60, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x60, 0x20, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x10, 0x20, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x08, 0x10, 0x20, 0x00, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x08, 0x68, 0xA8, 0xA8, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xE0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xE0, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x80, 0xB8, 0x88, 0x88, 0x78, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x78, 0x80, 0x80, 0x70, 0x08, 0x08, 0xF0, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xD8, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0xF8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x40, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x70, 0x08, 0x78, 0x88, 0x78, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0xF0, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x70, 0x80, 0x80, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x08, 0x08, 0x68, 0x98, 0x88, 0x88, 0x78, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x70, 0x88, 0xF8, 0x80, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x30, 0x48, 0x40, 0xE0, 0x40, 0x40, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x78, 0x88, 0x78, 0x08, 0x30, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x00, 0x60, 0x20, 0x20, 0x20, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x90, 0x60, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x80, 0x80, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xD0, 0xA8, 0xA8, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x88, 0xF0, 0x80, 0x80, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x68, 0x98, 0x78, 0x08, 0x08, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xB0, 0xC8, 0x80, 0x80, 0x80, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x70, 0x80, 0x70, 0x08, 0xF0, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x40, 0x40, 0xE0, 0x40, 0x40, 0x48, 0x30, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0xA8, 0xA8, 0x50, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x70, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x10, 0x20, 0x40, 0xF8, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x10, 0x20, 0x20, 0x40, 0x20, 0x20, 0x10, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x40, 0x20, 0x20, 0x10, 0x20, 0x20, 0x40, 0x06, 0x05,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x40, 0xA8, 0x10, 0x00, 0x00,
];

/// Segment-style clock digits, 10x16, plus space, '-', '.', and ':'.
pub static SEGMENT_10X16: [u8; 512] = [
    0x0E, 0x00, 0x20, 0x00, 0x3A, 0x00, 0x2D, 0x00, 0x3F, 0x00, 0x2E, 0x00,
    0x64, 0x00, 0x30, 0x00, 0x79, 0x00, 0x31, 0x00, 0x9E, 0x00, 0x32, 0x00,
    0xC3, 0x00, 0x33, 0x00, 0xE8, 0x00, 0x34, 0x00, 0x0D, 0x01, 0x35, 0x00,
    0x32, 0x01, 0x36, 0x00, 0x57, 0x01, 0x37, 0x00, 0x7C, 0x01, 0x38, 0x00,
    0xA1, 0x01, 0x39, 0x00, 0xC6, 0x01, 0x3A, 0x00, 0xEB, 0x01, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x80,
    0x7F, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x06, 0x04, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60,
    0x60, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x7F, 0x80, 0xFF, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0,
    0x7F, 0x80, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0x00, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x7F, 0x80, 0x7F, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x7F, 0xC0,
    0xFF, 0x80, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xFF, 0x80, 0x7F, 0x80, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x7F, 0x80, 0x7F,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x7F,
    0xC0, 0x7F, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x7F, 0xC0, 0x7F, 0x80, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0xC0, 0x7F, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x0C, 0x0A, 0x10, 0x00, 0x00, 0x7F,
    0x80, 0xFF, 0x80, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0xFF, 0x80, 0x7F, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x7F, 0xC0, 0x7F, 0x80, 0x0C, 0x0A, 0x10, 0x00, 0x00,
    0x7F, 0x80, 0xFF, 0x80, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xFF, 0x80, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0x7F, 0x80, 0x0C, 0x0A, 0x10, 0x00,
    0x00, 0x7F, 0x80, 0x7F, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x0C, 0x0A, 0x10,
    0x00, 0x00, 0x7F, 0x80, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0x7F, 0x80, 0x0C, 0x0A,
    0x10, 0x00, 0x00, 0x7F, 0x80, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0x7F, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x7F, 0xC0, 0x7F, 0x80, 0x08,
    0x06, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00,
    0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
];
