//! Binary bitmap-font engine with UTF-8 text layout.
//!
//! A font table is a read-only byte blob: a `u16` LE glyph count, then
//! `(u16 codepoint, u16 offset)` entries in insertion order, with offsets
//! relative to the table base. A glyph record is
//! `[advance, width, height, origin_x: i8, origin_y: i8]` followed by
//! row-packed bits, MSB first, `ceil(width/8)` bytes per row.

pub mod builtin;

use inkplane::{Canvas, Color};

/// Fallback advance, in scaled units, that measurement charges for a
/// codepoint with no glyph so it never stalls on missing glyphs.
const MISSING_GLYPH_ADVANCE: i32 = 8;

/// Reference codepoint whose glyph height defines the line height.
const LINE_HEIGHT_REF: u16 = b'0' as u16;

/// A parsed glyph record view.
#[derive(Clone, Copy, Debug)]
pub struct Glyph<'a> {
    pub advance: u8,
    pub width: u8,
    pub height: u8,
    pub origin_x: i8,
    pub origin_y: i8,
    rows: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Parses a glyph record at the start of `data`.
    ///
    /// Returns `None` when the record header or row data is truncated.
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        let &[advance, width, height, origin_x, origin_y, ref rest @ ..] = data else {
            return None;
        };

        let row_bytes = (width as usize).div_ceil(8);
        let rows = rest.get(..row_bytes * height as usize)?;

        Some(Self {
            advance,
            width,
            height,
            origin_x: origin_x as i8,
            origin_y: origin_y as i8,
            rows,
        })
    }

    /// Whether the bitmap bit at `(col, row)` is set.
    fn bit(&self, col: u8, row: u8) -> bool {
        let row_bytes = (self.width as usize).div_ceil(8);
        let byte = self.rows[row as usize * row_bytes + col as usize / 8];
        byte & (0x80 >> (col % 8)) != 0
    }
}

/// One immutable font table.
#[derive(Clone, Copy)]
pub struct Font {
    table: &'static [u8],
}

impl Font {
    pub const fn new(table: &'static [u8]) -> Self {
        Self { table }
    }

    /// Number of glyph entries in the table.
    pub fn glyph_count(&self) -> usize {
        match self.table {
            [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]) as usize,
            _ => 0,
        }
    }

    /// Linear-scans the entry list for `codepoint`.
    pub fn glyph(&self, codepoint: u16) -> Option<Glyph<'static>> {
        for i in 0..self.glyph_count() {
            let entry = self.table.get(2 + i * 4..2 + i * 4 + 4)?;
            if u16::from_le_bytes([entry[0], entry[1]]) != codepoint {
                continue;
            }

            let offset = u16::from_le_bytes([entry[2], entry[3]]) as usize;
            return Glyph::parse(self.table.get(offset..)?);
        }

        None
    }
}

/// Active rendering state: a font list, the current font, and a scale.
///
/// List index 0 is the designated fallback font. Lookup is an explicit
/// two-step search: the current font, then the fallback, then "not found".
pub struct FontSet {
    fonts: &'static [Font],
    current: usize,
    scale: i32,
}

impl FontSet {
    pub const fn new(fonts: &'static [Font]) -> Self {
        Self {
            fonts,
            current: 0,
            scale: 1,
        }
    }

    /// Selects the current font. Out-of-range ids keep the selection.
    pub fn select(&mut self, id: usize) -> bool {
        if id >= self.fonts.len() {
            return false;
        }
        self.current = id;
        true
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Sets the glyph scale factor, clamped to >= 1.
    pub fn set_scale(&mut self, scale: i32) {
        self.scale = scale.max(1);
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Two-step glyph lookup: current font, then the fallback font.
    pub fn find(&self, codepoint: u16) -> Option<Glyph<'static>> {
        let current = self.fonts.get(self.current)?;
        if let Some(glyph) = current.glyph(codepoint) {
            return Some(glyph);
        }

        if self.current != 0 {
            return self.fonts.first()?.glyph(codepoint);
        }

        None
    }

    /// Line height in pixels: the reference glyph's height, scaled.
    pub fn line_height(&self) -> i32 {
        self.find(LINE_HEIGHT_REF)
            .map_or(0, |g| g.height as i32 * self.scale)
    }

    /// Draws one glyph and returns its scaled advance, or `None` when the
    /// codepoint has no glyph in the current or fallback font.
    pub fn draw_glyph(&self, canvas: &mut Canvas, x: i32, y: i32, codepoint: u16, color: Color) -> Option<i32> {
        let glyph = self.find(codepoint)?;
        Some(draw_glyph_record(canvas, x, y, &glyph, self.scale, color))
    }

    /// Draws UTF-8 text from `(x, y)`, honoring `'\n'` line breaks.
    ///
    /// A codepoint with no glyph silently ends the string.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
        self.draw_text_raw(canvas, x, y, text.as_bytes(), color);
    }

    /// [`Self::draw_text`] over raw bytes, as delivered by the remote
    /// drawing protocol. Decoding stops at a NUL byte.
    pub fn draw_text_raw(&self, canvas: &mut Canvas, x: i32, y: i32, bytes: &[u8], color: Color) {
        let line_start = x;
        let line_height = self.line_height();
        let (mut x, mut y) = (x, y);

        for codepoint in Codepoints::new(bytes) {
            if codepoint == u16::from(b'\n') {
                y += line_height;
                x = line_start;
                continue;
            }

            match self.draw_glyph(canvas, x, y, codepoint, color) {
                Some(advance) if advance > 0 => x += advance,
                _ => return,
            }
        }
    }

    /// Measures multi-line text: `(max line width, line count * line height)`.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        self.measure_raw(text.as_bytes())
    }

    pub fn measure_raw(&self, bytes: &[u8]) -> (i32, i32) {
        let line_height = self.line_height();
        let mut current = 0;
        let mut max_width = 0;
        let mut lines = 1;

        for codepoint in Codepoints::new(bytes) {
            if codepoint == u16::from(b'\n') {
                max_width = max_width.max(current);
                current = 0;
                lines += 1;
                continue;
            }

            let advance = self
                .find(codepoint)
                .map_or(0, |g| g.advance as i32 * self.scale);
            current += if advance <= 0 {
                MISSING_GLYPH_ADVANCE * self.scale
            } else {
                advance
            };
        }

        (max_width.max(current), lines * line_height)
    }

    /// Draws text over a padded background box in the complementary color.
    pub fn draw_text_filled(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
        self.draw_text_filled_raw(canvas, x, y, text.as_bytes(), color);
    }

    pub fn draw_text_filled_raw(&self, canvas: &mut Canvas, x: i32, y: i32, bytes: &[u8], color: Color) {
        let (width, height) = self.measure_raw(bytes);

        let pad_x = 4 * self.scale;
        let pad_y = 8 * self.scale;
        canvas.fill_rect(
            x - pad_x / 2,
            y,
            x + width + pad_x,
            y + height + pad_y,
            color.complement(),
        );

        self.draw_text_raw(canvas, x, y, bytes, color);
    }
}

/// Draws a standalone glyph record (icon glyphs included) and returns the
/// scaled advance.
pub fn draw_glyph_record(canvas: &mut Canvas, x: i32, y: i32, glyph: &Glyph<'_>, scale: i32, color: Color) -> i32 {
    let scale = scale.max(1);
    let x = x + glyph.origin_x as i32 * scale;
    let y = y + glyph.origin_y as i32 * scale;

    for row in 0..glyph.height {
        for col in 0..glyph.width {
            if !glyph.bit(col, row) {
                continue;
            }

            let px = x + col as i32 * scale;
            let py = y + row as i32 * scale;
            canvas.fill_rect(px, py, px + scale - 1, py + scale - 1, color);
        }
    }

    glyph.advance as i32 * scale
}

/// UTF-8 codepoint decoder over raw bytes.
///
/// Supports 1-, 2-, and 3-byte sequences (no astral planes), stops at a NUL
/// byte or truncated sequence, and masks continuation bits without
/// validating malformed leading bytes.
struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Codepoints<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let first = *self.bytes.get(self.pos)?;
        if first == 0 {
            return None;
        }

        if first < 0x80 {
            self.pos += 1;
            return Some(u16::from(first));
        }

        if first < 0xE0 {
            let second = *self.bytes.get(self.pos + 1)?;
            self.pos += 2;
            return Some((u16::from(first & 0x1F) << 6) | u16::from(second & 0x3F));
        }

        let second = *self.bytes.get(self.pos + 1)?;
        let third = *self.bytes.get(self.pos + 2)?;
        self.pos += 3;
        Some(
            (u16::from(first & 0x0F) << 12)
                | (u16::from(second & 0x3F) << 6)
                | u16::from(third & 0x3F),
        )
    }
}
