//! Integer drawing primitives, all built on [`Canvas::set_pixel`].

use crate::{Canvas, Color};

/// QR blits are fixed at 31x31 modules, 4 bytes per row, MSB first.
pub const QR_MODULES: usize = 31;
/// Bytes per QR source row.
pub const QR_ROW_BYTES: usize = 4;

impl Canvas {
    /// Horizontal line over the inclusive `x1..=x2` range.
    pub fn hline(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        for x in x1..=x2 {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical line over the inclusive `y1..=y2` range.
    pub fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Color) {
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        for y in y1..=y2 {
            self.set_pixel(x, y, color);
        }
    }

    /// Bresenham line between two points, endpoints included.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.set_pixel(x, y, color);
            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline with inclusive corners.
    pub fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.hline(y1, x1, x2, color);
        self.hline(y2, x1, x2, color);
        self.vline(x1, y1, y2, color);
        self.vline(x2, y1, y2, color);
    }

    /// Filled rectangle with inclusive corners.
    ///
    /// Scans the shorter axis and issues lines of the perpendicular extent.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if x2 - x1 > y2 - y1 {
            for y in y1..=y2 {
                self.hline(y, x1, x2, color);
            }
        } else {
            for x in x1..=x2 {
                self.vline(x, y1, y2, color);
            }
        }
    }

    /// Triangle outline between three vertices.
    pub fn triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) {
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x3, y3, color);
        self.line(x3, y3, x1, y1, color);
    }

    /// Filled triangle via a scanline walk with 16-bit fixed-point edge
    /// slopes. Zero-height triangles are a no-op.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) {
        // Sort vertices so y1 <= y2 <= y3.
        let (mut x1, mut y1, mut x2, mut y2, mut x3, mut y3) = (x1, y1, x2, y2, x3, y3);
        if y1 > y2 {
            core::mem::swap(&mut y1, &mut y2);
            core::mem::swap(&mut x1, &mut x2);
        }
        if y1 > y3 {
            core::mem::swap(&mut y1, &mut y3);
            core::mem::swap(&mut x1, &mut x3);
        }
        if y2 > y3 {
            core::mem::swap(&mut y2, &mut y3);
            core::mem::swap(&mut x2, &mut x3);
        }

        if y1 == y3 {
            return;
        }

        let dx13 = ((x3 - x1) << 16) / (y3 - y1);
        let dx12 = if y2 != y1 {
            ((x2 - x1) << 16) / (y2 - y1)
        } else {
            0
        };
        let dx23 = if y3 != y2 {
            ((x3 - x2) << 16) / (y3 - y2)
        } else {
            0
        };

        let mut curx1 = x1 << 16;
        let mut curx2 = x1 << 16;

        // Flat-bottom span: y1 up to (not including) y2.
        for y in y1..y2 {
            self.hline(y, curx1 >> 16, curx2 >> 16, color);
            curx1 += dx13;
            curx2 += dx12;
        }

        // Flat-top span continues on the second edge.
        curx2 = x2 << 16;
        for y in y2..=y3 {
            self.hline(y, curx1 >> 16, curx2 >> 16, color);
            curx1 += dx13;
            curx2 += dx23;
        }
    }

    /// Blits a 1bpp bitmap with `ceil(width/8)` bytes per row, MSB first.
    ///
    /// Set bits draw black, clear bits draw white. Returns `false` when
    /// `data` is shorter than the bitmap needs.
    pub fn blit_bitmap(&mut self, x: i32, y: i32, width: u32, height: u32, data: &[u8]) -> bool {
        let row_bytes = (width as usize).div_ceil(8);
        if data.len() < row_bytes * height as usize {
            return false;
        }

        for row in 0..height as i32 {
            let line = &data[row as usize * row_bytes..];
            for col in 0..width as i32 {
                let bit = (line[col as usize / 8] >> (7 - (col % 8))) & 1;
                let color = if bit == 0 { Color::White } else { Color::Black };
                self.set_pixel(x + col, y + row, color);
            }
        }

        true
    }

    /// Blits a fixed 31x31-module code, each module as a
    /// `module_size` x `module_size` filled box.
    pub fn blit_qr(
        &mut self,
        x: i32,
        y: i32,
        module_size: i32,
        modules: &[[u8; QR_ROW_BYTES]; QR_MODULES],
    ) {
        if module_size < 1 {
            return;
        }

        for (row, line) in modules.iter().enumerate() {
            for col in 0..QR_MODULES {
                let bit = (line[col / 8] >> (7 - (col % 8))) & 1;
                let color = if bit == 0 { Color::White } else { Color::Black };

                let x1 = x + col as i32 * module_size;
                let y1 = y + row as i32 * module_size;
                self.fill_rect(x1, y1, x1 + module_size - 1, y1 + module_size - 1, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(64, 64, false).unwrap()
    }

    fn black_count(c: &Canvas) -> usize {
        let mut n = 0;
        for y in 0..c.logical_height() as i32 {
            for x in 0..c.logical_width() as i32 {
                if c.pixel(x, y) == Some(false) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn hline_and_vline_normalize_endpoints() {
        let mut a = canvas();
        let mut b = canvas();

        a.hline(3, 10, 2, Color::Black);
        b.hline(3, 2, 10, Color::Black);
        assert_eq!(a, b);

        a.vline(3, 10, 2, Color::Black);
        b.vline(3, 2, 10, Color::Black);
        assert_eq!(a, b);
    }

    #[test]
    fn line_is_symmetric_between_endpoints() {
        let mut a = canvas();
        let mut b = canvas();

        a.line(1, 2, 20, 13, Color::Black);
        b.line(20, 13, 1, 2, Color::Black);

        assert_eq!(a, b);
    }

    #[test]
    fn rect_outline_keeps_interior_untouched() {
        let mut c = canvas();
        c.rect(2, 2, 10, 8, Color::Black);

        assert_eq!(c.pixel(2, 2), Some(false));
        assert_eq!(c.pixel(10, 8), Some(false));
        assert_eq!(c.pixel(6, 5), Some(true));
    }

    #[test]
    fn fill_rect_covers_every_pixel_inclusive() {
        let mut c = canvas();
        c.fill_rect(3, 4, 9, 6, Color::Black);

        for y in 4..=6 {
            for x in 3..=9 {
                assert_eq!(c.pixel(x, y), Some(false), "({x},{y})");
            }
        }
        assert_eq!(black_count(&c), 7 * 3);
    }

    #[test]
    fn degenerate_triangle_fill_is_a_no_op() {
        let mut c = canvas();
        c.fill_triangle(5, 10, 15, 10, 25, 10, Color::Black);
        assert_eq!(black_count(&c), 0);
    }

    #[test]
    fn filled_triangle_vertex_order_does_not_matter() {
        let mut a = canvas();
        let mut b = canvas();

        a.fill_triangle(5, 5, 30, 10, 12, 28, Color::Black);
        b.fill_triangle(12, 28, 5, 5, 30, 10, Color::Black);

        assert_eq!(a, b);
    }

    #[test]
    fn filled_triangle_covers_its_outline_span() {
        let mut c = canvas();
        c.fill_triangle(4, 4, 24, 4, 14, 20, Color::Black);

        // Top edge is a full span, apex is filled.
        for x in 4..=24 {
            assert_eq!(c.pixel(x, 4), Some(false), "x={x}");
        }
        assert_eq!(c.pixel(14, 19), Some(false));
    }

    #[test]
    fn bitmap_blit_draws_set_bits_black_and_clear_bits_white() {
        let mut c = canvas();
        c.fill_rect(0, 0, 15, 1, Color::Black);

        // 12 wide -> 2 bytes per row.
        let data = [0b1010_0000, 0b0001_0000, 0xFF, 0xF0];
        assert!(c.blit_bitmap(0, 0, 12, 2, &data));

        assert_eq!(c.pixel(0, 0), Some(false));
        assert_eq!(c.pixel(1, 0), Some(true));
        assert_eq!(c.pixel(2, 0), Some(false));
        assert_eq!(c.pixel(11, 0), Some(false));
        for x in 0..12 {
            assert_eq!(c.pixel(x, 1), Some(false));
        }
        // Unsourced pixels stay untouched.
        assert_eq!(c.pixel(12, 0), Some(false));
    }

    #[test]
    fn short_bitmap_data_is_rejected() {
        let mut c = canvas();
        assert!(!c.blit_bitmap(0, 0, 12, 2, &[0xFF, 0xFF, 0xFF]));
        assert_eq!(black_count(&c), 0);
    }

    #[test]
    fn qr_blit_at_module_size_one_reproduces_the_bit_pattern() {
        let mut modules = [[0u8; QR_ROW_BYTES]; QR_MODULES];
        modules[0] = [0xA5, 0x00, 0xFF, 0x00];
        modules[30] = [0x80, 0x00, 0x00, 0x02];

        let mut c = canvas();
        c.blit_qr(2, 3, 1, &modules);

        for (row, line) in modules.iter().enumerate() {
            for col in 0..QR_MODULES {
                let bit = (line[col / 8] >> (7 - (col % 8))) & 1;
                let expected_white = bit == 0;
                assert_eq!(
                    c.pixel(2 + col as i32, 3 + row as i32),
                    Some(expected_white),
                    "module ({col},{row})"
                );
            }
        }
    }

    #[test]
    fn qr_modules_scale_to_filled_boxes() {
        let mut modules = [[0u8; QR_ROW_BYTES]; QR_MODULES];
        modules[0][0] = 0x80;

        let mut c = canvas();
        c.blit_qr(0, 0, 2, &modules);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(c.pixel(x, y), Some(false));
            }
        }
        assert_eq!(c.pixel(2, 0), Some(true));
    }
}
