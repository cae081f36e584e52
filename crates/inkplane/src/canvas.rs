//! Dual-plane in-memory framebuffer.

use crate::{Color, Rotation};

/// Plane capacity in bytes. Sized for the largest supported panel
/// (296x128 at 1bpp).
pub const BUFFER_CAP: usize = 4736;

/// Canvas construction errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CanvasError {
    /// Requested resolution does not fit [`BUFFER_CAP`].
    Oversized,
    /// Zero width or height.
    Empty,
}

/// Dual-plane 1bpp framebuffer with rotation-aware pixel addressing.
///
/// Bit mapping within one line byte: bit 7 is the first pixel in that byte.
/// Logical coordinates are bounds-checked on every write; out-of-range
/// writes are rejected rather than wrapping.
#[derive(Clone)]
pub struct Canvas {
    primary: [u8; BUFFER_CAP],
    accent: [u8; BUFFER_CAP],
    width: u32,
    height: u32,
    line_bytes: usize,
    rotation: Rotation,
    mirror_h: bool,
    mirror_v: bool,
    has_accent: bool,
}

impl Canvas {
    /// Creates a canvas for a `width` x `height` panel, cleared to white.
    pub fn new(width: u32, height: u32, has_accent: bool) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::Empty);
        }

        let line_bytes = (width as usize).div_ceil(8);
        if line_bytes * height as usize > BUFFER_CAP {
            return Err(CanvasError::Oversized);
        }

        let mut canvas = Self {
            primary: [0u8; BUFFER_CAP],
            accent: [0u8; BUFFER_CAP],
            width,
            height,
            line_bytes,
            rotation: Rotation::R0,
            mirror_h: false,
            mirror_v: false,
            has_accent,
        };
        canvas.clear();
        Ok(canvas)
    }

    /// Physical panel width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical panel height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per physical line.
    pub fn line_bytes(&self) -> usize {
        self.line_bytes
    }

    /// Logical width under the active rotation.
    pub fn logical_width(&self) -> u32 {
        if self.rotation.swaps_axes() {
            self.height
        } else {
            self.width
        }
    }

    /// Logical height under the active rotation.
    pub fn logical_height(&self) -> u32 {
        if self.rotation.swaps_axes() {
            self.width
        } else {
            self.height
        }
    }

    /// Whether an accent plane is driven.
    pub fn has_accent(&self) -> bool {
        self.has_accent
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Sets the rotation. Changed rarely (device orientation), read on
    /// every pixel write.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Sets independent horizontal/vertical mirroring, applied after
    /// rotation in physical space.
    pub fn set_mirror(&mut self, horizontal: bool, vertical: bool) {
        self.mirror_h = horizontal;
        self.mirror_v = vertical;
    }

    /// Active primary-plane bytes (`height * line_bytes`).
    pub fn primary(&self) -> &[u8] {
        &self.primary[..self.height as usize * self.line_bytes]
    }

    /// Active accent-plane bytes (`height * line_bytes`).
    pub fn accent(&self) -> &[u8] {
        &self.accent[..self.height as usize * self.line_bytes]
    }

    /// Resets the primary plane to white and the accent plane to clear.
    pub fn clear(&mut self) {
        let used = self.height as usize * self.line_bytes;
        self.primary[..used].fill(0xFF);
        self.accent[..used].fill(0x00);
    }

    /// Maps a logical coordinate through rotation and mirroring.
    ///
    /// Returns the physical `(x, y)` or `None` when the logical coordinate
    /// is out of range.
    fn map(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as u32, y as u32);
        if x >= self.logical_width() || y >= self.logical_height() {
            return None;
        }

        let (mut nx, mut ny) = match self.rotation {
            Rotation::R0 => (x, y),
            Rotation::R90 => (self.width - 1 - y, x),
            Rotation::R180 => (self.width - 1 - x, self.height - 1 - y),
            Rotation::R270 => (y, self.height - 1 - x),
        };

        if self.mirror_h {
            nx = self.width - 1 - nx;
        }
        if self.mirror_v {
            ny = self.height - 1 - ny;
        }

        Some((nx, ny))
    }

    /// Writes one pixel at a logical coordinate.
    ///
    /// Returns `true` when the pixel was in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some((nx, ny)) = self.map(x, y) else {
            return false;
        };

        let byte_index = ny as usize * self.line_bytes + (nx as usize / 8);
        let bit_mask = 0x80u8 >> (nx % 8);

        match color {
            Color::Black => self.primary[byte_index] &= !bit_mask,
            Color::White => self.primary[byte_index] |= bit_mask,
            Color::Red => {
                if self.has_accent {
                    self.accent[byte_index] |= bit_mask;
                }
            }
            Color::Swap => self.primary[byte_index] ^= bit_mask,
        }

        true
    }

    /// Reads a primary-plane pixel (true = white) at a logical coordinate.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (nx, ny) = self.map(x, y)?;
        let byte_index = ny as usize * self.line_bytes + (nx as usize / 8);
        let bit_mask = 0x80u8 >> (nx % 8);
        Some((self.primary[byte_index] & bit_mask) != 0)
    }

    /// Reads an accent-plane pixel at a logical coordinate.
    pub fn accent_pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (nx, ny) = self.map(x, y)?;
        let byte_index = ny as usize * self.line_bytes + (nx as usize / 8);
        let bit_mask = 0x80u8 >> (nx % 8);
        Some((self.accent[byte_index] & bit_mask) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(212, 104, true).unwrap()
    }

    #[test]
    fn pixel_bit_mapping_is_msb_first_within_byte() {
        let mut c = canvas();

        assert!(c.set_pixel(0, 0, Color::Black));
        assert!(c.set_pixel(7, 0, Color::Black));
        assert!(c.set_pixel(8, 0, Color::Black));

        assert_eq!(c.primary()[0], 0b0111_1110);
        assert_eq!(c.primary()[1], 0b0111_1111);
    }

    #[test]
    fn out_of_bounds_write_is_rejected() {
        let mut c = canvas();

        assert!(!c.set_pixel(212, 0, Color::Black));
        assert!(!c.set_pixel(0, 104, Color::Black));
        assert!(!c.set_pixel(-1, 0, Color::Black));
        assert_eq!(c.primary()[0], 0xFF);
    }

    #[test]
    fn black_then_white_restores_the_byte() {
        let mut c = canvas();
        let before = c.primary()[5 * c.line_bytes()];

        c.set_pixel(0, 5, Color::Black);
        c.set_pixel(0, 5, Color::White);

        assert_eq!(c.primary()[5 * c.line_bytes()], before);
    }

    #[test]
    fn double_swap_is_a_no_op() {
        let mut c = canvas();
        let before = c.primary()[0];

        c.set_pixel(3, 0, Color::Swap);
        c.set_pixel(3, 0, Color::Swap);

        assert_eq!(c.primary()[0], before);
    }

    #[test]
    fn red_only_touches_the_accent_plane() {
        let mut c = canvas();

        c.set_pixel(0, 0, Color::Red);

        assert_eq!(c.primary()[0], 0xFF);
        assert_eq!(c.accent()[0], 0x80);
        assert_eq!(c.accent_pixel(0, 0), Some(true));
    }

    #[test]
    fn red_is_ignored_without_accent_plane() {
        let mut c = Canvas::new(212, 104, false).unwrap();

        c.set_pixel(0, 0, Color::Red);

        assert_eq!(c.accent()[0], 0x00);
    }

    #[test]
    fn rotation_mapping_is_a_bijection() {
        for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
            let mut c = Canvas::new(16, 8, false).unwrap();
            c.set_rotation(rotation);

            for y in 0..c.logical_height() as i32 {
                for x in 0..c.logical_width() as i32 {
                    // A second write to the same physical bit would undo
                    // the first swap, so any collision leaves white bits.
                    assert!(c.set_pixel(x, y, Color::Swap));
                }
            }

            assert!(c.primary().iter().all(|&b| b == 0x00), "{rotation:?}");
        }
    }

    #[test]
    fn mirrored_mapping_stays_bijective() {
        let mut c = Canvas::new(16, 8, false).unwrap();
        c.set_rotation(Rotation::R90);
        c.set_mirror(true, true);

        for y in 0..c.logical_height() as i32 {
            for x in 0..c.logical_width() as i32 {
                assert!(c.set_pixel(x, y, Color::Swap));
            }
        }

        assert!(c.primary().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn logical_dimensions_swap_under_rotation() {
        let mut c = canvas();
        c.set_rotation(Rotation::R90);

        assert_eq!(c.logical_width(), 104);
        assert_eq!(c.logical_height(), 212);
        assert!(c.set_pixel(103, 211, Color::Black));
        assert!(!c.set_pixel(211, 103, Color::Black));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        assert_eq!(Canvas::new(400, 300, false), Err(CanvasError::Oversized));
        assert_eq!(Canvas::new(0, 104, false), Err(CanvasError::Empty));
        assert!(Canvas::new(296, 128, true).is_ok());
    }
}

#[cfg(test)]
impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rotation", &self.rotation)
            .finish()
    }
}

#[cfg(test)]
impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.primary() == other.primary()
            && self.accent() == other.accent()
    }
}
